use vee::config::Config;
use vee::core::buffer::Buffer;
use vee::core::clipboard::MemoryClipboard;
use vee::core::dispatcher::{handle_event, DispatchResult};
use vee::core::editor::Editor;
use vee::core::input::{InputEvent, Key};
use vee::core::keymap::Keymap;
use vee::core::mode::Mode;
use vee::core::movement::Motion;
use vee::core::position::{Offset, Position};
use vee::core::selection::Selection;
use vee::core::utf8;
use vee::user_config;

fn lines(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn session(v: &[&str]) -> (Editor, Keymap) {
    let mut config = Config::default();
    user_config::configure(&mut config);
    let editor = Editor::new(
        Buffer::from_lines(lines(v)),
        &config,
        Box::new(MemoryClipboard::new()),
    );
    (editor, Keymap::from_config(&config))
}

fn press(editor: &mut Editor, keymap: &mut Keymap, key: Key) -> DispatchResult {
    handle_event(editor, keymap, &InputEvent::plain(key))
}

fn type_keys(editor: &mut Editor, keymap: &mut Keymap, text: &str) {
    for c in text.chars() {
        press(editor, keymap, Key::Char(c));
    }
}

fn at(editor: &Editor, line: usize, offset: Offset) -> Position {
    Position::at_offset(&editor.buffer, line, offset, editor.tab_width())
}

#[test]
fn split_at_end_of_line() {
    let (mut ed, _) = session(&["abc", "def"]);
    ed.selection = Selection::point(at(&ed, 0, Offset::At(3)));
    ed.start_change();
    ed.insert('\n');

    assert_eq!(ed.buffer.lines(), lines(&["abc", "", "def"]).as_slice());
    assert_eq!(ed.cursor().line, 1);
    assert_eq!(ed.cursor().offset, Offset::At(0));
}

#[test]
fn delete_selected_word() {
    let (mut ed, _) = session(&["hello world"]);
    ed.selection = Selection::new(at(&ed, 0, Offset::At(0)), at(&ed, 0, Offset::At(4)));
    ed.start_change();
    ed.delete_selection();
    ed.end_change();

    assert_eq!(ed.buffer.lines(), lines(&[" world"]).as_slice());
    assert_eq!(ed.cursor().line, 0);
    assert_eq!(ed.cursor().offset, Offset::At(0));
}

#[test]
fn delete_whole_lines_up_to_start_of_next() {
    let (mut ed, _) = session(&["a", "b", "c"]);
    ed.selection = Selection::new(
        at(&ed, 0, Offset::BeforeLine),
        at(&ed, 2, Offset::BeforeLine),
    );
    ed.start_change();
    ed.delete_lines();
    ed.end_change();

    assert_eq!(ed.buffer.lines(), lines(&["c"]).as_slice());
}

#[test]
fn tab_column_survives_vertical_moves() {
    let buffer = Buffer::from_lines(lines(&["\tx", "ab", "abcdefg"]));
    assert_eq!(utf8::column_of(buffer.line(0), Offset::At(1), 4), 4);

    let start = Position::at_offset(&buffer, 0, Offset::At(1), 4);
    let short = Motion::Down(1).apply(&buffer, start, 4);
    assert_eq!(short.offset, Offset::At(1));
    assert_eq!(short.col, 4);

    let long = Motion::Down(1).apply(&buffer, short, 4);
    assert_eq!(long.offset, Offset::At(4));
}

#[test]
fn undo_and_redo_round_trip_a_typing_session() {
    let (mut ed, mut km) = session(&["first", "second"]);
    type_keys(&mut ed, &mut km, "j");
    let before_text = ed.buffer.lines().to_vec();
    let before_sel = (ed.anchor(), ed.cursor());

    type_keys(&mut ed, &mut km, "D");
    assert_eq!(ed.mode, Mode::Insert);
    type_keys(&mut ed, &mut km, "third");
    press(&mut ed, &mut km, Key::Enter);
    type_keys(&mut ed, &mut km, "fourth");
    press(&mut ed, &mut km, Key::Esc);

    let after_text = ed.buffer.lines().to_vec();
    let after_sel = (ed.anchor(), ed.cursor());
    assert_eq!(
        after_text,
        lines(&["first", "second", "third", "fourth"])
    );
    assert_eq!(ed.history.len(), 1);

    type_keys(&mut ed, &mut km, "z");
    assert_eq!(ed.buffer.lines(), before_text.as_slice());
    assert_eq!((ed.anchor(), ed.cursor()), before_sel);

    type_keys(&mut ed, &mut km, "Z");
    assert_eq!(ed.buffer.lines(), after_text.as_slice());
    assert_eq!((ed.anchor(), ed.cursor()), after_sel);
}

#[test]
fn new_change_discards_redo_future() {
    let (mut ed, mut km) = session(&["a", "b", "c"]);
    type_keys(&mut ed, &mut km, "X");
    assert_eq!(ed.buffer.lines(), lines(&["b", "c"]).as_slice());

    type_keys(&mut ed, &mut km, "z");
    assert_eq!(ed.buffer.lines(), lines(&["a", "b", "c"]).as_slice());

    type_keys(&mut ed, &mut km, "jX");
    assert_eq!(ed.buffer.lines(), lines(&["a", "c"]).as_slice());

    // The first deletion is gone for good
    type_keys(&mut ed, &mut km, "Z");
    assert_eq!(ed.buffer.lines(), lines(&["a", "c"]).as_slice());
    assert_eq!(ed.history.len(), 1);
}

#[test]
fn copy_whole_line_and_paste_above_cursor_line() {
    let (mut ed, mut km) = session(&["one", "two"]);
    ed.selection = Selection::new(
        at(&ed, 0, Offset::BeforeLine),
        at(&ed, 1, Offset::BeforeLine),
    );
    type_keys(&mut ed, &mut km, "c");
    press(&mut ed, &mut km, Key::Esc);
    assert!(ed.selection.is_point());

    type_keys(&mut ed, &mut km, "v");
    assert_eq!(ed.buffer.lines(), lines(&["one", "one", "two"]).as_slice());
    assert_eq!(ed.cursor().line, 2);
    assert_eq!(ed.cursor().offset, Offset::BeforeLine);

    type_keys(&mut ed, &mut km, "z");
    assert_eq!(ed.buffer.lines(), lines(&["one", "two"]).as_slice());
}

#[test]
fn quit_needs_command_mode() {
    let (mut ed, mut km) = session(&["x"]);
    assert_eq!(press(&mut ed, &mut km, Key::Char('q')), DispatchResult::NotHandled);
    press(&mut ed, &mut km, Key::Char(' '));
    assert_eq!(press(&mut ed, &mut km, Key::Char('q')), DispatchResult::Exit);
}

#[test]
fn save_through_command_mode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.txt");
    let mut config = Config::default();
    user_config::configure(&mut config);
    let mut ed = Editor::open(&path, &config, Box::new(MemoryClipboard::new())).unwrap();
    let mut km = Keymap::from_config(&config);

    type_keys(&mut ed, &mut km, "ahello");
    press(&mut ed, &mut km, Key::Esc);
    type_keys(&mut ed, &mut km, " w");

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    assert!(!ed.buffer.modified);
    assert!(ed.message.is_some());
}
