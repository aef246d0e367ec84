use tracing::{debug, info, warn};

use crate::core::command::Command;
use crate::core::editor::Editor;
use crate::core::input::{InputEvent, LookupResult};
use crate::core::keymap::Keymap;
use crate::core::mode::Mode;
use crate::core::selection::SelectionEnd;

/// Result of command dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// Command executed successfully
    Success,
    /// Key or command not bound in the current mode
    NotHandled,
    /// Exit requested
    Exit,
}

/// Route one key press through the table for the current mode.
///
/// Command mode lasts exactly one key: whatever it is, the editor is back in
/// Normal mode before the bound command (if any) runs.
pub fn handle_event(editor: &mut Editor, keymap: &mut Keymap, event: &InputEvent) -> DispatchResult {
    editor.message = None;
    let mode = editor.mode;

    let lookup = keymap.process_key(mode, event);
    editor.pending_keys = keymap.current_sequence(mode);

    match lookup {
        LookupResult::Command(name) => {
            if mode == Mode::Command {
                editor.mode = Mode::Normal;
            }
            match name.parse::<Command>() {
                Ok(command) => dispatch(editor, command),
                Err(e) => {
                    warn!(%mode, error = %e, "bound command does not exist");
                    DispatchResult::NotHandled
                }
            }
        }
        LookupResult::Prefix => DispatchResult::Success,
        LookupResult::InsertChar(c) if mode == Mode::Insert => {
            editor.insert(c);
            DispatchResult::Success
        }
        LookupResult::InsertChar(_) | LookupResult::DeadEnd => {
            if mode == Mode::Command {
                editor.mode = Mode::Normal;
            }
            DispatchResult::NotHandled
        }
    }
}

/// Run a command against the editor
pub fn dispatch(editor: &mut Editor, command: Command) -> DispatchResult {
    debug!(%command, mode = %editor.mode, "dispatch");
    let scroll = editor.scroll_lines();

    match command {
        Command::Move(target) => editor.move_cursor(target.motion(scroll)),
        Command::Extend(target) => editor.extend(target.motion(scroll), SelectionEnd::Cursor),
        Command::CollapseSelection => editor.collapse_selection(),

        Command::InsertBefore => {
            editor.start_change();
            editor.enter_insert();
        }
        Command::InsertAfter => {
            editor.start_change();
            editor.step_past_cursor();
            editor.enter_insert();
        }
        Command::OpenLineAbove => {
            editor.start_change();
            editor.new_line_above();
            editor.enter_insert();
        }
        Command::OpenLineBelow => {
            editor.start_change();
            editor.enter_insert();
            editor.open_line_below();
        }
        Command::ChangeSelection => {
            editor.start_change();
            editor.delete_selection();
            editor.enter_insert();
        }
        Command::ChangeLines => {
            editor.start_change();
            // Deleting everything already leaves the empty line to type on
            if !editor.delete_lines() {
                editor.new_line_above();
            }
            editor.enter_insert();
        }

        Command::DeleteSelection => {
            editor.start_change();
            editor.delete_selection();
            editor.settle_cursor();
            editor.end_change();
        }
        Command::DeleteLines => {
            editor.start_change();
            editor.delete_lines();
            editor.end_change();
        }
        Command::Undo => editor.undo(),
        Command::Redo => editor.redo(),
        Command::Copy => editor.copy(),
        Command::Paste => editor.paste(),
        Command::CommandMode => editor.mode = Mode::Command,

        Command::Save => editor.save(),
        Command::Quit => {
            info!("quit");
            return DispatchResult::Exit;
        }

        Command::InsertNewline => editor.insert('\n'),
        Command::InsertTab => editor.insert('\t'),
        Command::Backspace => editor.backspace(),
        Command::BackspaceWord => editor.backspace_word(),
        Command::DeleteForward => editor.forward_delete(),
        Command::NormalMode => editor.leave_insert(),
    }

    DispatchResult::Success
}
