//! Editor session: buffer, selection, history and mode in one owned value.
//!
//! Every text change goes through [`Editor::apply_diff`], which hands the
//! diff to the history so it is folded into the open change. Edits made in
//! Insert mode rely on the change opened when Insert mode was entered;
//! Normal mode edits are bracketed by the dispatcher.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::Config;
use crate::core::buffer::Buffer;
use crate::core::clipboard::Clipboard;
use crate::core::diff::Diff;
use crate::core::error::EditorError;
use crate::core::history::History;
use crate::core::mode::{CursorShape, Mode};
use crate::core::movement::{Motion, START_OF_WORD};
use crate::core::position::{Offset, Position};
use crate::core::selection::{Selection, SelectionEnd};
use crate::core::utf8;

pub struct Editor {
    pub buffer: Buffer,
    pub selection: Selection,
    pub history: History,
    pub mode: Mode,
    /// One-line status message, cleared by the next key
    pub message: Option<String>,
    /// Keys of a binding typed so far, shown until the binding completes
    pub pending_keys: String,
    /// File the buffer is saved to
    pub path: Option<PathBuf>,
    tab_width: usize,
    scroll_lines: usize,
    clipboard: Box<dyn Clipboard>,
}

impl Editor {
    pub fn new(buffer: Buffer, config: &Config, clipboard: Box<dyn Clipboard>) -> Self {
        let tab_width = config.tab_width();
        let start = if buffer.line(0).is_empty() {
            Offset::BeforeLine
        } else {
            Offset::At(0)
        };
        let cursor = Position::at_offset(&buffer, 0, start, tab_width);
        Self {
            buffer,
            selection: Selection::point(cursor),
            history: History::new(),
            mode: Mode::Normal,
            message: None,
            pending_keys: String::new(),
            path: None,
            tab_width,
            scroll_lines: config.scroll_lines(),
            clipboard,
        }
    }

    /// Load `path` into a new session; a missing file starts empty.
    pub fn open(
        path: impl AsRef<Path>,
        config: &Config,
        clipboard: Box<dyn Clipboard>,
    ) -> Result<Self, EditorError> {
        let path = path.as_ref();
        let buffer = Buffer::load(path)?;
        let mut editor = Self::new(buffer, config, clipboard);
        editor.path = Some(path.to_path_buf());
        Ok(editor)
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub fn scroll_lines(&self) -> usize {
        self.scroll_lines
    }

    pub fn cursor(&self) -> Position {
        self.selection.cursor
    }

    pub fn anchor(&self) -> Position {
        self.selection.anchor
    }

    pub fn cursor_shape(&self) -> CursorShape {
        self.mode.cursor_shape()
    }

    fn position(&self, line: usize, offset: Offset) -> Position {
        Position::at_offset(&self.buffer, line, offset, self.tab_width)
    }

    /// Put the cursor at `pos` and collapse the selection onto it
    fn place(&mut self, pos: Position) {
        self.selection = Selection::point(pos);
    }

    // ==================== Change bracketing ====================

    /// Open a change at the current selection
    pub fn start_change(&mut self) {
        self.history
            .start_change(self.selection.anchor, self.selection.cursor);
    }

    /// Apply a diff to the buffer as part of the open change
    pub fn apply_diff(&mut self, diff: Diff) {
        self.history.apply_diff(&mut self.buffer, diff);
    }

    /// Close the open change at the current selection
    pub fn end_change(&mut self) -> bool {
        self.history
            .end_change(self.selection.anchor, self.selection.cursor)
    }

    // ==================== Selection ====================

    /// Move the cursor and collapse the anchor onto it
    pub fn move_cursor(&mut self, motion: Motion) {
        let pos = motion.apply(&self.buffer, self.selection.cursor, self.tab_width);
        self.place(pos);
    }

    /// Move one end of the selection, leaving the other in place
    pub fn extend(&mut self, motion: Motion, end: SelectionEnd) {
        let end = self.selection.end_mut(end);
        *end = motion.apply(&self.buffer, *end, self.tab_width);
    }

    pub fn collapse_selection(&mut self) {
        self.selection.collapse();
    }

    // ==================== Mode transitions ====================

    /// Switch to Insert mode. The caller has already opened a change and
    /// positioned the cursor.
    pub fn enter_insert(&mut self) {
        let mut cursor = self.selection.cursor;
        if cursor.offset == Offset::BeforeLine {
            cursor = self.position(cursor.line, Offset::At(0));
        }
        self.place(cursor);
        self.mode = Mode::Insert;
        debug!(line = cursor.line, "insert mode");
    }

    /// Back to Normal mode: step off the insertion point and record
    /// everything typed as one change.
    pub fn leave_insert(&mut self) {
        let mut cursor = Motion::Left.apply(&self.buffer, self.selection.cursor, self.tab_width);
        if self.buffer.line(cursor.line).is_empty() {
            cursor = self.position(cursor.line, Offset::BeforeLine);
        }
        self.place(cursor);
        self.end_change();
        self.mode = Mode::Normal;
        debug!(line = cursor.line, "normal mode");
    }

    /// Put the cursor just past the character it is on, where `insert`
    /// will append.
    pub fn step_past_cursor(&mut self) {
        let cursor = self.selection.cursor;
        let end = utf8::char_end(self.buffer.line(cursor.line), cursor.offset);
        self.place(self.position(cursor.line, Offset::At(end)));
    }

    // ==================== Insert mode edits ====================

    /// Type `ch` at the cursor. `\n` splits the line.
    pub fn insert(&mut self, ch: char) {
        let cursor = self.selection.cursor;
        let line = self.buffer.line(cursor.line).to_string();
        let x = cursor.offset.byte();

        if ch == '\n' {
            let after = vec![line[..x].to_string(), line[x..].to_string()];
            self.apply_diff(Diff::new(cursor.line, vec![line], after));
            self.place(self.position(cursor.line + 1, Offset::At(0)));
            return;
        }

        let mut new_line = line.clone();
        new_line.insert(x, ch);
        self.apply_diff(Diff::new(cursor.line, vec![line], vec![new_line]));
        self.place(self.position(cursor.line, Offset::At(x + ch.len_utf8())));
    }

    /// Delete the character before the cursor, joining lines at line start
    pub fn backspace(&mut self) {
        let cursor = self.selection.cursor;
        let x = cursor.offset.byte();
        if x == 0 {
            self.join_with_previous(cursor.line);
            return;
        }
        let line = self.buffer.line(cursor.line).to_string();
        let start = utf8::prev_char_boundary(&line, x);
        self.delete_span(cursor.line, line, start, x);
    }

    /// Delete back to the start of the word or punctuation run before the
    /// cursor, or to line start when there is none
    pub fn backspace_word(&mut self) {
        let cursor = self.selection.cursor;
        let x = cursor.offset.byte();
        if x == 0 {
            self.join_with_previous(cursor.line);
            return;
        }
        let line = self.buffer.line(cursor.line).to_string();
        let start = START_OF_WORD.find(&line[..x]).map_or(0, |m| m.start());
        self.delete_span(cursor.line, line, start, x);
    }

    /// Delete the character at the cursor, joining lines at line end
    pub fn forward_delete(&mut self) {
        let cursor = self.selection.cursor;
        let line = self.buffer.line(cursor.line).to_string();
        let x = cursor.offset.byte();

        if x >= line.len() {
            if cursor.line == self.buffer.last_line() {
                return;
            }
            let next = self.buffer.line(cursor.line + 1).to_string();
            let joined = format!("{line}{next}");
            self.apply_diff(Diff::new(cursor.line, vec![line, next], vec![joined]));
            return;
        }

        let end = utf8::next_char_boundary(&line, x);
        let mut new_line = line.clone();
        new_line.replace_range(x..end, "");
        self.apply_diff(Diff::new(cursor.line, vec![line], vec![new_line]));
    }

    /// Remove `start..end` from `line` and leave the cursor at `start`
    fn delete_span(&mut self, idx: usize, line: String, start: usize, end: usize) {
        let mut new_line = line.clone();
        new_line.replace_range(start..end, "");
        self.apply_diff(Diff::new(idx, vec![line], vec![new_line]));
        self.place(self.position(idx, Offset::At(start)));
    }

    fn join_with_previous(&mut self, idx: usize) {
        if idx == 0 {
            return;
        }
        let prev = self.buffer.line(idx - 1).to_string();
        let current = self.buffer.line(idx).to_string();
        let x = prev.len();
        let joined = format!("{prev}{current}");
        self.apply_diff(Diff::new(idx - 1, vec![prev, current], vec![joined]));
        self.place(self.position(idx - 1, Offset::At(x)));
    }

    // ==================== Normal mode edits ====================

    /// Remove the selected text, leaving one line made of what was before
    /// `from` and what was after `to`
    pub fn delete_selection(&mut self) {
        let (from, to) = self.selection.normalize();
        let first = self.buffer.line(from.line);
        let last = self.buffer.line(to.line);
        let kept = format!(
            "{}{}",
            &first[..from.offset.byte()],
            &last[utf8::char_end(last, to.offset)..]
        );

        let offset = match from.offset {
            Offset::At(x) => Offset::At(x.min(kept.len())),
            Offset::BeforeLine => Offset::BeforeLine,
        };
        let before = self.buffer.lines()[from.line..=to.line].to_vec();
        if before.len() > 1 || before[0] != kept {
            self.apply_diff(Diff::new(from.line, before, vec![kept]));
        }
        self.place(self.position(from.line, offset));
    }

    /// Pull a cursor left past the end of its line back onto the last
    /// character, or to `BeforeLine` on an empty line.
    pub fn settle_cursor(&mut self) {
        let cursor = self.selection.cursor;
        let line = self.buffer.line(cursor.line);
        if let Offset::At(x) = cursor.offset {
            if x >= line.len() {
                let offset = utf8::last_char_offset(line).map_or(Offset::BeforeLine, Offset::At);
                self.place(self.position(cursor.line, offset));
            }
        }
    }

    /// Remove every line the selection touches. A selection ending before
    /// a later line's content leaves that line alone. Returns true when the
    /// whole document went and one empty line was left in its place.
    pub fn delete_lines(&mut self) -> bool {
        let (from, to) = self.selection.normalize();
        let end = if to.offset == Offset::BeforeLine && to.line > from.line {
            to.line
        } else {
            to.line + 1
        };

        let before = self.buffer.lines()[from.line..end].to_vec();
        let emptied = before.len() == self.buffer.line_count();
        let after = if emptied { vec![String::new()] } else { Vec::new() };
        self.apply_diff(Diff::new(from.line, before, after));

        let line = from.line.min(self.buffer.last_line());
        self.place(Position::at_column(
            &self.buffer,
            line,
            from.col,
            self.tab_width,
        ));
        emptied
    }

    /// Insert an empty line above the cursor's line and move onto it
    pub fn new_line_above(&mut self) {
        let cursor = self.selection.cursor;
        self.apply_diff(Diff::new(cursor.line, Vec::new(), vec![String::new()]));
        self.place(Position::at_column(
            &self.buffer,
            cursor.line,
            cursor.col,
            self.tab_width,
        ));
    }

    /// Split after the last character of the cursor's line, leaving the
    /// cursor on the new empty line below
    pub fn open_line_below(&mut self) {
        self.move_cursor(Motion::EndOfLine);
        self.step_past_cursor();
        self.insert('\n');
    }

    /// Copy the selected text to the clipboard
    pub fn copy(&mut self) {
        let text = self.selection.text(&self.buffer);
        match self.clipboard.write(&text) {
            Ok(()) => debug!(bytes = text.len(), "copied"),
            Err(e) => self.report(e),
        }
    }

    /// Insert the clipboard text after the character under the end of the
    /// selection, as a change of its own
    pub fn paste(&mut self) {
        let text = match self.clipboard.read() {
            Ok(text) => text,
            Err(e) => {
                self.report(e);
                return;
            }
        };
        if text.is_empty() {
            return;
        }

        let (_, to) = self.selection.normalize();
        let line = self.buffer.line(to.line).to_string();
        let x = utf8::char_end(&line, to.offset);

        let mut after: Vec<String> = text.split('\n').map(str::to_string).collect();
        let last = after.len() - 1;
        let pasted_end = if last == 0 { x + after[0].len() } else { after[last].len() };
        after[0].insert_str(0, &line[..x]);
        after[last].push_str(&line[x..]);

        let cursor = if text.ends_with('\n') {
            self.position_after_paste(to.line + last, Offset::BeforeLine, &after)
        } else {
            let target = &after[last];
            let offset = Offset::At(utf8::prev_char_boundary(target, pasted_end));
            self.position_after_paste(to.line + last, offset, &after)
        };

        self.start_change();
        self.apply_diff(Diff::new(to.line, vec![line], after));
        self.place(cursor);
        self.end_change();
    }

    fn position_after_paste(&self, line: usize, offset: Offset, after: &[String]) -> Position {
        let text = &after[after.len() - 1];
        Position {
            line,
            offset,
            col: utf8::column_of(text, offset, self.tab_width),
        }
    }

    // ==================== Session ====================

    pub fn undo(&mut self) {
        match self.history.undo(&mut self.buffer) {
            Some((anchor, cursor)) => self.selection = Selection::new(anchor, cursor),
            None => debug!("nothing to undo"),
        }
        self.buffer.modified = !self.history.at_saved();
    }

    pub fn redo(&mut self) {
        match self.history.redo(&mut self.buffer) {
            Some((anchor, cursor)) => self.selection = Selection::new(anchor, cursor),
            None => debug!("nothing to redo"),
        }
        self.buffer.modified = !self.history.at_saved();
    }

    /// Write the buffer to its file
    pub fn save(&mut self) {
        let Some(path) = self.path.clone() else {
            self.report(EditorError::NoPath);
            return;
        };
        match self.buffer.save(&path) {
            Ok(()) => {
                self.history.mark_saved();
                self.message = Some(format!(
                    "wrote {} lines to {}",
                    self.buffer.line_count(),
                    path.display()
                ));
            }
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, error: EditorError) {
        warn!(%error, "command failed");
        self.message = Some(error.to_string());
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("buffer", &self.buffer)
            .field("selection", &self.selection)
            .field("mode", &self.mode)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
