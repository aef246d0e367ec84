//! Selection Model
//!
//! A selection is an anchor and a cursor. Both are inclusive: the character
//! under each end is selected. An end at [`Offset::BeforeLine`] selects
//! whole lines:
//! - as `from`, the selection starts at the beginning of its line
//! - as `to`, the selection stops just after the line break before its line,
//!   leaving that line's content unselected

use crate::core::buffer::Buffer;
use crate::core::position::Position;
use crate::core::utf8;

/// Which end of the selection a motion moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEnd {
    Anchor,
    Cursor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Where the selection started
    pub anchor: Position,
    /// Where the selection ends, and where edits happen
    pub cursor: Position,
}

impl Selection {
    /// A selection covering just `pos`
    pub fn point(pos: Position) -> Self {
        Self {
            anchor: pos,
            cursor: pos,
        }
    }

    pub fn new(anchor: Position, cursor: Position) -> Self {
        Self { anchor, cursor }
    }

    /// True when anchor and cursor are the same location
    pub fn is_point(&self) -> bool {
        self.anchor.key() == self.cursor.key()
    }

    /// Collapse the anchor onto the cursor
    pub fn collapse(&mut self) {
        self.anchor = self.cursor;
    }

    pub fn end_mut(&mut self, end: SelectionEnd) -> &mut Position {
        match end {
            SelectionEnd::Anchor => &mut self.anchor,
            SelectionEnd::Cursor => &mut self.cursor,
        }
    }

    /// The ends in document order: `(from, to)`
    pub fn normalize(&self) -> (Position, Position) {
        if self.anchor.key() <= self.cursor.key() {
            (self.anchor, self.cursor)
        } else {
            (self.cursor, self.anchor)
        }
    }

    /// Byte range of the selection on `line`, and whether the line break
    /// after `line` is selected too.
    pub fn span_on(&self, buffer: &Buffer, line: usize) -> Option<(usize, usize, bool)> {
        let (from, to) = self.normalize();
        if line < from.line || line > to.line {
            return None;
        }
        let text = buffer.line(line);
        let start = if line == from.line { from.offset.byte() } else { 0 };
        if line == to.line {
            Some((start, utf8::char_end(text, to.offset), false))
        } else {
            Some((start, text.len(), true))
        }
    }

    /// The selected text with lines joined by `\n`
    pub fn text(&self, buffer: &Buffer) -> String {
        let (from, to) = self.normalize();
        let first = buffer.line(from.line);
        let last = buffer.line(to.line);
        let start = from.offset.byte();
        let end = utf8::char_end(last, to.offset);

        if from.line == to.line {
            return first[start..end.max(start)].to_string();
        }

        let mut text = String::new();
        text.push_str(&first[start..]);
        for line in &buffer.lines()[from.line + 1..to.line] {
            text.push('\n');
            text.push_str(line);
        }
        text.push('\n');
        text.push_str(&last[..end]);
        text
    }
}
