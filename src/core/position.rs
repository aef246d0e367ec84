//! Cursor and anchor positions.

use crate::core::buffer::Buffer;
use crate::core::utf8;

/// Byte offset within a line.
///
/// `BeforeLine` sits before the first character of the line. An empty line
/// can only hold `BeforeLine` in Normal mode, and a selection bounded by it
/// covers whole lines including the preceding line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Offset {
    BeforeLine,
    At(usize),
}

impl Offset {
    /// Byte index, treating `BeforeLine` as the start of the line.
    pub fn byte(self) -> usize {
        match self {
            Offset::BeforeLine => 0,
            Offset::At(x) => x,
        }
    }
}

/// A location in the buffer plus the visual column it was last placed at.
///
/// `col` only changes on horizontal movement; vertical movement re-derives
/// `offset` from it, which keeps the cursor in its column across short lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub offset: Offset,
    pub col: usize,
}

impl Position {
    /// Place at `offset` on `line`, recomputing the visual column.
    pub fn at_offset(buffer: &Buffer, line: usize, offset: Offset, tab_width: usize) -> Self {
        Self {
            line,
            offset,
            col: utf8::column_of(buffer.line(line), offset, tab_width),
        }
    }

    /// Place on `line` at the character covering `col`, keeping `col` cached.
    pub fn at_column(buffer: &Buffer, line: usize, col: usize, tab_width: usize) -> Self {
        Self {
            line,
            offset: utf8::offset_for_column(buffer.line(line), col, tab_width),
            col,
        }
    }

    /// Document order key; `BeforeLine` sorts before offset 0.
    pub fn key(&self) -> (usize, Offset) {
        (self.line, self.offset)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self {
            line: 0,
            offset: Offset::BeforeLine,
            col: 0,
        }
    }
}
