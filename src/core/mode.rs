//! Editor modes

use std::fmt;

/// Which key table is live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys move the selection and run edits
    #[default]
    Normal,
    /// Keys type text; everything typed is one undo step
    Insert,
    /// Waiting for the single key after the command prefix
    Command,
}

/// Terminal cursor style for a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorShape {
    Block,
    Underline,
}

impl Mode {
    pub fn cursor_shape(self) -> CursorShape {
        match self {
            Mode::Insert => CursorShape::Underline,
            Mode::Normal | Mode::Command => CursorShape::Block,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Command => "COMMAND",
        })
    }
}
