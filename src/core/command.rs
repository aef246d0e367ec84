//! Named editor commands
//!
//! Key bindings map key sequences to command names (`"move-left"`,
//! `"save"`); the dispatcher parses the name into a [`Command`] and runs it.
//! Cursor commands come in pairs: `move-*` moves the cursor and collapses the
//! selection onto it, `extend-*` moves only the cursor and keeps the anchor.

use std::fmt;
use std::str::FromStr;

use crate::core::movement::Motion;

/// Where a cursor command goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Left,
    Right,
    Up,
    Down,
    /// Up by the configured scroll distance
    PageUp,
    /// Down by the configured scroll distance
    PageDown,
    StartOfLine,
    EndOfLine,
    StartOfWord,
    EndOfWord,
}

impl Target {
    const ALL: [Target; 10] = [
        Target::Left,
        Target::Right,
        Target::Up,
        Target::Down,
        Target::PageUp,
        Target::PageDown,
        Target::StartOfLine,
        Target::EndOfLine,
        Target::StartOfWord,
        Target::EndOfWord,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Target::Left => "left",
            Target::Right => "right",
            Target::Up => "up",
            Target::Down => "down",
            Target::PageUp => "page-up",
            Target::PageDown => "page-down",
            Target::StartOfLine => "start-of-line",
            Target::EndOfLine => "end-of-line",
            Target::StartOfWord => "start-of-word",
            Target::EndOfWord => "end-of-word",
        }
    }

    pub fn motion(self, scroll_lines: usize) -> Motion {
        match self {
            Target::Left => Motion::Left,
            Target::Right => Motion::Right,
            Target::Up => Motion::Up(1),
            Target::Down => Motion::Down(1),
            Target::PageUp => Motion::Up(scroll_lines),
            Target::PageDown => Motion::Down(scroll_lines),
            Target::StartOfLine => Motion::StartOfLine,
            Target::EndOfLine => Motion::EndOfLine,
            Target::StartOfWord => Motion::StartOfWord,
            Target::EndOfWord => Motion::EndOfWord,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // Normal mode: selection
    Move(Target),
    Extend(Target),
    CollapseSelection,

    // Normal mode: entering Insert
    InsertBefore,
    InsertAfter,
    OpenLineAbove,
    OpenLineBelow,
    ChangeSelection,
    ChangeLines,

    // Normal mode: edits
    DeleteSelection,
    DeleteLines,
    Undo,
    Redo,
    Copy,
    Paste,
    CommandMode,

    // Command mode
    Save,
    Quit,

    // Insert mode
    InsertNewline,
    InsertTab,
    Backspace,
    BackspaceWord,
    DeleteForward,
    NormalMode,
}

const SIMPLE: [(&str, Command); 22] = [
    ("collapse-selection", Command::CollapseSelection),
    ("insert-before", Command::InsertBefore),
    ("insert-after", Command::InsertAfter),
    ("open-line-above", Command::OpenLineAbove),
    ("open-line-below", Command::OpenLineBelow),
    ("change-selection", Command::ChangeSelection),
    ("change-lines", Command::ChangeLines),
    ("delete-selection", Command::DeleteSelection),
    ("delete-lines", Command::DeleteLines),
    ("undo", Command::Undo),
    ("redo", Command::Redo),
    ("copy", Command::Copy),
    ("paste", Command::Paste),
    ("command-mode", Command::CommandMode),
    ("save", Command::Save),
    ("quit", Command::Quit),
    ("insert-newline", Command::InsertNewline),
    ("insert-tab", Command::InsertTab),
    ("backspace", Command::Backspace),
    ("backspace-word", Command::BackspaceWord),
    ("delete-forward", Command::DeleteForward),
    ("normal-mode", Command::NormalMode),
];

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(target) = s.strip_prefix("move-").and_then(Target::from_name) {
            return Ok(Command::Move(target));
        }
        if let Some(target) = s.strip_prefix("extend-").and_then(Target::from_name) {
            return Ok(Command::Extend(target));
        }
        SIMPLE
            .iter()
            .find(|(name, _)| *name == s)
            .map(|&(_, cmd)| cmd)
            .ok_or_else(|| format!("Unknown command: {}", s))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move(t) => write!(f, "move-{}", t.name()),
            Command::Extend(t) => write!(f, "extend-{}", t.name()),
            other => {
                let name = SIMPLE
                    .iter()
                    .find(|(_, cmd)| cmd == other)
                    .map_or("?", |(name, _)| name);
                f.write_str(name)
            }
        }
    }
}
