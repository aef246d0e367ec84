//! The headless editing engine: buffer, coordinates, movement, selection,
//! diffs and history, plus the modal command layer driving them. Nothing in
//! here touches the terminal.

pub mod buffer;
pub mod clipboard;
pub mod command;
pub mod diff;
pub mod dispatcher;
pub mod editor;
pub mod error;
pub mod history;
pub mod input;
pub mod keymap;
pub mod mode;
pub mod movement;
pub mod position;
pub mod selection;
pub mod utf8;
