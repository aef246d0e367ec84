//! Application execution modes for vee.

mod tui;

pub use tui::run_terminal_mode;
