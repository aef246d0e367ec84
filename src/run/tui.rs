//! Terminal (TUI) mode implementation.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::core::clipboard::SystemClipboard;
use crate::core::dispatcher::{self, DispatchResult};
use crate::core::editor::Editor;
use crate::core::keymap::Keymap;
use crate::terminal::events::{EditorEvent, EventHandler};
use crate::terminal::raw::RawMode;
use crate::terminal::render::Renderer;

/// Edit `path` in the terminal until the user quits.
pub fn run_terminal_mode(path: &Path, config: &Config) -> Result<()> {
    let mut editor = Editor::open(path, config, Box::new(SystemClipboard::new()))
        .with_context(|| format!("cannot open {}", path.display()))?;
    let mut keymap = Keymap::from_config(config);
    info!(path = %path.display(), lines = editor.buffer.line_count(), "opened");

    let _raw_mode = RawMode::new().context("cannot set up the terminal")?;
    let mut stdout = io::stdout().lock();
    let mut renderer = Renderer::new();
    let mut size = crossterm::terminal::size()?;
    renderer.render(&mut stdout, &editor, size)?;

    let mut events = EventHandler::new();
    loop {
        match events.read()? {
            EditorEvent::Input(input) => {
                if dispatcher::handle_event(&mut editor, &mut keymap, &input) == DispatchResult::Exit {
                    break;
                }
            }
            EditorEvent::Resize(cols, rows) => size = (cols, rows),
            EditorEvent::None => continue,
        }
        renderer.render(&mut stdout, &editor, size)?;
    }

    stdout.flush()?;
    Ok(())
}
