use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::core::input::{InputEvent, Key};

/// Editor events
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    Input(InputEvent),
    Resize(u16, u16),
    None,
}

#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    /// Create a new EventHandler
    pub fn new() -> Self {
        Self
    }

    /// Block until the terminal produces the next event
    pub fn read(&mut self) -> io::Result<EditorEvent> {
        Ok(translate(event::read()?))
    }
}

/// Convert a crossterm event. Key releases and repeats reported by some
/// platforms are dropped so each press is seen once.
pub fn translate(event: Event) -> EditorEvent {
    match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            EditorEvent::Input(crossterm_key_to_input(key_event))
        }
        Event::Resize(cols, rows) => EditorEvent::Resize(cols, rows),
        _ => EditorEvent::None,
    }
}

fn crossterm_key_to_input(key_event: event::KeyEvent) -> InputEvent {
    let code = key_event.code;
    let modifiers = key_event.modifiers;

    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let mut alt = modifiers.contains(KeyModifiers::ALT);
    let mut ctrl = modifiers.contains(KeyModifiers::CONTROL);

    let key = match code {
        KeyCode::Char(c) => {
            if ctrl && !alt {
                Key::Ctrl(c)
            } else if alt && !ctrl {
                Key::Alt(c)
            } else {
                // AltGr reaches us as Ctrl+Alt and types a plain character
                ctrl = false;
                alt = false;
                Key::Char(c)
            }
        }
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Tab | KeyCode::BackTab => Key::Tab,
        KeyCode::Delete => Key::Delete,
        KeyCode::Insert => Key::Insert,
        KeyCode::F(n) => Key::F(n),
        KeyCode::Esc => Key::Esc,
        _ => Key::Null,
    };

    InputEvent {
        key,
        shift,
        alt,
        ctrl,
    }
}
