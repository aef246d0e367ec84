//! Clipboard transport for copy and paste
//!
//! The editor only sees the [`Clipboard`] trait. The system implementation
//! connects lazily so a headless session still starts and only fails when
//! the clipboard is actually used.

use crate::core::error::EditorError;

pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<(), EditorError>;
    fn read(&mut self) -> Result<String, EditorError>;
}

/// The desktop clipboard, via `arboard`
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn connect(&mut self) -> Result<&mut arboard::Clipboard, EditorError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| EditorError::Clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| EditorError::Clipboard("not connected".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), EditorError> {
        self.connect()?
            .set_text(text.to_owned())
            .map_err(|e| EditorError::Clipboard(e.to_string()))
    }

    fn read(&mut self) -> Result<String, EditorError> {
        self.connect()?
            .get_text()
            .map_err(|e| EditorError::Clipboard(e.to_string()))
    }
}

/// Process-local clipboard for tests and sessions without a display
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<(), EditorError> {
        self.text = Some(text.to_owned());
        Ok(())
    }

    fn read(&mut self) -> Result<String, EditorError> {
        self.text
            .clone()
            .ok_or_else(|| EditorError::Clipboard("clipboard is empty".to_string()))
    }
}
