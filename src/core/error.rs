//! Errors surfaced by the editor's external collaborators.
//!
//! Broken internal invariants (a diff that does not fit the buffer, an offset
//! off a character boundary) are not represented here: they panic.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    /// Reading or writing a file failed
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The clipboard transport refused a read or write
    #[error("clipboard: {0}")]
    Clipboard(String),

    /// Saving was requested for a buffer with no file behind it
    #[error("no file name")]
    NoPath,
}

impl EditorError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_names_path() {
        let err = EditorError::io(
            "notes.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "notes.txt: denied");
    }

    #[test]
    fn test_clipboard_error_message() {
        let err = EditorError::Clipboard("unavailable".to_string());
        assert_eq!(err.to_string(), "clipboard: unavailable");
    }
}
