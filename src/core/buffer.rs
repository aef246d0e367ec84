//! Buffer: the document of record, an ordered list of lines
//! No cursor, selection or history (those belong to Editor)
//!
//! Lines never contain `\n`, and there is always at least one line: an empty
//! document is a single empty line. Content only changes through
//! [`Diff::apply`](crate::core::diff::Diff::apply) and
//! [`Diff::revert`](crate::core::diff::Diff::revert).

use std::fs;
use std::io::{self, Write};
use std::ops::Range;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::core::error::EditorError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<String>,
    /// Dirty flag (true if buffer has unsaved changes)
    pub modified: bool,
}

impl Buffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::from_lines(Vec::new())
    }

    /// Create a buffer from lines. An empty list becomes one empty line.
    pub fn from_lines(mut lines: Vec<String>) -> Self {
        if lines.is_empty() {
            lines.push(String::new());
        }
        debug_assert!(lines.iter().all(|l| !l.contains('\n')));
        Self {
            lines,
            modified: false,
        }
    }

    /// Split `text` on `\n`; a final terminator does not start another line.
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        if lines.len() > 1 && lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        Self::from_lines(lines)
    }

    /// Load a buffer from a file. A missing file gives an empty buffer so
    /// new files can be created by saving.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EditorError> {
        let path = path.as_ref();
        Self::validate_file_path(path)?;

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "new file");
                return Ok(Self::new());
            }
            Err(e) => return Err(EditorError::io(path, e)),
        };

        // Invalid UTF-8 is replaced rather than refused
        let text = String::from_utf8_lossy(&bytes);
        let buffer = Self::from_text(&text);
        info!(path = %path.display(), lines = buffer.line_count(), "loaded");
        Ok(buffer)
    }

    /// Refuse directories and special files, which would hang or fail a read
    fn validate_file_path(path: &Path) -> Result<(), EditorError> {
        let metadata = match fs::metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(EditorError::io(path, e)),
        };

        if metadata.is_dir() {
            return Err(EditorError::io(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "is a directory"),
            ));
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            let file_type = metadata.file_type();
            if file_type.is_block_device()
                || file_type.is_char_device()
                || file_type.is_fifo()
                || file_type.is_socket()
            {
                return Err(EditorError::io(
                    path,
                    io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
                ));
            }
        }

        Ok(())
    }

    /// Save buffer to file, every line followed by `\n`
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        let path = path.as_ref();
        self.write_atomic(path)
            .map_err(|e| EditorError::io(path, e))?;
        self.modified = false;
        info!(path = %path.display(), lines = self.lines.len(), "saved");
        Ok(())
    }

    fn write_atomic(&self, path: &Path) -> io::Result<()> {
        // Write to temp file first for atomic save
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut temp_file = NamedTempFile::new_in(parent)?;
        {
            let mut out = io::BufWriter::new(temp_file.as_file_mut());
            for line in &self.lines {
                out.write_all(line.as_bytes())?;
                out.write_all(b"\n")?;
            }
            out.flush()?;
        }
        temp_file.as_file().sync_all()?;
        temp_file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    // ==================== Content Access ====================

    /// Get number of lines in buffer (never zero)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Index of the last line
    pub fn last_line(&self) -> usize {
        self.lines.len() - 1
    }

    /// Content of a line. Panics when `idx` is past the end.
    pub fn line(&self, idx: usize) -> &str {
        &self.lines[idx]
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The document as it would be written to disk
    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    // ==================== Editing ====================

    /// Replace `range` with `replacement`. Only the diff engine calls this.
    pub(crate) fn splice(&mut self, range: Range<usize>, replacement: &[String]) {
        assert!(
            range.start <= range.end && range.end <= self.lines.len(),
            "line range {:?} outside buffer of {} lines",
            range,
            self.lines.len()
        );
        debug!(?range, inserted = replacement.len(), "splice");
        self.lines.splice(range, replacement.iter().cloned());
        assert!(!self.lines.is_empty(), "buffer left without lines");
        self.modified = true;
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}
