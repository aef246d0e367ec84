//! Terminal rendering module
//!
//! Draws the whole frame on every call: the visible slice of the buffer with
//! the selection highlighted, a status bar and a message line. Lines longer
//! than the terminal are cut off at the right edge.

use std::io::{self, Write};

use crossterm::cursor::{self, SetCursorStyle};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use crossterm::QueueableCommand;

use crate::core::editor::Editor;
use crate::core::mode::CursorShape;
use crate::core::utf8;

/// Rows below the text: status bar and message line
const CHROME_ROWS: usize = 2;

const SELECTION_BG: Color = Color::Grey;
const STATUS_BG: Color = Color::Grey;
const STATUS_FG: Color = Color::Black;

/// A run of screen text drawn in one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub selected: bool,
}

/// First buffer line to draw so the cursor sits mid-screen where possible
pub fn scroll_start(cursor_line: usize, line_count: usize, height: usize) -> usize {
    cursor_line
        .saturating_sub(height.saturating_sub(1) / 2)
        .min(line_count.saturating_sub(height))
}

/// Expand tabs, cut at `width` columns, and split `line` into selected and
/// unselected runs. `span` is the selected byte range and whether the line
/// break is selected too, as given by `Selection::span_on`.
pub fn layout_line(
    line: &str,
    span: Option<(usize, usize, bool)>,
    tab_width: usize,
    width: usize,
) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut push = |text: &str, selected: bool| match segments.last_mut() {
        Some(last) if last.selected == selected => last.text.push_str(text),
        _ => segments.push(Segment {
            text: text.to_string(),
            selected,
        }),
    };

    let mut col = 0;
    for (x, ch) in line.char_indices() {
        let w = utf8::visual_width(col, tab_width, ch);
        if col + w > width {
            return segments;
        }
        let selected = span.is_some_and(|(start, end, _)| start <= x && x < end);
        if ch == '\t' {
            push(&" ".repeat(w), selected);
        } else {
            let mut buf = [0; 4];
            push(ch.encode_utf8(&mut buf), selected);
        }
        col += w;
    }

    // A selected line break shows as one highlighted cell past the text
    if span.is_some_and(|(_, _, newline)| newline) && col < width {
        push(" ", true);
    }
    segments
}

/// Path and dirty marker on the left; any half-typed key sequence and the
/// 1-based line number on the right
pub fn status_line(editor: &Editor, width: usize) -> String {
    let mut left = editor
        .path
        .as_ref()
        .map_or_else(|| "[No Name]".to_string(), |p| p.display().to_string());
    if editor.buffer.modified {
        left.push_str(" [+]");
    }
    let line = editor.cursor().line + 1;
    let right = if editor.pending_keys.is_empty() {
        line.to_string()
    } else {
        format!("{}  {}", editor.pending_keys, line)
    };

    let used = utf8::display_width(&left, 1) + utf8::display_width(&right, 1);
    let mut status = left;
    status.push_str(&" ".repeat(width.saturating_sub(used)));
    status.push_str(&right);
    status
}

#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw a full frame for a terminal of `cols` x `rows`
    pub fn render(&mut self, out: &mut impl Write, editor: &Editor, (cols, rows): (u16, u16)) -> io::Result<()> {
        let width = cols as usize;
        let height = (rows as usize).saturating_sub(CHROME_ROWS);
        let tab_width = editor.tab_width();
        let cursor = editor.cursor();
        let top = scroll_start(cursor.line, editor.buffer.line_count(), height);

        out.queue(cursor::Hide)?;
        out.queue(terminal::Clear(ClearType::All))?;

        let bottom = (top + height).min(editor.buffer.line_count());
        for (row, idx) in (top..bottom).enumerate() {
            out.queue(cursor::MoveTo(0, row as u16))?;
            let span = editor.selection.span_on(&editor.buffer, idx);
            let segments = layout_line(editor.buffer.line(idx), span, tab_width, width);
            for segment in segments {
                if segment.selected {
                    out.queue(SetBackgroundColor(SELECTION_BG))?;
                    out.queue(Print(segment.text))?;
                    out.queue(ResetColor)?;
                } else {
                    out.queue(Print(segment.text))?;
                }
            }
        }

        if rows as usize >= CHROME_ROWS {
            let status_row = rows - CHROME_ROWS as u16;
            out.queue(cursor::MoveTo(0, status_row))?;
            out.queue(SetBackgroundColor(STATUS_BG))?;
            out.queue(SetForegroundColor(STATUS_FG))?;
            out.queue(Print(truncate(&status_line(editor, width), width)))?;
            out.queue(ResetColor)?;

            if let Some(message) = &editor.message {
                out.queue(cursor::MoveTo(0, status_row + 1))?;
                out.queue(Print(truncate(message, width)))?;
            }
        }

        let col = utf8::column_of(editor.buffer.line(cursor.line), cursor.offset, tab_width);
        let x = col.min(width.saturating_sub(1));
        let y = cursor.line - top;
        out.queue(match editor.cursor_shape() {
            CursorShape::Block => SetCursorStyle::BlinkingBlock,
            CursorShape::Underline => SetCursorStyle::BlinkingUnderScore,
        })?;
        out.queue(cursor::MoveTo(x as u16, y as u16))?;
        out.queue(cursor::Show)?;
        out.flush()
    }
}

/// Cut `text` to at most `width` columns
fn truncate(text: &str, width: usize) -> String {
    let mut col = 0;
    text.chars()
        .take_while(|&ch| {
            col += utf8::char_width(ch);
            col <= width
        })
        .collect()
}
