//! Coordinate engine: byte offsets, character boundaries and visual columns.
//!
//! Tabs expand to the next multiple of the tab width; every other character
//! is as wide as `unicode-width` says (0 for combining and control characters).

use crate::core::position::Offset;

/// Get the display width of a single character (for monospace terminal display)
/// Returns 0 for control characters, 1 for ASCII, 2 for wide CJK characters, etc.
pub fn char_width(c: char) -> usize {
    unicode_width::UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Width of `ch` when it starts at visual column `col`.
pub fn visual_width(col: usize, tab_width: usize, ch: char) -> usize {
    if ch == '\t' {
        tab_width - col % tab_width
    } else {
        char_width(ch)
    }
}

/// Visual column of the character at `offset`: the summed width of
/// everything strictly before it.
pub fn column_of(line: &str, offset: Offset, tab_width: usize) -> usize {
    let end = match offset {
        Offset::BeforeLine => return 0,
        Offset::At(x) => x,
    };
    line[..end]
        .chars()
        .fold(0, |col, ch| col + visual_width(col, tab_width, ch))
}

/// Offset of the character that visually covers column `target`.
///
/// Returns the first character whose cumulative width passes `target`, the
/// last character when the line is too short, or `BeforeLine` for an empty
/// line.
pub fn offset_for_column(line: &str, target: usize, tab_width: usize) -> Offset {
    let mut col = 0;
    let mut found = Offset::BeforeLine;
    for (x, ch) in line.char_indices() {
        found = Offset::At(x);
        col += visual_width(col, tab_width, ch);
        if col > target {
            break;
        }
    }
    found
}

/// Total display width of `text`, expanding tabs.
pub fn display_width(text: &str, tab_width: usize) -> usize {
    text.chars()
        .fold(0, |col, ch| col + visual_width(col, tab_width, ch))
}

/// Byte index just past the character starting at `x`
pub fn next_char_boundary(line: &str, x: usize) -> usize {
    line[x..].chars().next().map_or(x, |ch| x + ch.len_utf8())
}

/// Byte index of the character ending at `x`
pub fn prev_char_boundary(line: &str, x: usize) -> usize {
    line[..x].chars().next_back().map_or(x, |ch| x - ch.len_utf8())
}

/// Offset of the last character, if there is one.
pub fn last_char_offset(line: &str) -> Option<usize> {
    line.char_indices().next_back().map(|(x, _)| x)
}

/// Byte index just past the character an offset sits on. `BeforeLine`
/// covers no character, so it ends at 0.
pub fn char_end(line: &str, offset: Offset) -> usize {
    match offset {
        Offset::BeforeLine => 0,
        Offset::At(x) if x >= line.len() => line.len(),
        Offset::At(x) => next_char_boundary(line, x),
    }
}
