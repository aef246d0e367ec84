//! Cursor motions
//!
//! Motions are pure: they take a position and return a new one, and never
//! touch the buffer. The caller decides whether the result replaces the
//! cursor, the anchor, or both.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::buffer::Buffer;
use crate::core::position::{Offset, Position};
use crate::core::utf8;

/// A word or punctuation run, then blanks, up to the end of the text
pub(crate) static START_OF_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([[:word:]]+|[[:punct:]]+)[[:blank:]]*$").expect("static pattern")
});

/// Blanks, then a word or punctuation run, from the start of the text
static END_OF_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[:blank:]]*([[:word:]]+|[[:punct:]]+)").expect("static pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up(usize),
    Down(usize),
    /// First non-blank character
    StartOfLine,
    /// Last character
    EndOfLine,
    StartOfWord,
    EndOfWord,
}

impl Motion {
    pub fn apply(self, buffer: &Buffer, pos: Position, tab_width: usize) -> Position {
        let line = buffer.line(pos.line);
        let to = |x: usize| Position::at_offset(buffer, pos.line, Offset::At(x), tab_width);

        match self {
            Motion::Left => match pos.offset {
                Offset::At(x) if x > 0 => to(utf8::prev_char_boundary(line, x)),
                _ => pos,
            },
            Motion::Right => {
                let Some(last) = utf8::last_char_offset(line) else {
                    return pos;
                };
                match pos.offset {
                    Offset::BeforeLine => to(0),
                    Offset::At(x) if x >= last => pos,
                    Offset::At(x) => to(utf8::next_char_boundary(line, x)),
                }
            }
            Motion::Up(n) => {
                if pos.line == 0 {
                    return pos;
                }
                Position::at_column(buffer, pos.line.saturating_sub(n), pos.col, tab_width)
            }
            Motion::Down(n) => {
                let last = buffer.last_line();
                if pos.line == last {
                    return pos;
                }
                Position::at_column(buffer, (pos.line + n).min(last), pos.col, tab_width)
            }
            Motion::StartOfLine => line
                .char_indices()
                .find(|&(_, ch)| ch != ' ' && ch != '\t')
                .map_or(pos, |(x, _)| to(x)),
            Motion::EndOfLine => utf8::last_char_offset(line).map_or(pos, to),
            Motion::StartOfWord => {
                let Offset::At(x) = pos.offset else {
                    return pos;
                };
                START_OF_WORD
                    .find(&line[..x])
                    .map_or(pos, |m| to(m.start()))
            }
            Motion::EndOfWord => {
                if line.is_empty() {
                    return pos;
                }
                let from = match pos.offset {
                    Offset::BeforeLine => 0,
                    Offset::At(x) => utf8::next_char_boundary(line, x),
                };
                END_OF_WORD
                    .find(&line[from..])
                    .map_or(pos, |m| to(utf8::prev_char_boundary(line, from + m.end())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(v: &[&str]) -> Buffer {
        Buffer::from_lines(v.iter().map(|s| s.to_string()).collect())
    }

    fn at(buffer: &Buffer, line: usize, x: usize) -> Position {
        Position::at_offset(buffer, line, Offset::At(x), 4)
    }

    fn offset_after(motion: Motion, buffer: &Buffer, pos: Position) -> Offset {
        motion.apply(buffer, pos, 4).offset
    }

    #[test]
    fn test_left_right_step_whole_characters() {
        let buf = buffer(&["a🦀b"]);
        let p = at(&buf, 0, 0);
        let p = Motion::Right.apply(&buf, p, 4);
        assert_eq!(p.offset, Offset::At(1));
        let p = Motion::Right.apply(&buf, p, 4);
        assert_eq!(p.offset, Offset::At(5));
        assert_eq!(p.col, 3);
        let p = Motion::Left.apply(&buf, p, 4);
        assert_eq!(p.offset, Offset::At(1));
    }

    #[test]
    fn test_left_right_noops_at_edges() {
        let buf = buffer(&["ab", ""]);
        assert_eq!(offset_after(Motion::Left, &buf, at(&buf, 0, 0)), Offset::At(0));
        assert_eq!(offset_after(Motion::Right, &buf, at(&buf, 0, 1)), Offset::At(1));

        let empty = Position::at_offset(&buf, 1, Offset::BeforeLine, 4);
        assert_eq!(Motion::Right.apply(&buf, empty, 4), empty);
        assert_eq!(Motion::Left.apply(&buf, empty, 4), empty);
    }

    #[test]
    fn test_vertical_preserves_column() {
        let buf = buffer(&["abcdef", "ab", "abcdef"]);
        let start = at(&buf, 0, 4);
        let down = Motion::Down(1).apply(&buf, start, 4);
        assert_eq!(down.offset, Offset::At(1));
        assert_eq!(down.col, 4);
        let down = Motion::Down(1).apply(&buf, down, 4);
        assert_eq!(down.offset, Offset::At(4));
    }

    #[test]
    fn test_vertical_clamps_and_noops() {
        let buf = buffer(&["a", "b", "c"]);
        let top = at(&buf, 0, 0);
        assert_eq!(Motion::Up(1).apply(&buf, top, 4), top);
        assert_eq!(Motion::Down(9).apply(&buf, top, 4).line, 2);

        let bottom = at(&buf, 2, 0);
        assert_eq!(Motion::Down(1).apply(&buf, bottom, 4), bottom);
        assert_eq!(Motion::Up(9).apply(&buf, bottom, 4).line, 0);
    }

    #[test]
    fn test_down_onto_empty_line_is_before_line() {
        let buf = buffer(&["abc", ""]);
        let p = Motion::Down(1).apply(&buf, at(&buf, 0, 2), 4);
        assert_eq!(p.offset, Offset::BeforeLine);
        assert_eq!(p.col, 2);
    }

    #[test]
    fn test_down_through_tab_keeps_column() {
        let buf = buffer(&["\tx", "abcdef", "ab"]);
        let p = at(&buf, 0, 1);
        assert_eq!(p.col, 4);
        let p = Motion::Down(1).apply(&buf, p, 4);
        assert_eq!(p.offset, Offset::At(4));
        let p = Motion::Down(1).apply(&buf, p, 4);
        assert_eq!(p.offset, Offset::At(1));
        let p = Motion::Up(2).apply(&buf, p, 4);
        assert_eq!(p.offset, Offset::At(1));
    }

    #[test]
    fn test_start_of_line_skips_indent() {
        let buf = buffer(&["  \tfoo", "   "]);
        assert_eq!(offset_after(Motion::StartOfLine, &buf, at(&buf, 0, 5)), Offset::At(3));
        // Entirely blank line: stays put
        assert_eq!(offset_after(Motion::StartOfLine, &buf, at(&buf, 1, 2)), Offset::At(2));
    }

    #[test]
    fn test_end_of_line() {
        let buf = buffer(&["ab漢", ""]);
        assert_eq!(offset_after(Motion::EndOfLine, &buf, at(&buf, 0, 0)), Offset::At(2));
        let empty = Position::at_offset(&buf, 1, Offset::BeforeLine, 4);
        assert_eq!(Motion::EndOfLine.apply(&buf, empty, 4), empty);
    }

    #[test]
    fn test_start_of_word() {
        let buf = buffer(&["foo bar  baz", "x.->y"]);
        // From inside "baz"
        assert_eq!(offset_after(Motion::StartOfWord, &buf, at(&buf, 0, 11)), Offset::At(9));
        // From start of "baz": back over the blanks to "bar"
        assert_eq!(offset_after(Motion::StartOfWord, &buf, at(&buf, 0, 9)), Offset::At(4));
        // Punctuation is its own run
        assert_eq!(offset_after(Motion::StartOfWord, &buf, at(&buf, 1, 4)), Offset::At(1));
        // Nothing before the cursor
        assert_eq!(offset_after(Motion::StartOfWord, &buf, at(&buf, 0, 0)), Offset::At(0));
    }

    #[test]
    fn test_end_of_word() {
        let buf = buffer(&["foo bar  baz", "x.->y"]);
        assert_eq!(offset_after(Motion::EndOfWord, &buf, at(&buf, 0, 0)), Offset::At(2));
        assert_eq!(offset_after(Motion::EndOfWord, &buf, at(&buf, 0, 2)), Offset::At(6));
        assert_eq!(offset_after(Motion::EndOfWord, &buf, at(&buf, 0, 6)), Offset::At(11));
        // Already on the last character
        assert_eq!(offset_after(Motion::EndOfWord, &buf, at(&buf, 0, 11)), Offset::At(11));
        assert_eq!(offset_after(Motion::EndOfWord, &buf, at(&buf, 1, 0)), Offset::At(3));
    }
}
