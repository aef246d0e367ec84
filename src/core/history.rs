//! Linear undo history of composed diffs
//!
//! Every primitive edit made between [`History::start_change`] and
//! [`History::end_change`] is folded into one pending [`Diff`], so an entire
//! Insert-mode session, or a delete followed by an insert, undoes in a
//! single step.

use tracing::debug;

use crate::core::buffer::Buffer;
use crate::core::diff::Diff;
use crate::core::position::Position;

/// Maximum undo stack depth to prevent OOM from unbounded undo history
#[cfg(not(test))]
const MAX_HISTORY_DEPTH: usize = 10_000;
#[cfg(test)]
const MAX_HISTORY_DEPTH: usize = 8;

/// One undo unit and the selection on either side of it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Change {
    pub diff: Diff,
    pub anchor_before: Position,
    pub cursor_before: Position,
    pub anchor_after: Position,
    pub cursor_after: Position,
}

#[derive(Debug)]
pub struct History {
    changes: Vec<Change>,
    /// Changes at `head..` have been undone and can be redone
    head: usize,
    pending: Change,
    /// `head` when the buffer last matched the file; `None` once that
    /// state can no longer be reached
    saved: Option<usize>,
}

impl Default for History {
    fn default() -> Self {
        Self {
            changes: Vec::new(),
            head: 0,
            pending: Change::default(),
            saved: Some(0),
        }
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a change, remembering the selection it starts from.
    pub fn start_change(&mut self, anchor: Position, cursor: Position) {
        self.pending = Change {
            anchor_before: anchor,
            cursor_before: cursor,
            ..Change::default()
        };
    }

    /// Apply `diff` to the buffer and fold it into the open change.
    pub fn apply_diff(&mut self, buffer: &mut Buffer, diff: Diff) {
        if diff.is_empty() {
            return;
        }
        self.pending.diff = Diff::compose(&diff, &self.pending.diff, buffer.lines());
        diff.apply(buffer);
    }

    /// Close the open change. Returns false when nothing was edited, in
    /// which case nothing is recorded.
    pub fn end_change(&mut self, anchor: Position, cursor: Position) -> bool {
        if self.pending.diff.is_empty() {
            return false;
        }
        let mut change = std::mem::take(&mut self.pending);
        change.anchor_after = anchor;
        change.cursor_after = cursor;

        self.changes.truncate(self.head);
        if self.saved.is_some_and(|saved| saved > self.head) {
            self.saved = None;
        }
        self.changes.push(change);
        if self.changes.len() > MAX_HISTORY_DEPTH {
            self.changes.remove(0);
            self.saved = self.saved.and_then(|saved| saved.checked_sub(1));
        }
        self.head = self.changes.len();
        debug!(head = self.head, "change recorded");
        true
    }

    /// Revert the change before `head`; returns the selection to restore.
    pub fn undo(&mut self, buffer: &mut Buffer) -> Option<(Position, Position)> {
        if self.head == 0 {
            return None;
        }
        self.head -= 1;
        let change = &self.changes[self.head];
        change.diff.revert(buffer);
        debug!(head = self.head, "undo");
        Some((change.anchor_before, change.cursor_before))
    }

    /// Re-apply the change at `head`; returns the selection to restore.
    pub fn redo(&mut self, buffer: &mut Buffer) -> Option<(Position, Position)> {
        let change = self.changes.get(self.head)?;
        change.diff.apply(buffer);
        self.head += 1;
        debug!(head = self.head, "redo");
        Some((change.anchor_after, change.cursor_after))
    }

    pub fn can_undo(&self) -> bool {
        self.head > 0
    }

    pub fn can_redo(&self) -> bool {
        self.head < self.changes.len()
    }

    /// Number of recorded changes, including undone ones
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn head(&self) -> usize {
        self.head
    }

    /// Remember the current state as the one on disk
    pub fn mark_saved(&mut self) {
        self.saved = Some(self.head);
    }

    /// True when undo/redo has brought the text back to the saved state
    pub fn at_saved(&self) -> bool {
        self.saved == Some(self.head) && !self.has_pending_edits()
    }

    /// True while an open change holds edits that have not been recorded
    pub fn has_pending_edits(&self) -> bool {
        !self.pending.diff.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::position::Offset;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn pos(line: usize, x: usize) -> Position {
        Position {
            line,
            offset: Offset::At(x),
            col: x,
        }
    }

    fn edit(history: &mut History, buffer: &mut Buffer, diffs: Vec<Diff>, after: Position) {
        history.start_change(pos(0, 0), pos(0, 0));
        for d in diffs {
            history.apply_diff(buffer, d);
        }
        history.end_change(after, after);
    }

    #[test]
    fn test_grouped_edits_undo_in_one_step() {
        let mut buffer = Buffer::from_lines(lines(&["ab"]));
        let mut history = History::new();

        edit(
            &mut history,
            &mut buffer,
            vec![
                Diff::new(0, lines(&["ab"]), lines(&["xab"])),
                Diff::new(0, lines(&["xab"]), lines(&["x", "ab"])),
                Diff::new(1, lines(&["ab"]), lines(&["yab"])),
            ],
            pos(1, 1),
        );
        assert_eq!(buffer.lines(), lines(&["x", "yab"]));
        assert_eq!(history.len(), 1);

        assert_eq!(history.undo(&mut buffer), Some((pos(0, 0), pos(0, 0))));
        assert_eq!(buffer.lines(), lines(&["ab"]));

        assert_eq!(history.redo(&mut buffer), Some((pos(1, 1), pos(1, 1))));
        assert_eq!(buffer.lines(), lines(&["x", "yab"]));
    }

    #[test]
    fn test_empty_change_not_recorded() {
        let mut history = History::new();
        history.start_change(pos(0, 0), pos(0, 0));
        assert!(!history.end_change(pos(0, 0), pos(0, 0)));
        assert!(history.is_empty());
    }

    #[test]
    fn test_undo_redo_at_bounds_are_noops() {
        let mut buffer = Buffer::from_lines(lines(&["a"]));
        let mut history = History::new();
        assert_eq!(history.undo(&mut buffer), None);
        assert_eq!(history.redo(&mut buffer), None);

        edit(
            &mut history,
            &mut buffer,
            vec![Diff::new(0, lines(&["a"]), lines(&["b"]))],
            pos(0, 0),
        );
        assert_eq!(history.redo(&mut buffer), None);
        assert!(history.undo(&mut buffer).is_some());
        assert_eq!(history.undo(&mut buffer), None);
        assert_eq!(buffer.lines(), lines(&["a"]));
    }

    #[test]
    fn test_new_change_truncates_redo() {
        let mut buffer = Buffer::from_lines(lines(&["a"]));
        let mut history = History::new();

        edit(&mut history, &mut buffer, vec![Diff::new(0, lines(&["a"]), lines(&["b"]))], pos(0, 0));
        edit(&mut history, &mut buffer, vec![Diff::new(0, lines(&["b"]), lines(&["c"]))], pos(0, 0));
        history.undo(&mut buffer);
        assert!(history.can_redo());

        edit(&mut history, &mut buffer, vec![Diff::new(0, lines(&["b"]), lines(&["d"]))], pos(0, 0));
        assert!(!history.can_redo());
        assert_eq!(history.redo(&mut buffer), None);
        assert_eq!(buffer.lines(), lines(&["d"]));
        assert_eq!(history.len(), 2);

        history.undo(&mut buffer);
        history.undo(&mut buffer);
        assert_eq!(buffer.lines(), lines(&["a"]));
    }

    #[test]
    fn test_depth_cap_drops_oldest() {
        let mut buffer = Buffer::from_lines(lines(&["0"]));
        let mut history = History::new();
        for i in 0..MAX_HISTORY_DEPTH + 2 {
            let diff = Diff::new(0, vec![i.to_string()], vec![(i + 1).to_string()]);
            edit(&mut history, &mut buffer, vec![diff], pos(0, 0));
        }
        assert_eq!(history.len(), MAX_HISTORY_DEPTH);
        assert_eq!(history.head(), MAX_HISTORY_DEPTH);

        while history.undo(&mut buffer).is_some() {}
        // The two oldest changes are gone, so undo stops at "2"
        assert_eq!(buffer.lines(), lines(&["2"]));
        assert_eq!(history.head(), 0);

        while history.redo(&mut buffer).is_some() {}
        assert_eq!(buffer.lines(), vec![(MAX_HISTORY_DEPTH + 2).to_string()]);
    }

    #[test]
    fn test_saved_state_tracking() {
        let mut buffer = Buffer::from_lines(lines(&["a"]));
        let mut history = History::new();
        assert!(history.at_saved());

        edit(&mut history, &mut buffer, vec![Diff::new(0, lines(&["a"]), lines(&["b"]))], pos(0, 0));
        assert!(!history.at_saved());
        history.mark_saved();
        assert!(history.at_saved());

        history.undo(&mut buffer);
        assert!(!history.at_saved());
        history.redo(&mut buffer);
        assert!(history.at_saved());

        // Replacing the saved future makes the saved state unreachable
        history.undo(&mut buffer);
        edit(&mut history, &mut buffer, vec![Diff::new(0, lines(&["a"]), lines(&["c"]))], pos(0, 0));
        history.undo(&mut buffer);
        assert!(!history.at_saved());
        history.redo(&mut buffer);
        assert!(!history.at_saved());
    }

    #[test]
    fn test_recorded_diff_does_not_alias_buffer() {
        let mut buffer = Buffer::from_lines(lines(&["a"]));
        let mut history = History::new();
        edit(&mut history, &mut buffer, vec![Diff::new(0, lines(&["a"]), lines(&["b"]))], pos(0, 0));

        // Mutate the buffer behind history's back, then restore via a diff
        Diff::new(0, lines(&["b"]), lines(&["z"])).apply(&mut buffer);
        Diff::new(0, lines(&["z"]), lines(&["b"])).apply(&mut buffer);

        history.undo(&mut buffer);
        assert_eq!(buffer.lines(), lines(&["a"]));
    }
}
