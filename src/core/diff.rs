//! Line-range diffs
//!
//! A [`Diff`] replaces lines `start..start + before.len()` with `after`. It
//! carries both sides, so it can be applied and reverted without keeping a
//! snapshot of the whole document, and two consecutive diffs can be folded
//! into one with [`Diff::compose`].

use crate::core::buffer::Buffer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    pub start: usize,
    pub before: Vec<String>,
    pub after: Vec<String>,
}

impl Diff {
    pub fn new(start: usize, before: Vec<String>, after: Vec<String>) -> Self {
        Self {
            start,
            before,
            after,
        }
    }

    /// True when the diff neither removes nor adds lines
    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.after.is_empty()
    }

    /// Replace `before` with `after` in the buffer.
    pub fn apply(&self, buffer: &mut Buffer) {
        if self.is_empty() {
            return;
        }
        let range = self.start..self.start + self.before.len();
        debug_assert_eq!(
            buffer.lines().get(range.clone()),
            Some(self.before.as_slice()),
            "diff applied to text it was not captured against"
        );
        buffer.splice(range, &self.after);
    }

    /// Replace `after` with `before` in the buffer.
    pub fn revert(&self, buffer: &mut Buffer) {
        if self.is_empty() {
            return;
        }
        let range = self.start..self.start + self.after.len();
        debug_assert_eq!(
            buffer.lines().get(range.clone()),
            Some(self.after.as_slice()),
            "diff reverted on text it did not produce"
        );
        buffer.splice(range, &self.before);
    }

    /// Fold `inner` (already applied) and `outer` (about to be applied) into
    /// one diff against the text `inner` was captured on.
    ///
    /// `intermediate` is the text after `inner` and before `outer`. It is only
    /// read for lines between the two windows when they do not touch.
    pub fn compose(outer: &Diff, inner: &Diff, intermediate: &[String]) -> Diff {
        if inner.is_empty() {
            return outer.clone();
        }

        let inner_end = inner.start + inner.after.len();
        let outer_end = outer.start + outer.before.len();
        let start = inner.start.min(outer.start);
        let end = inner_end.max(outer_end);

        let slice: Vec<String> = (start..end)
            .map(|i| {
                if (outer.start..outer_end).contains(&i) {
                    outer.before[i - outer.start].clone()
                } else if (inner.start..inner_end).contains(&i) {
                    inner.after[i - inner.start].clone()
                } else {
                    intermediate[i].clone()
                }
            })
            .collect();

        let mut before = slice.clone();
        let at = inner.start - start;
        before.splice(at..at + inner.after.len(), inner.before.iter().cloned());

        let mut after = slice;
        let at = outer.start - start;
        after.splice(at..at + outer.before.len(), outer.after.iter().cloned());

        Diff::new(start, before, after)
    }
}
