//! The backing item sequence.
//!
//! Labels are `i64` - think months counted from an origin. The sequence is
//! always non-empty, stays contiguous, and only ever grows by whole batches
//! at the front or the back.

use std::collections::VecDeque;

/// Ordered, contiguous, grow-only collection of item labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSequence {
    items: VecDeque<i64>,
}

impl ItemSequence {
    /// Creates a sequence of `2 * load_size + 1` labels centered on `origin`.
    ///
    /// The defaults (`origin = 0`, `load_size = 5`) yield `-5..=5`: one
    /// visible page plus a full batch of buffer on each side.
    pub fn centered(origin: i64, load_size: usize) -> Self {
        let half = load_size as i64;
        Self {
            items: (origin - half..=origin + half).collect(),
        }
    }

    /// Number of loaded items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: the sequence is constructed non-empty and never shrinks.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First (smallest) label.
    pub fn first(&self) -> i64 {
        self.items.front().copied().unwrap_or_default()
    }

    /// Last (largest) label.
    pub fn last(&self) -> i64 {
        self.items.back().copied().unwrap_or_default()
    }

    /// Label at `index`, if loaded.
    pub fn get(&self, index: usize) -> Option<i64> {
        self.items.get(index).copied()
    }

    /// Iterates the labels in order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.items.iter().copied()
    }

    /// Copies the labels into a `Vec` for hosts that want a snapshot.
    pub fn to_vec(&self) -> Vec<i64> {
        self.items.iter().copied().collect()
    }

    /// Prepends `count` labels descending from the current first.
    ///
    /// With first label `L`, pushes `L-1, L-2, …, L-count` one at a time at
    /// the front; the net effect is the block `[L-count, …, L-1]` in
    /// ascending order, keeping the sequence contiguous. Returns the exact
    /// count added so the caller can compensate the scroll offset.
    pub fn extend_front(&mut self, count: usize) -> usize {
        let first = self.first();
        for i in 1..=count as i64 {
            self.items.push_front(first - i);
        }
        count
    }

    /// Appends `count` labels ascending from the current last.
    ///
    /// Returns the exact count added. Appending never moves existing
    /// content, so no offset compensation is needed for this side.
    pub fn extend_back(&mut self, count: usize) -> usize {
        let last = self.last();
        for i in 1..=count as i64 {
            self.items.push_back(last + i);
        }
        count
    }

    /// True when every label is exactly one greater than its predecessor.
    pub fn is_contiguous(&self) -> bool {
        self.items
            .iter()
            .zip(self.items.iter().skip(1))
            .all(|(a, b)| *b == *a + 1)
    }
}
