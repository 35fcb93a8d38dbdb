// Copyright 2026 the Flagstone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The frontier: the ordered set of trailing-edge rectangles that bounds
//! already-occupied space along the scroll axis.
//!
//! The packer only ever needs to know, for each stretch of the cross axis,
//! how far content currently reaches along the scroll axis. The frontier
//! keeps exactly that: a small list of placed rectangles, sorted ascending
//! by scroll-axis trailing edge, pruned so that entries which can no longer
//! bound a gap are removed and cross-overlapping survivors are clipped into
//! disjoint cross territory.
//!
//! Invariant maintained by [`Frontier::insert`]: after trimming, no two
//! entries overlap along the cross axis at the same scroll-axis band.

use smallvec::SmallVec;

use crate::types::{GridRect, Orientation};

/// Ordered trailing-edge rectangles, ascending by scroll-axis trailing edge.
#[derive(Clone, Debug)]
pub struct Frontier {
    orientation: Orientation,
    margin: i32,
    entries: SmallVec<[GridRect; 8]>,
}

impl Frontier {
    /// Creates an empty frontier.
    #[must_use]
    pub fn new(orientation: Orientation, margin: i32) -> Self {
        Self {
            orientation,
            margin,
            entries: SmallVec::new(),
        }
    }

    /// Current entries, ascending by scroll-axis trailing edge.
    #[must_use]
    pub fn entries(&self) -> &[GridRect] {
        &self.entries
    }

    /// Returns `true` if nothing has been placed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The greatest scroll-axis trailing edge of any entry, or zero when empty.
    #[must_use]
    pub fn max_trailing(&self) -> i32 {
        self.entries
            .last()
            .map_or(0, |e| self.orientation.main_end(*e))
    }

    /// Inserts a newly placed rectangle and restores the frontier invariant.
    ///
    /// Three steps:
    /// 1. Entries the new rectangle makes irrelevant are dropped: an entry
    ///    whose cross span is fully covered by the new rectangle, and whose
    ///    trailing edge does not reach past the new rectangle's, can never
    ///    again bound a gap.
    /// 2. The rectangle is inserted at the position that keeps entries
    ///    ordered by trailing edge. Ties go after existing entries, so the
    ///    scan order among equal trailing edges follows placement order.
    /// 3. Surviving cross-axis overlap is trimmed pairwise in cross order:
    ///    the entry ending sooner across keeps its span, and the other
    ///    entry's cross leading edge moves one margin past it. Entries are
    ///    only ever shrunk here, never deleted; a fully shadowed entry
    ///    degenerates to zero cross span but keeps bounding gaps by its
    ///    trailing edge.
    pub fn insert(&mut self, rect: GridRect) {
        let o = self.orientation;

        self.entries.retain(|e| {
            !(o.cross_start(*e) >= o.cross_start(rect)
                && o.cross_end(*e) <= o.cross_end(rect)
                && o.main_end(*e) <= o.main_end(rect))
        });

        let at = self
            .entries
            .iter()
            .position(|e| o.main_end(rect) < o.main_end(*e))
            .unwrap_or(self.entries.len());
        self.entries.insert(at, rect);

        self.trim_cross_overlap();
    }

    /// Clips adjacent-in-cross-order entries into disjoint cross spans.
    fn trim_cross_overlap(&mut self) {
        if self.entries.len() < 2 {
            return;
        }
        let o = self.orientation;

        let mut by_cross_end: SmallVec<[usize; 8]> = (0..self.entries.len()).collect();
        by_cross_end.sort_by_key(|&i| o.cross_end(self.entries[i]));

        for pair in by_cross_end.windows(2) {
            let kept = self.entries[pair[0]];
            let clipped = self.entries[pair[1]];
            if o.cross_start(clipped) < o.cross_end(kept) {
                let lead = (o.cross_end(kept) + self.margin).min(o.cross_end(clipped));
                self.entries[pair[1]] = o.with_cross_start(clipped, lead);
            }
        }
    }
}
