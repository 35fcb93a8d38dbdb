// Copyright 2026 the Flagstone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gap-filling packer: streams item sizes into placement rectangles.
//!
//! Items arrive one at a time, in adapter order, and each placement is
//! final; there is no removal or undo. The packer prefers filling the first
//! sufficiently large gap behind the frontier over growing the content, so
//! a short item after a tall one slots in next to the tall one instead of
//! starting a new band.
//!
//! The gap search is deliberately first-fit with a contiguity reset, not a
//! true largest-gap search: while scanning the frontier, cleared space only
//! accumulates across *consecutive* cleared entries and resets to zero when
//! an uncleared entry interrupts the run. Downstream placement order depends
//! on this exact behavior.

use crate::frontier::Frontier;
use crate::types::{GridRect, ItemSize, Orientation};

/// Incremental gap-filling packer over a fixed cross-axis extent.
///
/// All coordinates are content coordinates; the configured margin is applied
/// on every side of every placement, including before the first item.
#[derive(Clone, Debug)]
pub struct GapPacker {
    orientation: Orientation,
    margin: i32,
    cross_limit: i32,
    frontier: Frontier,
    /// Greatest cross-axis trailing edge ever placed. Monotone, so the
    /// cross space past it is guaranteed untouched by every earlier item.
    max_cross_end: i32,
    content_extent: i32,
}

impl GapPacker {
    /// Creates a packer.
    ///
    /// - `cross_limit` is the total cross-axis extent available (the widget
    ///   box's width in a vertical grid, its height in a horizontal one).
    /// - `margin` is the spacing kept between items and around the content
    ///   edges; callers pass a non-negative value.
    #[must_use]
    pub fn new(orientation: Orientation, margin: i32, cross_limit: i32) -> Self {
        debug_assert!(margin >= 0, "item margin must be non-negative; got {margin}");
        Self {
            orientation,
            margin,
            cross_limit,
            frontier: Frontier::new(orientation, margin),
            max_cross_end: 0,
            content_extent: 0,
        }
    }

    /// The orientation this packer lays out along.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Farthest scroll-axis coordinate any placement has reached.
    ///
    /// Non-decreasing across [`GapPacker::place`] calls.
    #[must_use]
    pub const fn content_extent(&self) -> i32 {
        self.content_extent
    }

    /// The current frontier, mostly useful for diagnostics and tests.
    #[must_use]
    pub const fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Places the next item and returns its rectangle.
    ///
    /// Sections are forced to start a new full-cross band just past the
    /// current maximum trailing edge; they never fill gaps. Ordinary items
    /// try, in order: appending across the current band, filling the first
    /// gap with enough cleared space, and finally appending past the global
    /// maximum.
    ///
    /// Total over valid (non-negative) sizes; zero-size items degenerate but
    /// place fine.
    pub fn place(&mut self, size: ItemSize, is_section: bool) -> GridRect {
        let o = self.orientation;
        let begin = self.margin;
        let main_extent = o.main_extent(size);

        let rect = if self.frontier.is_empty() {
            o.rect_at(begin, begin, size)
        } else if is_section {
            o.rect_at(self.frontier.max_trailing() + self.margin, begin, size)
        } else if self.cross_end_limit() - self.max_cross_end >= main_extent {
            // Untouched cross space remains past everything placed so far:
            // extend the current band instead of scanning for gaps.
            o.rect_at(begin, self.max_cross_end + self.margin, size)
        } else if let Some((main, cross)) = self.find_gap(main_extent) {
            o.rect_at(main, cross, size)
        } else {
            o.rect_at(self.frontier.max_trailing() + self.margin, begin, size)
        };

        self.frontier.insert(rect);
        self.max_cross_end = self.max_cross_end.max(o.cross_end(rect));
        self.content_extent = self.content_extent.max(o.main_end(rect));
        rect
    }

    const fn cross_end_limit(&self) -> i32 {
        self.cross_limit - self.margin
    }

    /// First frontier entry (ascending trailing edge) whose gap has enough
    /// cleared space for `needed`, as a `(main, cross)` placement point.
    fn find_gap(&self, needed: i32) -> Option<(i32, i32)> {
        let o = self.orientation;
        for entry in self.frontier.entries() {
            let gap_main = o.main_end(*entry) + self.margin;
            let gap_cross = o.cross_start(*entry);
            if self.has_cleared_space(gap_cross, gap_main, needed) {
                return Some((gap_main, gap_cross));
            }
        }
        None
    }

    /// Whether the frontier has accumulated `needed` units of cleared space
    /// for a gap starting at `(gap_main, gap_cross)`.
    ///
    /// Entries at or past the candidate's cross position contribute their
    /// cross span plus margin once their trailing edge precedes the gap; an
    /// entry that has not cleared resets the run. The scan stops as soon as
    /// enough space is found.
    fn has_cleared_space(&self, gap_cross: i32, gap_main: i32, needed: i32) -> bool {
        let o = self.orientation;
        let mut cleared = 0;
        let mut had_cleared = false;
        for entry in self.frontier.entries() {
            if cleared >= needed {
                break;
            }
            if o.cross_start(*entry) < gap_cross {
                continue;
            }
            if o.main_end(*entry) < gap_main {
                cleared += o.cross_span(*entry) + self.margin;
                had_cleared = true;
            } else if had_cleared {
                cleared = 0;
            }
        }
        cleared >= needed
    }
}
