// Copyright 2026 the Flagstone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid item catalog: the ordered logical model of every item and
//! section header, with each entry's final placement rectangle.

use alloc::vec::Vec;

use flagstone_pack::{GapPacker, GridRect, Orientation};

use crate::adapter::GridAdapter;

/// One catalog entry: an item or a section header, with its placement.
///
/// Equality covers all six fields, so two entries from different rebuilds
/// only compare equal when identity, numbering, and geometry all agree.
/// Rectangles are assigned during a rebuild and never mutated afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridItem {
    /// Adapter-reported identity (item id, or section id for headers).
    pub id: i64,
    /// Adapter position: within-section for items of a sectioned adapter,
    /// the section index for headers, the flat index otherwise.
    pub position: usize,
    /// Index of the section this entry belongs to (zero when unsectioned).
    pub section: usize,
    /// Whether this entry is a section header.
    pub is_section: bool,
    /// Position in the single traversal counter shared by sections and
    /// items. Headers take the counter as-is; the counter advances once
    /// before every item and once more at each section boundary.
    pub raw_position: usize,
    /// Placement rectangle in content coordinates.
    pub rect: GridRect,
}

/// Ordered sequence of [`GridItem`]s plus the content geometry they span.
///
/// The catalog is cleared and fully rebuilt whenever the adapter is
/// (re)attached, the margin or orientation changes, or the adapter reports
/// its data changed: every item is replayed through a fresh packer. There is
/// no incremental re-pack on data change.
#[derive(Clone, Debug)]
pub struct Catalog {
    items: Vec<GridItem>,
    section_counts: Vec<usize>,
    content_extent: i32,
    orientation: Orientation,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            section_counts: Vec::new(),
            content_extent: 0,
            orientation: Orientation::Vertical,
        }
    }

    /// All entries, in traversal order.
    #[must_use]
    pub fn items(&self) -> &[GridItem] {
        &self.items
    }

    /// Number of entries (items plus section headers).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when no entries have been built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item count per section, or a single `[item_count]` entry when the
    /// adapter has no sections.
    #[must_use]
    pub fn section_counts(&self) -> &[usize] {
        &self.section_counts
    }

    /// Farthest scroll-axis coordinate any placement reached.
    #[must_use]
    pub const fn content_extent(&self) -> i32 {
        self.content_extent
    }

    /// Orientation the current entries were packed for.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Drops all entries and geometry.
    pub fn clear(&mut self) {
        self.items.clear();
        self.section_counts.clear();
        self.content_extent = 0;
    }

    /// Clears and rebuilds the catalog from the adapter's current data.
    ///
    /// Sections are traversed in order; a sectioned adapter gets one header
    /// entry placed (as a forced full-band placement) before each section's
    /// items. Rebuilding twice from an unchanged adapter yields identical
    /// entries and rectangles.
    pub fn rebuild<A: GridAdapter>(
        &mut self,
        adapter: &A,
        orientation: Orientation,
        margin: i32,
        cross_limit: i32,
    ) {
        self.clear();
        self.orientation = orientation;

        match adapter.sections() {
            Some(sections) => {
                for section in 0..sections.section_count() {
                    self.section_counts.push(sections.item_count_in(section));
                }
            }
            None => self.section_counts.push(adapter.item_count()),
        }

        let mut packer = GapPacker::new(orientation, margin, cross_limit);
        let mut raw_position = 0;

        for section in 0..self.section_counts.len() {
            if let Some(sections) = adapter.sections() {
                let rect = packer.place(sections.section_size(section), true);
                self.items.push(GridItem {
                    id: sections.section_id(section),
                    position: section,
                    section,
                    is_section: true,
                    raw_position,
                    rect,
                });
            }
            for position in 0..self.section_counts[section] {
                raw_position += 1;
                let rect = packer.place(adapter.item_size(position), false);
                self.items.push(GridItem {
                    id: adapter.item_id(position),
                    position,
                    section,
                    is_section: false,
                    raw_position,
                    rect,
                });
            }
            raw_position += 1;
        }

        self.content_extent = packer.content_extent();
        log::debug!(
            "catalog rebuilt: {} entries over {} sections, extent {}",
            self.items.len(),
            self.section_counts.len(),
            self.content_extent,
        );
    }

    /// Indices of entries whose rectangle intersects the scroll-axis band
    /// `[range_start, range_end)` across the full cross axis, in catalog
    /// order.
    pub fn indices_intersecting(
        &self,
        range_start: i32,
        range_end: i32,
    ) -> impl Iterator<Item = usize> + '_ {
        let o = self.orientation;
        self.items.iter().enumerate().filter_map(move |(i, item)| {
            let intersects =
                o.main_start(item.rect) < range_end && range_start < o.main_end(item.rect);
            intersects.then_some(i)
        })
    }

    /// Entries whose rectangle intersects the scroll-axis band
    /// `[range_start, range_end)`, in catalog order.
    pub fn items_intersecting(
        &self,
        range_start: i32,
        range_end: i32,
    ) -> impl Iterator<Item = &GridItem> + '_ {
        self.indices_intersecting(range_start, range_end)
            .map(|i| &self.items[i])
    }
}
