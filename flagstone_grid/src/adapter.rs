// Copyright 2026 the Flagstone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The adapter contract: how hosts describe their items to the grid.
//!
//! An adapter answers three kinds of questions: how many items there are and
//! how big each wants to be, how items map onto reusable view types, and how
//! to build (or rebuild, from a scrap) the actual view for an item. The grid
//! core never inspects views; it only moves the adapter's opaque handles
//! between the mount table and the pool.
//!
//! Sectioning is a capability, not a subtype: adapters that group items into
//! header-separated sections expose a [`SectionSource`] through
//! [`GridAdapter::sections`], and the grid checks for it instead of
//! downcasting. One extra view type is reserved for section headers on top
//! of [`GridAdapter::view_type_count`].

use crate::ItemSize;

/// Optional sectioning extension, discovered via [`GridAdapter::sections`].
///
/// Section indices run `0..section_count()`; item positions handed to the
/// [`GridAdapter`] item methods are *within-section* positions.
pub trait SectionSource {
    /// Number of sections.
    fn section_count(&self) -> usize;

    /// Number of items in `section`.
    fn item_count_in(&self, section: usize) -> usize;

    /// Stable identity of `section`'s header.
    fn section_id(&self, section: usize) -> i64;

    /// Requested size of `section`'s header. Headers normally span the full
    /// cross axis; the grid places whatever size is reported here.
    fn section_size(&self, section: usize) -> ItemSize;
}

/// Supplies item counts, sizes, identities, view types, and view factories.
///
/// Item `position` arguments are adapter positions: plain adapters number
/// items `0..item_count()`, sectioned adapters are queried with the position
/// inside the item's section.
pub trait GridAdapter {
    /// Opaque handle for one materialized view. The grid stores and returns
    /// these; it never looks inside.
    type View;

    /// Total number of items.
    fn item_count(&self) -> usize;

    /// Stable or positional identity of the item at `position`.
    fn item_id(&self, position: usize) -> i64;

    /// Requested size of the item at `position`.
    fn item_size(&self, position: usize) -> ItemSize;

    /// View type of the item at `position`, in `0..view_type_count()`.
    fn view_type(&self, position: usize) -> usize {
        let _ = position;
        0
    }

    /// Number of distinct item view types. Must be at least one.
    ///
    /// Sectioned adapters get one additional reserved type for headers; it
    /// is managed by the grid and never reported here.
    fn view_type_count(&self) -> usize {
        1
    }

    /// Whether [`GridAdapter::item_id`] values survive data changes.
    ///
    /// With stable ids a data change keeps mounted views and pooled scrap;
    /// without, everything is recycled and rebuilt.
    fn has_stable_ids(&self) -> bool {
        false
    }

    /// Whether `view` still carries live transient visual state (for
    /// example an in-flight animation) and must be reattached to the same
    /// logical position rather than recycled.
    fn has_transient_state(&self, view: &Self::View) -> bool {
        let _ = view;
        false
    }

    /// Builds or rebinds the view for the item at `position`.
    ///
    /// `scrap` is a previously released view of the same view type, if the
    /// pool had one; adapters that decline it simply drop it. Returning
    /// `None` reports an internal inconsistency; the grid logs it and skips
    /// the item for this pass instead of failing the whole layout.
    fn create_view(&mut self, position: usize, scrap: Option<Self::View>) -> Option<Self::View>;

    /// The sectioning extension, when this adapter groups items into
    /// sections.
    fn sections(&self) -> Option<&dyn SectionSource> {
        None
    }

    /// Builds or rebinds the header view for `section`.
    ///
    /// Only called for adapters whose [`GridAdapter::sections`] returns
    /// `Some`. The default reports an inconsistency (`None`), which the
    /// grid logs and skips.
    fn create_section_view(
        &mut self,
        section: usize,
        scrap: Option<Self::View>,
    ) -> Option<Self::View> {
        let _ = (section, scrap);
        None
    }
}
