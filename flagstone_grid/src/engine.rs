// Copyright 2026 the Flagstone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout engine: owns the catalog, the visible set, the mount table,
//! and the pool, and runs the rebuild-then-window cycle.
//!
//! Everything here is synchronous, single-owner state driven by the host:
//! the host calls [`StaggeredGrid::layout`] from its measure/layout hook and
//! [`StaggeredGrid::scroll_by`] from its gesture/fling plumbing, then reads
//! [`StaggeredGrid::visible_items`] to position real views. A rebuild always
//! runs to completion before the window pass reads any rectangle.

use alloc::vec::Vec;

use bitflags::bitflags;
use hashbrown::HashMap;

use flagstone_pack::{GridRect, ItemSize, Orientation};
use flagstone_recycler::ViewPool;

use crate::adapter::GridAdapter;
use crate::catalog::{Catalog, GridItem};
use crate::scroll::ScrollState;
use crate::window::compute_window_diff;

bitflags! {
    /// Engine state bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct LayoutFlags: u8 {
        /// A layout pass is running; re-entrant requests are dropped.
        const IN_LAYOUT = 1 << 0;
        /// The host should run a layout pass when convenient.
        const LAYOUT_REQUESTED = 1 << 1;
        /// Adapter data changed since the last completed pass.
        const DATA_CHANGED = 1 << 2;
        /// Between `begin_batch` and `end_batch`; requests are swallowed.
        const BATCHING = 1 << 3;
    }
}

/// Configuration surface of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Scroll axis selection.
    pub orientation: Orientation,
    /// Spacing between items and around the content, in pixels.
    pub item_margin: i32,
    /// Preload window multiplier: how many viewport extents to materialize
    /// on either side of the scroll offset. At least one.
    pub preload_pages: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            item_margin: 10,
            preload_pages: 2,
        }
    }
}

/// Result of one scroll step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollOutcome {
    /// The delta that actually moved the content after clamping.
    pub applied: i32,
    /// The requested delta that could not be applied. Hosts feed this into
    /// their overscroll edge effect.
    pub overscroll: i32,
}

struct Mounted<V> {
    view: V,
    /// Placement in viewport coordinates (content rect minus scroll offset).
    frame: GridRect,
}

/// A staggered, gap-filling, windowed grid layout over an adapter.
///
/// The engine owns all layout state exclusively; there is no interior
/// sharing and no locking. Hosts drive it from a single thread.
pub struct StaggeredGrid<A: GridAdapter> {
    adapter: Option<A>,
    config: GridConfig,
    viewport: ItemSize,
    catalog: Catalog,
    /// Catalog indices of entries with a live view, sorted ascending.
    visible: Vec<usize>,
    mounted: HashMap<usize, Mounted<A::View>>,
    pool: ViewPool<A::View>,
    scroll: ScrollState,
    flags: LayoutFlags,
    stable_ids: bool,
}

impl<A: GridAdapter> core::fmt::Debug for StaggeredGrid<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StaggeredGrid")
            .field("config", &self.config)
            .field("viewport", &self.viewport)
            .field("entries", &self.catalog.len())
            .field("visible", &self.visible.len())
            .field("offset", &self.scroll.offset())
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

impl<A: GridAdapter> Default for StaggeredGrid<A> {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl<A: GridAdapter> StaggeredGrid<A> {
    /// Creates an engine with no adapter attached.
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        debug_assert!(
            config.preload_pages >= 1,
            "preload_pages must be at least 1; got {}",
            config.preload_pages
        );
        Self {
            adapter: None,
            config,
            viewport: ItemSize::new(0, 0),
            catalog: Catalog::new(),
            visible: Vec::new(),
            mounted: HashMap::new(),
            pool: ViewPool::new(),
            scroll: ScrollState::new(),
            flags: LayoutFlags::empty(),
            stable_ids: false,
        }
    }

    /// The attached adapter, if any.
    #[must_use]
    pub fn adapter(&self) -> Option<&A> {
        self.adapter.as_ref()
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The catalog built by the last layout pass.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current scroll offset along the main axis.
    #[must_use]
    pub const fn offset(&self) -> i32 {
        self.scroll.offset()
    }

    /// Farthest scroll-axis coordinate the content reaches.
    #[must_use]
    pub const fn content_extent(&self) -> i32 {
        self.catalog.content_extent()
    }

    /// Returns `true` when the whole content fits in the viewport.
    #[must_use]
    pub fn content_fits(&self) -> bool {
        let viewport_extent = self.config.orientation.main_extent(self.viewport);
        ScrollState::content_fits(self.catalog.content_extent(), viewport_extent)
    }

    /// Whether a layout pass has been requested since the last one ran.
    #[must_use]
    pub fn needs_layout(&self) -> bool {
        self.flags
            .intersects(LayoutFlags::LAYOUT_REQUESTED | LayoutFlags::DATA_CHANGED)
    }

    /// Attaches `adapter` (or detaches with `None`), dropping all state.
    ///
    /// The grid will show a completely different data set, so the catalog,
    /// mounted views, and the whole pool are discarded; the pool is re-keyed
    /// for the new adapter's view types plus one reserved section type when
    /// the adapter is sectioned.
    pub fn set_adapter(&mut self, adapter: Option<A>) {
        self.catalog.clear();
        self.visible.clear();
        self.mounted.clear();
        self.pool.clear();
        self.scroll.reset();

        self.adapter = adapter;
        self.stable_ids = false;
        if let Some(adapter) = &self.adapter {
            self.stable_ids = adapter.has_stable_ids();
            let section_types = usize::from(adapter.sections().is_some());
            self.pool
                .set_view_type_count(adapter.view_type_count() + section_types);
        }
        self.flags.insert(LayoutFlags::DATA_CHANGED);
        self.request_layout();
    }

    /// Tells the grid the adapter's data changed.
    ///
    /// Parked transient views are always dropped: their positions may no
    /// longer mean the same thing. Without stable ids every mounted view is
    /// recycled and the catalog is cleared too. Rectangles are recomputed in
    /// full on the next layout pass either way.
    pub fn notify_data_changed(&mut self) {
        self.pool.clear_transient();
        if !self.stable_ids {
            self.recycle_all();
            self.visible.clear();
            self.catalog.clear();
        }
        self.flags.insert(LayoutFlags::DATA_CHANGED);
        self.request_layout();
    }

    /// Sets the spacing between items, relaying out when it changed.
    pub fn set_item_margin(&mut self, margin: i32) {
        if margin != self.config.item_margin {
            self.config.item_margin = margin;
            self.relayout();
        }
    }

    /// Sets the scroll axis, relaying out when it changed.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if orientation != self.config.orientation {
            self.config.orientation = orientation;
            self.relayout();
        }
    }

    /// Sets the preload window multiplier, relaying out when it changed.
    pub fn set_preload_pages(&mut self, pages: i32) {
        debug_assert!(pages >= 1, "preload_pages must be at least 1; got {pages}");
        if pages != self.config.preload_pages {
            self.config.preload_pages = pages;
            self.relayout();
        }
    }

    /// Suppresses layout requests until [`StaggeredGrid::end_batch`].
    ///
    /// Use around bulk updates that would otherwise request a pass per step.
    pub fn begin_batch(&mut self) {
        self.flags.insert(LayoutFlags::BATCHING);
    }

    /// Ends a batch and runs one window pass over the batched state.
    pub fn end_batch(&mut self) {
        self.flags.remove(LayoutFlags::BATCHING);
        self.run_window_pass();
    }

    /// Runs a full layout pass: rebuild the catalog through the packer,
    /// then materialize the window around the (reset) scroll offset.
    ///
    /// Degenerate viewports are ignored, as are re-entrant calls while a
    /// pass is already running.
    pub fn layout(&mut self, viewport: ItemSize) {
        if self.flags.contains(LayoutFlags::IN_LAYOUT) {
            return;
        }
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }
        self.flags.insert(LayoutFlags::IN_LAYOUT);
        self.viewport = viewport;

        self.rebuild();
        self.run_window_pass();

        self.flags
            .remove(LayoutFlags::IN_LAYOUT | LayoutFlags::LAYOUT_REQUESTED | LayoutFlags::DATA_CHANGED);
    }

    /// Applies a scroll delta and refreshes the window.
    ///
    /// Positive deltas move toward the end of the content. Every step runs
    /// the same three phases in order: translate the live frames by the
    /// clamped delta, recompute the window (attaching new views), then
    /// release the views that left the viewport.
    pub fn scroll_by(&mut self, delta: i32) -> ScrollOutcome {
        let o = self.config.orientation;
        let viewport_extent = o.main_extent(self.viewport);
        let content_extent = self.catalog.content_extent();
        if ScrollState::content_fits(content_extent, viewport_extent) {
            return ScrollOutcome {
                applied: 0,
                overscroll: delta,
            };
        }

        let applied = self.scroll.apply_delta(
            delta,
            content_extent,
            viewport_extent,
            self.config.item_margin,
        );
        if applied != 0 {
            for mounted in self.mounted.values_mut() {
                mounted.frame = o.translated_main(mounted.frame, -applied);
            }
        }
        self.run_window_pass();

        ScrollOutcome {
            applied,
            overscroll: delta - applied,
        }
    }

    /// Live entries in catalog order, with their views and viewport-space
    /// frames.
    pub fn visible_items(&self) -> impl Iterator<Item = (&GridItem, &A::View, GridRect)> + '_ {
        self.visible.iter().filter_map(move |&index| {
            let mounted = self.mounted.get(&index)?;
            Some((&self.catalog.items()[index], &mounted.view, mounted.frame))
        })
    }

    /// How far the farthest live view extends past the viewport's trailing
    /// margin edge. Hosts use this to stop flings at the content end.
    #[must_use]
    pub fn overhang(&self) -> i32 {
        let o = self.config.orientation;
        let end = o.main_extent(self.viewport) - self.config.item_margin;
        let lowest = self
            .mounted
            .values()
            .map(|m| o.main_end(m.frame))
            .max()
            .unwrap_or(0);
        lowest - end
    }

    /// The topmost live entry whose frame contains the viewport-space point.
    #[must_use]
    pub fn position_at(&self, x: i32, y: i32) -> Option<GridItem> {
        self.visible.iter().rev().find_map(|&index| {
            let mounted = self.mounted.get(&index)?;
            mounted
                .frame
                .contains(x, y)
                .then(|| self.catalog.items()[index])
        })
    }

    fn request_layout(&mut self) {
        // Requests raised during a pass or a batch are dropped, not queued;
        // the running pass (or `end_batch`) already covers them.
        if !self
            .flags
            .intersects(LayoutFlags::IN_LAYOUT | LayoutFlags::BATCHING)
        {
            self.flags.insert(LayoutFlags::LAYOUT_REQUESTED);
        }
    }

    fn relayout(&mut self) {
        if self.viewport.width != 0 && self.viewport.height != 0 {
            let viewport = self.viewport;
            self.layout(viewport);
        } else {
            self.request_layout();
        }
    }

    /// Recycles every mounted view and replays the catalog through a fresh
    /// packer.
    fn rebuild(&mut self) {
        self.recycle_all();
        self.visible.clear();
        self.scroll.reset();

        let o = self.config.orientation;
        if let Some(adapter) = &self.adapter {
            let cross_limit = o.cross_extent(self.viewport);
            self.catalog
                .rebuild(adapter, o, self.config.item_margin, cross_limit);
        } else {
            self.catalog.clear();
        }
    }

    /// Returns every mounted view to the pool.
    fn recycle_all(&mut self) {
        let Some(adapter) = &self.adapter else {
            self.mounted.clear();
            return;
        };
        self.pool.record_live_count(self.mounted.len());
        for (index, mounted) in self.mounted.drain() {
            let Some(item) = self.catalog.items().get(index) else {
                continue;
            };
            let view_type = if item.is_section {
                adapter.view_type_count()
            } else {
                adapter.view_type(item.position)
            };
            let transient = adapter.has_transient_state(&mounted.view);
            self.pool
                .release(mounted.view, view_type, item.raw_position, transient);
        }
    }

    /// Diffs the window and applies it: attach, then record the live peak,
    /// then release what left the viewport.
    fn run_window_pass(&mut self) {
        let viewport_extent = self.config.orientation.main_extent(self.viewport);
        let diff = compute_window_diff(
            &self.catalog,
            &self.visible,
            self.scroll.offset(),
            viewport_extent,
            self.config.preload_pages,
        );
        if diff.is_empty() {
            return;
        }

        let mut attached: Vec<usize> = Vec::with_capacity(diff.to_attach.len());
        for &index in &diff.to_attach {
            if self.mount(index) {
                attached.push(index);
            }
        }
        self.pool.record_live_count(self.mounted.len());
        for &index in &diff.to_detach {
            self.unmount(index);
        }

        self.visible
            .retain(|i| diff.to_detach.binary_search(i).is_err());
        self.visible.extend_from_slice(&attached);
        self.visible.sort_unstable();
    }

    /// Materializes the view for one catalog entry. Returns `false` (after
    /// logging) when the adapter cannot produce it; the entry is skipped
    /// for this pass and retried on the next one.
    fn mount(&mut self, index: usize) -> bool {
        let Some(adapter) = self.adapter.as_mut() else {
            return false;
        };
        let item = self.catalog.items()[index];

        if item.is_section {
            let section_count = adapter.sections().map_or(0, |s| s.section_count());
            if item.position >= section_count {
                log::error!(
                    "section {} beyond adapter's {section_count}; skipping",
                    item.position
                );
                return false;
            }
        } else if item.position >= adapter.item_count() {
            log::error!(
                "position {} beyond adapter count {}; skipping",
                item.position,
                adapter.item_count()
            );
            return false;
        }

        let view = match self.pool.acquire_transient(item.raw_position) {
            Some(view) => Some(view),
            None => {
                let view_type = if item.is_section {
                    adapter.view_type_count()
                } else {
                    adapter.view_type(item.position)
                };
                let scrap = self.pool.acquire_for_type(view_type);
                if item.is_section {
                    adapter.create_section_view(item.position, scrap)
                } else {
                    adapter.create_view(item.position, scrap)
                }
            }
        };
        let Some(view) = view else {
            log::error!(
                "adapter returned no view for {} {}; skipping",
                if item.is_section { "section" } else { "position" },
                item.position
            );
            return false;
        };

        let frame = self
            .config
            .orientation
            .translated_main(item.rect, -self.scroll.offset());
        self.mounted.insert(index, Mounted { view, frame });
        true
    }

    /// Releases one mounted view back to the pool.
    fn unmount(&mut self, index: usize) {
        let Some(mounted) = self.mounted.remove(&index) else {
            return;
        };
        let Some(adapter) = &self.adapter else {
            return;
        };
        let Some(item) = self.catalog.items().get(index) else {
            return;
        };
        let view_type = if item.is_section {
            adapter.view_type_count()
        } else {
            adapter.view_type(item.position)
        };
        let transient = adapter.has_transient_state(&mounted.view);
        self.pool
            .release(mounted.view, view_type, item.raw_position, transient);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::cell::Cell;

    use flagstone_pack::{GridRect, ItemSize, Orientation};

    use super::{GridConfig, StaggeredGrid};
    use crate::adapter::{GridAdapter, SectionSource};

    /// A trackable stand-in for a host toolkit's view object.
    #[derive(Debug, PartialEq, Eq)]
    struct TestView {
        seq: usize,
        bound_to: usize,
        binds: usize,
    }

    struct ListAdapter {
        heights: Vec<i32>,
        created: usize,
        size_queries: Cell<usize>,
        transient_positions: Vec<usize>,
        broken_positions: Vec<usize>,
        stable_ids: bool,
    }

    impl ListAdapter {
        fn rows(count: usize) -> Self {
            Self {
                heights: (0..count).map(|_| 90).collect(),
                created: 0,
                size_queries: Cell::new(0),
                transient_positions: Vec::new(),
                broken_positions: Vec::new(),
                stable_ids: false,
            }
        }
    }

    impl GridAdapter for ListAdapter {
        type View = TestView;

        fn item_count(&self) -> usize {
            self.heights.len()
        }

        fn item_id(&self, position: usize) -> i64 {
            position as i64
        }

        fn item_size(&self, position: usize) -> ItemSize {
            self.size_queries.set(self.size_queries.get() + 1);
            ItemSize::new(100, self.heights[position])
        }

        fn has_stable_ids(&self) -> bool {
            self.stable_ids
        }

        fn has_transient_state(&self, view: &TestView) -> bool {
            self.transient_positions.contains(&view.bound_to)
        }

        fn create_view(&mut self, position: usize, scrap: Option<TestView>) -> Option<TestView> {
            if self.broken_positions.contains(&position) {
                return None;
            }
            Some(match scrap {
                Some(mut view) => {
                    view.bound_to = position;
                    view.binds += 1;
                    view
                }
                None => {
                    let seq = self.created;
                    self.created += 1;
                    TestView {
                        seq,
                        bound_to: position,
                        binds: 1,
                    }
                }
            })
        }
    }

    fn vertical_config() -> GridConfig {
        GridConfig {
            orientation: Orientation::Vertical,
            item_margin: 10,
            preload_pages: 1,
        }
    }

    /// Rows are 90 tall in a 100-wide single column: row `i` spans
    /// `y = 10 + 100 * i .. 100 * (i + 1)`.
    fn row_grid(count: usize) -> StaggeredGrid<ListAdapter> {
        let mut grid = StaggeredGrid::new(vertical_config());
        grid.set_adapter(Some(ListAdapter::rows(count)));
        grid
    }

    fn visible_raws(grid: &StaggeredGrid<ListAdapter>) -> Vec<usize> {
        grid.visible_items().map(|(item, _, _)| item.raw_position).collect()
    }

    #[test]
    fn layout_mounts_the_preload_window() {
        let mut grid = row_grid(10);
        assert!(grid.needs_layout());
        grid.layout(ItemSize::new(100, 200));
        assert!(!grid.needs_layout());

        assert_eq!(visible_raws(&grid), [1, 2]);
        let frames: Vec<GridRect> = grid.visible_items().map(|(_, _, f)| f).collect();
        assert_eq!(frames[0], GridRect::new(10, 10, 110, 100));
        assert_eq!(frames[1], GridRect::new(10, 110, 110, 200));
        assert_eq!(grid.content_extent(), 1000);
        // Lowest frame ends at 200; the viewport's margin edge sits at 190.
        assert_eq!(grid.overhang(), 10);
    }

    #[test]
    fn scrolling_attaches_detaches_and_reuses_views() {
        let mut grid = row_grid(10);
        grid.layout(ItemSize::new(100, 200));
        assert_eq!(grid.adapter().unwrap().created, 2);

        let outcome = grid.scroll_by(150);
        assert_eq!(outcome.applied, 150);
        assert_eq!(outcome.overscroll, 0);
        // Rows 2 and 3 preloaded; row 0 left the viewport and was pooled.
        assert_eq!(visible_raws(&grid), [2, 3, 4]);
        assert_eq!(grid.adapter().unwrap().created, 4);

        grid.scroll_by(200);
        assert_eq!(grid.offset(), 350);
        assert_eq!(visible_raws(&grid), [4, 5, 6]);
        // Five live peaks so far; row 4 reused row 0's pooled view, row 5
        // needed a fresh one.
        assert_eq!(grid.adapter().unwrap().created, 5);

        // Overshoot backwards: clamped at the start, shortfall reported.
        let outcome = grid.scroll_by(-400);
        assert_eq!(outcome.applied, -350);
        assert_eq!(outcome.overscroll, -50);
        assert_eq!(grid.offset(), 0);
        assert_eq!(visible_raws(&grid), [1, 2]);
        // Every reattachment came from scrap.
        assert_eq!(grid.adapter().unwrap().created, 5);
        let frames: Vec<GridRect> = grid.visible_items().map(|(_, _, f)| f).collect();
        assert_eq!(frames[0], GridRect::new(10, 10, 110, 100));
    }

    #[test]
    fn scroll_clamps_to_the_content_end() {
        let mut grid = row_grid(10);
        grid.layout(ItemSize::new(100, 200));

        // Content 1000, viewport 200, margin 10: offsets stop at 810.
        let outcome = grid.scroll_by(10_000);
        assert_eq!(outcome.applied, 810);
        assert_eq!(outcome.overscroll, 9_190);
        assert_eq!(grid.offset(), 810);
    }

    #[test]
    fn fitting_content_ignores_scrolls() {
        let mut grid = row_grid(1);
        grid.layout(ItemSize::new(100, 200));

        let outcome = grid.scroll_by(50);
        assert_eq!(outcome.applied, 0);
        assert_eq!(outcome.overscroll, 50);
        assert_eq!(grid.offset(), 0);
    }

    #[test]
    fn data_change_without_stable_ids_drops_everything() {
        let mut grid = row_grid(10);
        grid.layout(ItemSize::new(100, 200));
        assert_eq!(grid.visible_items().count(), 2);

        grid.notify_data_changed();
        assert!(grid.needs_layout());
        assert_eq!(grid.visible_items().count(), 0);
        assert!(grid.catalog().is_empty());

        // The next pass rebuilds and remounts from scrap.
        grid.layout(ItemSize::new(100, 200));
        assert_eq!(visible_raws(&grid), [1, 2]);
        assert_eq!(grid.adapter().unwrap().created, 2);
    }

    #[test]
    fn data_change_with_stable_ids_keeps_mounted_views() {
        let mut adapter = ListAdapter::rows(10);
        adapter.stable_ids = true;
        let mut grid = StaggeredGrid::new(vertical_config());
        grid.set_adapter(Some(adapter));
        grid.layout(ItemSize::new(100, 200));

        grid.notify_data_changed();
        assert!(grid.needs_layout());
        // Mounted views and the catalog survive until the next pass.
        assert_eq!(grid.visible_items().count(), 2);
        assert!(!grid.catalog().is_empty());
    }

    #[test]
    fn margin_changes_rebuild_and_same_values_do_not() {
        let mut grid = row_grid(3);
        grid.layout(ItemSize::new(100, 200));
        let queries = grid.adapter().unwrap().size_queries.get();
        assert_eq!(queries, 3);

        // Unchanged margin: no rebuild.
        grid.set_item_margin(10);
        assert_eq!(grid.adapter().unwrap().size_queries.get(), queries);

        grid.set_item_margin(20);
        assert_eq!(grid.adapter().unwrap().size_queries.get(), queries + 3);
        let (_, _, frame) = grid.visible_items().next().unwrap();
        assert_eq!(frame.y0, 20);
    }

    #[test]
    fn a_broken_item_is_skipped_not_fatal() {
        let mut adapter = ListAdapter::rows(10);
        adapter.broken_positions.push(1);
        let mut grid = StaggeredGrid::new(vertical_config());
        grid.set_adapter(Some(adapter));
        grid.layout(ItemSize::new(100, 200));

        // Row 1 could not be materialized; its neighbors still were.
        assert_eq!(visible_raws(&grid), [1]);
        assert_eq!(grid.visible_items().count(), 1);
    }

    #[test]
    fn transient_views_reattach_to_the_same_item() {
        let mut adapter = ListAdapter::rows(10);
        adapter.transient_positions.push(0);
        let mut grid = StaggeredGrid::new(vertical_config());
        grid.set_adapter(Some(adapter));
        grid.layout(ItemSize::new(100, 200));

        // Push row 0 (and row 1) out of the viewport, then come back.
        grid.scroll_by(250);
        assert_eq!(visible_raws(&grid), [3, 4, 5]);
        grid.scroll_by(-250);

        let views: Vec<(usize, usize, usize)> = grid
            .visible_items()
            .map(|(item, view, _)| (item.raw_position, view.seq, view.binds))
            .collect();
        // Row 0 took the very view it released out of the transient table,
        // with no rebind; row 1 was rebound through the scrap pool.
        assert_eq!(views[0], (1, 0, 1));
        assert_eq!(views[1].0, 2);
        assert_eq!(views[1].2, 2);
    }

    struct SectionedAdapter {
        per_section: Vec<usize>,
        created: usize,
    }

    impl SectionSource for SectionedAdapter {
        fn section_count(&self) -> usize {
            self.per_section.len()
        }

        fn item_count_in(&self, section: usize) -> usize {
            self.per_section[section]
        }

        fn section_id(&self, section: usize) -> i64 {
            1000 + section as i64
        }

        fn section_size(&self, _section: usize) -> ItemSize {
            ItemSize::new(200, 24)
        }
    }

    impl GridAdapter for SectionedAdapter {
        type View = TestView;

        fn item_count(&self) -> usize {
            self.per_section.iter().sum()
        }

        fn item_id(&self, position: usize) -> i64 {
            position as i64
        }

        fn item_size(&self, _position: usize) -> ItemSize {
            ItemSize::new(100, 50)
        }

        fn create_view(&mut self, position: usize, _scrap: Option<TestView>) -> Option<TestView> {
            let seq = self.created;
            self.created += 1;
            Some(TestView {
                seq,
                bound_to: position,
                binds: 1,
            })
        }

        fn sections(&self) -> Option<&dyn SectionSource> {
            Some(self)
        }

        fn create_section_view(
            &mut self,
            section: usize,
            _scrap: Option<TestView>,
        ) -> Option<TestView> {
            let seq = self.created;
            self.created += 1;
            Some(TestView {
                seq,
                bound_to: 1000 + section,
                binds: 1,
            })
        }
    }

    #[test]
    fn sectioned_grids_mount_headers_and_items() {
        let adapter = SectionedAdapter {
            per_section: [2, 2].into(),
            created: 0,
        };
        let mut grid = StaggeredGrid::new(vertical_config());
        grid.set_adapter(Some(adapter));
        grid.layout(ItemSize::new(220, 300));

        // Everything fits: two headers and four items are live.
        assert_eq!(grid.visible_items().count(), 6);
        let headers: Vec<(usize, GridRect)> = grid
            .visible_items()
            .filter(|(item, _, _)| item.is_section)
            .map(|(item, view, frame)| {
                assert_eq!(view.bound_to, 1000 + item.section);
                (item.raw_position, frame)
            })
            .collect();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].0, 0);
        assert_eq!(headers[0].1, GridRect::new(10, 10, 210, 34));

        // Section items share a band below their header.
        let item_frames: Vec<GridRect> = grid
            .visible_items()
            .filter(|(item, _, _)| !item.is_section && item.section == 0)
            .map(|(_, _, f)| f)
            .collect();
        assert_eq!(item_frames[0].y0, item_frames[1].y0);

        // Hit testing maps viewport points back to entries.
        let hit = grid.position_at(50, 50).unwrap();
        assert!(!hit.is_section);
        assert_eq!(hit.raw_position, 1);
        let hit = grid.position_at(50, 20).unwrap();
        assert!(hit.is_section);
    }

    #[test]
    fn detaching_the_adapter_clears_the_grid() {
        let mut grid = row_grid(10);
        grid.layout(ItemSize::new(100, 200));
        assert_eq!(grid.visible_items().count(), 2);

        grid.set_adapter(None);
        assert_eq!(grid.visible_items().count(), 0);
        assert_eq!(grid.content_extent(), 0);
        grid.layout(ItemSize::new(100, 200));
        assert_eq!(grid.visible_items().count(), 0);
    }
}
