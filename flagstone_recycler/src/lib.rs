// Copyright 2026 the Flagstone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flagstone Recycler: a pool for released grid views.
//!
//! When an item scrolls out of the window its view is released here rather
//! than dropped, and the next item of the same view type reuses it instead
//! of asking the adapter to build a fresh one. The pool is two distinct
//! stores with different eviction policies, and they stay distinct:
//!
//! - **Scrap pools**: one LIFO stack per view type, capacity-bounded by the
//!   highest number of simultaneously live views seen so far. Releases past
//!   capacity are simply dropped.
//! - **Transient side table**: views whose content still carries live
//!   transient visual state (an in-flight animation, a pressed highlight)
//!   must come back to the *same* logical position instead of being handed
//!   to an arbitrary item. They are keyed by raw position, overwrite on
//!   release, and stay until claimed or cleared.
//!
//! The pool is oblivious to what a view is; hosts parameterize it with
//! whatever handle their toolkit uses.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;

/// Type-keyed pool of released views plus the transient-state side table.
pub struct ViewPool<V> {
    scrap: Vec<Vec<V>>,
    transient: HashMap<usize, V>,
    /// High-water mark of simultaneously live views; bounds each scrap pool.
    max_scrap: usize,
}

impl<V> core::fmt::Debug for ViewPool<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let pooled: usize = self.scrap.iter().map(Vec::len).sum();
        f.debug_struct("ViewPool")
            .field("view_types", &self.scrap.len())
            .field("pooled", &pooled)
            .field("transient", &self.transient.len())
            .field("max_scrap", &self.max_scrap)
            .finish_non_exhaustive()
    }
}

impl<V> Default for ViewPool<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ViewPool<V> {
    /// Creates a pool with no registered view types.
    ///
    /// [`ViewPool::set_view_type_count`] must be called before views are
    /// released into the pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scrap: Vec::new(),
            transient: HashMap::new(),
            max_scrap: 0,
        }
    }

    /// Registers the number of view types and resets the scrap pools.
    ///
    /// A call with the already-registered count is a no-op and keeps the
    /// pooled views. Panics when `count` is zero: an adapter that reports no
    /// view types is misconfigured, and there is nothing sensible to recover
    /// to.
    pub fn set_view_type_count(&mut self, count: usize) {
        assert!(count >= 1, "need at least one view type ({count} reported)");
        if count == self.scrap.len() {
            return;
        }
        self.scrap = (0..count).map(|_| Vec::new()).collect();
    }

    /// Number of registered view types.
    #[must_use]
    pub fn view_type_count(&self) -> usize {
        self.scrap.len()
    }

    /// Advances the live-view high-water mark.
    ///
    /// Callers report the number of currently attached views before a batch
    /// of releases; the mark only ever grows and caps each scrap pool.
    pub fn record_live_count(&mut self, count: usize) {
        if count > self.max_scrap {
            self.max_scrap = count;
        }
    }

    /// Releases a view back into the pool.
    ///
    /// A view with live transient state is parked in the side table under
    /// `raw_position` (replacing any previous occupant) so it can be
    /// reattached to the same logical item. Anything else goes onto the
    /// scrap stack for `view_type`, or is dropped once that stack is at
    /// capacity.
    pub fn release(&mut self, view: V, view_type: usize, raw_position: usize, transient: bool) {
        if transient {
            self.transient.insert(raw_position, view);
            return;
        }
        assert!(
            view_type < self.scrap.len(),
            "view type {view_type} out of range ({} registered)",
            self.scrap.len()
        );
        let pool = &mut self.scrap[view_type];
        if pool.len() < self.max_scrap {
            pool.push(view);
        }
    }

    /// Claims the transient-state view parked at `raw_position`, if any.
    pub fn acquire_transient(&mut self, raw_position: usize) -> Option<V> {
        self.transient.remove(&raw_position)
    }

    /// Pops the most recently released scrap view of `view_type`, if any.
    pub fn acquire_for_type(&mut self, view_type: usize) -> Option<V> {
        self.scrap.get_mut(view_type)?.pop()
    }

    /// Number of scrap views currently pooled for `view_type`.
    #[must_use]
    pub fn scrap_count(&self, view_type: usize) -> usize {
        self.scrap.get(view_type).map_or(0, Vec::len)
    }

    /// Drops every parked transient-state view.
    pub fn clear_transient(&mut self) {
        self.transient.clear();
    }

    /// Drops all pooled views, scrap and transient alike.
    ///
    /// The registered view type count and the live-view high-water mark
    /// survive; use this when the data set changes wholesale but the adapter
    /// stays the same shape.
    pub fn clear(&mut self) {
        for pool in &mut self.scrap {
            pool.clear();
        }
        self.transient.clear();
    }
}
