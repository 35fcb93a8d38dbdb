// Copyright 2026 the Flagstone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flagstone Grid: a staggered, windowed grid layout core.
//!
//! This crate assembles the gap-filling packer from `flagstone_pack` and the
//! view pool from `flagstone_recycler` into a complete layout engine for
//! adapter-backed grids: items of varying size flow into columns (or rows),
//! the largest usable gap is filled before content grows, optional section
//! headers force fresh full-width bands, and only the entries around the
//! scroll offset carry live views.
//!
//! The core concepts are:
//!
//! - [`GridAdapter`]: the host's description of its items (counts, sizes,
//!   identities, view types, and view factories). Sectioning is an optional
//!   capability ([`SectionSource`]).
//! - [`Catalog`] and [`GridItem`]: the ordered logical model with every
//!   entry's final rectangle, rebuilt in full whenever the data or the
//!   configuration changes.
//! - [`compute_window_diff`] and [`WindowDiff`]: which entries must gain or
//!   lose a live view for the current scroll offset.
//! - [`ScrollState`]: clamped scroll offset bookkeeping.
//! - [`StaggeredGrid`]: the engine that owns all of the above plus the view
//!   pool and the mount table.
//!
//! The crate deliberately knows nothing about rendering, touch handling,
//! fling physics, or any concrete widget system. A host binds it by calling
//! [`StaggeredGrid::layout`] when its box changes, [`StaggeredGrid::scroll_by`]
//! with gesture deltas, and positioning its real views from
//! [`StaggeredGrid::visible_items`].
//!
//! ## Minimal example
//!
//! ```rust
//! use flagstone_grid::{GridAdapter, GridConfig, ItemSize, Orientation, StaggeredGrid};
//!
//! struct Squares;
//!
//! impl GridAdapter for Squares {
//!     type View = u32;
//!
//!     fn item_count(&self) -> usize {
//!         64
//!     }
//!
//!     fn item_id(&self, position: usize) -> i64 {
//!         position as i64
//!     }
//!
//!     fn item_size(&self, _position: usize) -> ItemSize {
//!         ItemSize::new(100, 100)
//!     }
//!
//!     fn create_view(&mut self, position: usize, scrap: Option<u32>) -> Option<u32> {
//!         Some(scrap.unwrap_or(position as u32))
//!     }
//! }
//!
//! let mut grid = StaggeredGrid::new(GridConfig {
//!     orientation: Orientation::Vertical,
//!     item_margin: 10,
//!     preload_pages: 2,
//! });
//! grid.set_adapter(Some(Squares));
//! grid.layout(ItemSize::new(230, 400));
//!
//! // Two columns of squares; only the entries near the top are live.
//! assert!(grid.visible_items().count() > 0);
//! assert!(grid.visible_items().count() < 64);
//!
//! let outcome = grid.scroll_by(250);
//! assert_eq!(outcome.applied, 250);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod catalog;
mod engine;
mod scroll;
mod window;

pub use flagstone_pack::{GridRect, ItemSize, Orientation};

pub use adapter::{GridAdapter, SectionSource};
pub use catalog::{Catalog, GridItem};
pub use engine::{GridConfig, ScrollOutcome, StaggeredGrid};
pub use scroll::ScrollState;
pub use window::{WindowDiff, apply_diff, compute_window_diff};
