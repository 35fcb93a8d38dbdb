// Copyright 2026 the Flagstone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flagstone Pack: the gap-filling rectangle packer behind staggered grids.
//!
//! This crate turns a stream of item sizes into non-overlapping placement
//! rectangles over a one-dimensional scroll axis and a fixed-extent cross
//! axis. The core concepts are:
//!
//! - [`ItemSize`] and [`GridRect`]: integer-pixel value types.
//! - [`Orientation`]: selects the scroll axis and provides the main/cross
//!   projection so layout code is written once for both directions.
//! - [`Frontier`]: the ordered set of trailing-edge rectangles bounding
//!   occupied space, pruned and clipped as placements land.
//! - [`GapPacker`]: places one item at a time, preferring the first gap with
//!   enough cleared space behind the frontier over growing the content, with
//!   sections forced onto fresh full-cross bands.
//!
//! The packer knows nothing about views, adapters, or scrolling; hosts feed
//! it sizes in item order and store the returned rectangles.
//!
//! ## Minimal example
//!
//! ```rust
//! use flagstone_pack::{GapPacker, ItemSize, Orientation};
//!
//! // A vertical grid 220 pixels across with a 10 pixel margin.
//! let mut packer = GapPacker::new(Orientation::Vertical, 10, 220);
//!
//! let first = packer.place(ItemSize::new(100, 80), false);
//! let second = packer.place(ItemSize::new(100, 30), false);
//! assert_eq!(first.y0, second.y0); // side by side in the first band
//!
//! // A short third item fills the gap under the second column.
//! let third = packer.place(ItemSize::new(100, 20), false);
//! assert_eq!(third.x0, second.x0);
//! assert!(third.y0 > second.y1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod frontier;
mod packer;
mod types;

pub use frontier::Frontier;
pub use packer::GapPacker;
pub use types::{GridRect, ItemSize, Orientation};
