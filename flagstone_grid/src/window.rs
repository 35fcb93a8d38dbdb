// Copyright 2026 the Flagstone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport window: which catalog entries need a live view right now.
//!
//! Attachment and detachment deliberately use different bands. Items attach
//! generously: anything intersecting the preload window, which extends
//! `viewport_extent * preload_pages` to both sides of the scroll offset, so
//! views exist before they scroll on screen. Items detach conservatively:
//! only once their rectangle no longer intersects the exact viewport band,
//! so a view is not churned while the user hovers around a boundary.

use alloc::vec::Vec;

use crate::catalog::Catalog;

/// Attach/detach instructions produced by [`compute_window_diff`].
///
/// Both lists hold catalog indices in catalog order and never share an
/// index: `to_attach` only contains entries outside the current visible set,
/// `to_detach` only entries inside it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowDiff {
    /// Entries that newly intersect the preload window and need a view.
    pub to_attach: Vec<usize>,
    /// Visible entries that left the exact viewport and can be recycled.
    pub to_detach: Vec<usize>,
}

impl WindowDiff {
    /// Returns `true` when the diff changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_attach.is_empty() && self.to_detach.is_empty()
    }
}

/// Computes the attach/detach diff for the current scroll position.
///
/// `visible` is the current visible set as sorted catalog indices. The
/// preload window is clamped to `[0, content_extent]`. When the candidate
/// set equals the current one entry-for-entry the whole update
/// short-circuits to an empty diff; that is an optimization, correctness
/// only needs the two sets' difference.
pub fn compute_window_diff(
    catalog: &Catalog,
    visible: &[usize],
    offset: i32,
    viewport_extent: i32,
    preload_pages: i32,
) -> WindowDiff {
    let preload = viewport_extent.saturating_mul(preload_pages);
    let window_start = (offset - preload).max(0);
    let window_end = (offset + preload).min(catalog.content_extent());

    let candidates: Vec<usize> = catalog
        .indices_intersecting(window_start, window_end)
        .collect();

    if candidates.len() == visible.len() {
        let items = catalog.items();
        let unchanged = candidates
            .iter()
            .zip(visible)
            .all(|(&c, &v)| items[c] == items[v]);
        if unchanged {
            return WindowDiff::default();
        }
    }

    let to_attach = candidates
        .iter()
        .copied()
        .filter(|i| visible.binary_search(i).is_err())
        .collect();

    let o = catalog.orientation();
    let view_start = offset;
    let view_end = offset + viewport_extent;
    let to_detach = visible
        .iter()
        .copied()
        .filter(|&i| {
            let rect = catalog.items()[i].rect;
            !(o.main_start(rect) < view_end && view_start < o.main_end(rect))
        })
        .collect();

    WindowDiff {
        to_attach,
        to_detach,
    }
}

/// Applies a diff to a sorted visible set:
/// `visible_after = (visible_before \ to_detach) ∪ to_attach`.
pub fn apply_diff(visible: &mut Vec<usize>, diff: &WindowDiff) {
    visible.retain(|i| diff.to_detach.binary_search(i).is_err());
    visible.extend_from_slice(&diff.to_attach);
    visible.sort_unstable();
}
