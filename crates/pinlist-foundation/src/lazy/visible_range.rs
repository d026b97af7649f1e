//! Visible-position queries that see only normal-flow items.
//!
//! Pinned overlays are fixed to the leading edge and are not part of the
//! scrollable window callers reason about, so every first/last query skips
//! positions present in the [`PinnedOverlayTracker`].

use std::collections::BTreeMap;

use super::pinned_overlay_tracker::PinnedOverlayTracker;
use super::range_classifier::VisibleWindow;
use super::viewport::Viewport;

/// Read-only view over a viewport that filters out pinned overlays.
///
/// Nothing is cached: every query rescans the attached items, so results stay
/// correct right after items are attached or detached.
pub struct VisibleRangeAdjuster<'a, V: Viewport> {
    viewport: &'a V,
    tracker: &'a PinnedOverlayTracker<V::Item>,
}

impl<'a, V: Viewport> VisibleRangeAdjuster<'a, V> {
    pub fn new(viewport: &'a V, tracker: &'a PinnedOverlayTracker<V::Item>) -> Self {
        Self { viewport, tracker }
    }

    /// Attached items keyed and ordered by position.
    ///
    /// When two attached items share a position the later one in drawing
    /// order wins.
    pub fn attached_by_position(&self) -> BTreeMap<usize, V::Item> {
        let mut by_position = BTreeMap::new();
        for index in 0..self.viewport.child_count() {
            let Some(item) = self.viewport.child_at(index) else {
                continue;
            };
            if let Some(position) = self.viewport.position_of(&item) {
                by_position.insert(position, item);
            }
        }
        by_position
    }

    fn is_normal_flow(&self, position: usize) -> bool {
        !self.tracker.contains(position)
    }

    pub fn first_visible_position(&self) -> Option<usize> {
        self.attached_by_position()
            .into_keys()
            .find(|&position| self.is_normal_flow(position))
            .or_else(|| self.viewport.first_visible_position())
    }

    pub fn last_visible_position(&self) -> Option<usize> {
        self.attached_by_position()
            .into_keys()
            .rev()
            .find(|&position| self.is_normal_flow(position))
            .or_else(|| self.viewport.last_visible_position())
    }

    pub fn first_completely_visible_position(&self) -> Option<usize> {
        self.attached_by_position()
            .into_iter()
            .find(|(position, item)| {
                self.is_normal_flow(*position) && self.viewport.decorated_start(item) >= 0.0
            })
            .map(|(position, _)| position)
            .or_else(|| self.viewport.first_completely_visible_position())
    }

    pub fn last_completely_visible_position(&self) -> Option<usize> {
        let extent = self.viewport.extent();
        self.attached_by_position()
            .into_iter()
            .rev()
            .find(|(position, item)| {
                self.is_normal_flow(*position) && self.viewport.decorated_end(item) <= extent
            })
            .map(|(position, _)| position)
            .or_else(|| self.viewport.last_completely_visible_position())
    }

    /// First and last attached normal-flow positions, or `None` when every
    /// attached item is pinned or nothing is attached.
    ///
    /// Unlike the position queries this never falls back to the viewport, so
    /// an empty window really means nothing to pin against.
    pub fn window(&self) -> Option<VisibleWindow> {
        let by_position = self.attached_by_position();
        let mut normal = by_position
            .into_keys()
            .filter(|&position| self.is_normal_flow(position));
        let first = normal.next()?;
        let last = normal.last().unwrap_or(first);
        VisibleWindow::new(first, last)
    }
}

/// Finds the attached item bound to `position`.
///
/// Linear scan over the attached items; attached counts are bounded by what
/// fits in the viewport.
pub fn find_attached_by_position<V: Viewport>(viewport: &V, position: usize) -> Option<V::Item> {
    (0..viewport.child_count())
        .filter_map(|index| viewport.child_at(index))
        .find(|item| viewport.position_of(item) == Some(position))
}

/// Attached items whose position is one of `positions`, in drawing order.
pub fn find_attached_by_positions<V: Viewport>(viewport: &V, positions: &[usize]) -> Vec<V::Item> {
    if positions.is_empty() {
        return Vec::new();
    }
    (0..viewport.child_count())
        .filter_map(|index| viewport.child_at(index))
        .filter(|item| {
            viewport
                .position_of(item)
                .is_some_and(|position| positions.contains(&position))
        })
        .collect()
}
