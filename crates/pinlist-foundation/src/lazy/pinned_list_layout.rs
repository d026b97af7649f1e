//! Host-facing pinned list layout.
//!
//! [`PinnedListLayout`] owns a [`Viewport`] and the pinned layout session and
//! exposes the hooks a UI framework drives: layout, delta scroll, visible
//! position queries and structural change notifications.

use super::pinned_layout_engine::{PinnedLayoutEngine, PinnedLayoutSession};
use super::pinned_overlay_tracker::PinnedOverlayTracker;
use super::pinned_positions::PinnedPositionSet;
use super::range_classifier::VisibleWindow;
use super::scroll_coordinator::ScrollCoordinator;
use super::viewport::Viewport;
use super::visible_range::{find_attached_by_position, find_attached_by_positions, VisibleRangeAdjuster};

/// A virtualized list that keeps configured positions pinned to the
/// viewport's leading edge.
///
/// All operations run to completion on the calling thread; layout and scroll
/// calls must not overlap, which `&mut self` enforces.
pub struct PinnedListLayout<V: Viewport> {
    viewport: V,
    pinned_positions: PinnedPositionSet,
    session: PinnedLayoutSession<V::Item>,
}

impl<V: Viewport> PinnedListLayout<V> {
    pub fn new(viewport: V, pinned_positions: PinnedPositionSet) -> Self {
        let layout = Self {
            viewport,
            pinned_positions,
            session: PinnedLayoutSession::new(),
        };
        layout.warn_out_of_range_positions();
        layout
    }

    fn warn_out_of_range_positions(&self) {
        let item_count = self.viewport.item_count();
        for position in self.pinned_positions.out_of_range(item_count) {
            log::warn!(
                "PinnedListLayout: pinned position {} is beyond item count {} and will never pin",
                position,
                item_count
            );
        }
    }

    /// Replaces the pinned positions.
    ///
    /// Meant to be called before the first layout. Current overlays are
    /// released; the next layout or scroll builds the new stack.
    pub fn set_pinned_positions(&mut self, pinned_positions: PinnedPositionSet) {
        self.session.release_overlays(&mut self.viewport);
        self.pinned_positions = pinned_positions;
        self.warn_out_of_range_positions();
    }

    /// Full layout: the normal layout pass followed by the pinned pass.
    pub fn on_layout(&mut self) {
        self.session.release_overlays(&mut self.viewport);
        self.viewport.layout_children();
        PinnedLayoutEngine::new(&self.pinned_positions).run(&mut self.session, &mut self.viewport);
    }

    /// Scrolls by `delta` and returns the distance the viewport consumed.
    pub fn on_scroll_by_delta(&mut self, delta: f32) -> f32 {
        ScrollCoordinator::new(&self.pinned_positions).scroll_by(
            &mut self.session,
            &mut self.viewport,
            delta,
        )
    }

    fn visible_range(&self) -> VisibleRangeAdjuster<'_, V> {
        VisibleRangeAdjuster::new(&self.viewport, self.session.tracker())
    }

    /// First visible position that is not a pinned overlay.
    pub fn first_visible_position(&self) -> Option<usize> {
        self.visible_range().first_visible_position()
    }

    /// Last visible position that is not a pinned overlay.
    pub fn last_visible_position(&self) -> Option<usize> {
        self.visible_range().last_visible_position()
    }

    /// First position that is not a pinned overlay and starts inside the viewport.
    pub fn first_completely_visible_position(&self) -> Option<usize> {
        self.visible_range().first_completely_visible_position()
    }

    /// Last position that is not a pinned overlay and ends inside the viewport.
    pub fn last_completely_visible_position(&self) -> Option<usize> {
        self.visible_range().last_completely_visible_position()
    }

    /// First and last attached normal-flow positions.
    pub fn visible_window(&self) -> Option<VisibleWindow> {
        self.visible_range().window()
    }

    pub fn find_attached_by_position(&self, position: usize) -> Option<V::Item> {
        find_attached_by_position(&self.viewport, position)
    }

    pub fn find_attached_by_positions(&self, positions: &[usize]) -> Vec<V::Item> {
        find_attached_by_positions(&self.viewport, positions)
    }

    /// Items were inserted. Pinned positions stay where they are.
    pub fn on_items_added(&mut self, position_start: usize, item_count: usize) {
        self.viewport.on_items_added(position_start, item_count);
        self.retire_overlays("items added");
    }

    /// Items were removed. Pinned positions stay where they are.
    pub fn on_items_removed(&mut self, position_start: usize, item_count: usize) {
        self.viewport.on_items_removed(position_start, item_count);
        self.retire_overlays("items removed");
    }

    pub fn on_items_moved(&mut self, from: usize, to: usize, item_count: usize) {
        self.viewport.on_items_moved(from, to, item_count);
        self.retire_overlays("items moved");
    }

    pub fn on_items_updated(&mut self, position_start: usize, item_count: usize) {
        self.viewport.on_items_updated(position_start, item_count);
        self.retire_overlays("items updated");
    }

    pub fn on_items_changed(&mut self) {
        self.viewport.on_items_changed();
        self.retire_overlays("items changed");
    }

    /// Structural changes invalidate the stack; the next layout rebuilds it.
    fn retire_overlays(&mut self, reason: &str) {
        if self.session.tracker().is_empty() {
            return;
        }
        log::debug!(
            "{}: releasing {} pinned overlays until next layout",
            reason,
            self.session.tracker().len()
        );
        self.session.release_overlays(&mut self.viewport);
    }

    pub fn pinned_positions(&self) -> &PinnedPositionSet {
        &self.pinned_positions
    }

    pub fn session(&self) -> &PinnedLayoutSession<V::Item> {
        &self.session
    }

    pub fn tracker(&self) -> &PinnedOverlayTracker<V::Item> {
        self.session.tracker()
    }

    pub fn leading_space_used(&self) -> f32 {
        self.session.leading_space_used()
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Mutable access for data-source edits on the viewport.
    ///
    /// Follow edits with the matching `on_items_*` notification and a layout.
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn into_viewport(mut self) -> V {
        self.session.release_overlays(&mut self.viewport);
        self.viewport
    }
}
