//! Capability interface over the underlying virtualized list engine.
//!
//! The pinned layout never subclasses or reaches into a concrete list
//! implementation. Everything it needs (measurement, attaching and detaching
//! items, the standard layout and scroll passes) goes through [`Viewport`],
//! implemented by an adapter over whichever engine hosts the list.

use std::fmt::Debug;

use pinlist_ui_layout::AxisSpan;

/// The underlying virtualized list engine, seen from the pinned layout.
///
/// Offsets are measured along the scroll axis from the viewport's leading
/// edge. Items are cheap handles; the viewport owns whatever they refer to and
/// reclaims it on [`detach`](Viewport::detach).
pub trait Viewport {
    /// Handle to a renderable item.
    type Item: Clone + PartialEq + Debug;

    /// The total number of items in the list (visible or not).
    fn item_count(&self) -> usize;

    /// Length of the viewport along the scroll axis.
    fn extent(&self) -> f32;

    /// Number of currently attached items.
    fn child_count(&self) -> usize;

    /// Attached item at `index` in drawing order.
    fn child_at(&self, index: usize) -> Option<Self::Item>;

    /// Adapter position the item is bound to, if the handle is known.
    fn position_of(&self, item: &Self::Item) -> Option<usize>;

    /// Measures the item so its decorated measurement is current.
    fn measure(&mut self, item: &Self::Item);

    /// Size of the item along the scroll axis, decorations included.
    fn decorated_measurement(&self, item: &Self::Item) -> f32;

    /// Leading edge of the item, decorations included.
    fn decorated_start(&self, item: &Self::Item) -> f32;

    /// Trailing edge of the item, decorations included.
    fn decorated_end(&self, item: &Self::Item) -> f32;

    /// Produces a fresh item bound to `position`.
    ///
    /// Returns `None` when the viewport cannot produce one, e.g. when the
    /// position is out of range.
    fn request_item(&mut self, position: usize) -> Option<Self::Item>;

    /// Attaches the item and lays it out at `span`.
    ///
    /// Attaching an item that is already attached re-lays it and raises it
    /// to the top of the drawing order.
    fn attach(&mut self, item: &Self::Item, span: AxisSpan);

    /// Detaches the item and hands it back for recycling.
    fn detach(&mut self, item: &Self::Item);

    /// Moves an attached item along the scroll axis.
    fn offset(&mut self, item: &Self::Item, delta: f32);

    /// Runs the standard linear layout for the current scroll position.
    fn layout_children(&mut self);

    /// Runs the standard scroll by `delta` and returns the distance consumed.
    fn scroll_by(&mut self, delta: f32) -> f32;

    /// Unmodified first visible position over all attached items.
    fn first_visible_position(&self) -> Option<usize>;

    /// Unmodified last visible position over all attached items.
    fn last_visible_position(&self) -> Option<usize>;

    /// Unmodified first completely visible position over all attached items.
    fn first_completely_visible_position(&self) -> Option<usize>;

    /// Unmodified last completely visible position over all attached items.
    fn last_completely_visible_position(&self) -> Option<usize>;

    /// Called after `item_count` items were inserted at `position_start`.
    fn on_items_added(&mut self, position_start: usize, item_count: usize) {
        let _ = (position_start, item_count);
    }

    /// Called after `item_count` items were removed at `position_start`.
    fn on_items_removed(&mut self, position_start: usize, item_count: usize) {
        let _ = (position_start, item_count);
    }

    /// Called after `item_count` items moved from `from` to `to`.
    fn on_items_moved(&mut self, from: usize, to: usize, item_count: usize) {
        let _ = (from, to, item_count);
    }

    /// Called after the content of `item_count` items changed in place.
    fn on_items_updated(&mut self, position_start: usize, item_count: usize) {
        let _ = (position_start, item_count);
    }

    /// Called when the whole data set changed.
    fn on_items_changed(&mut self) {}

    /// Attached items in drawing order.
    fn attached_items(&self) -> Vec<Self::Item> {
        (0..self.child_count())
            .filter_map(|index| self.child_at(index))
            .collect()
    }
}
