//! Viewport wrapper that cannot produce items for some positions.
//!
//! Simulates a data source that changed underneath the list: requests for the
//! listed positions miss while everything else is delegated.

use pinlist_foundation::lazy::Viewport;
use pinlist_ui_layout::AxisSpan;

/// Delegates to `V` but misses every request for a position in `missing`.
pub struct MissingItemsViewport<V> {
    inner: V,
    missing: Vec<usize>,
    misses: usize,
}

impl<V: Viewport> MissingItemsViewport<V> {
    pub fn new(inner: V, missing: impl IntoIterator<Item = usize>) -> Self {
        Self {
            inner,
            missing: missing.into_iter().collect(),
            misses: 0,
        }
    }

    /// Number of requests that missed.
    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn set_missing(&mut self, missing: impl IntoIterator<Item = usize>) {
        self.missing = missing.into_iter().collect();
    }
}

impl<V: Viewport> Viewport for MissingItemsViewport<V> {
    type Item = V::Item;

    fn item_count(&self) -> usize {
        self.inner.item_count()
    }

    fn extent(&self) -> f32 {
        self.inner.extent()
    }

    fn child_count(&self) -> usize {
        self.inner.child_count()
    }

    fn child_at(&self, index: usize) -> Option<V::Item> {
        self.inner.child_at(index)
    }

    fn position_of(&self, item: &V::Item) -> Option<usize> {
        self.inner.position_of(item)
    }

    fn measure(&mut self, item: &V::Item) {
        self.inner.measure(item)
    }

    fn decorated_measurement(&self, item: &V::Item) -> f32 {
        self.inner.decorated_measurement(item)
    }

    fn decorated_start(&self, item: &V::Item) -> f32 {
        self.inner.decorated_start(item)
    }

    fn decorated_end(&self, item: &V::Item) -> f32 {
        self.inner.decorated_end(item)
    }

    fn request_item(&mut self, position: usize) -> Option<V::Item> {
        if self.missing.contains(&position) {
            self.misses += 1;
            log::trace!("MissingItemsViewport: refusing position {}", position);
            return None;
        }
        self.inner.request_item(position)
    }

    fn attach(&mut self, item: &V::Item, span: AxisSpan) {
        self.inner.attach(item, span)
    }

    fn detach(&mut self, item: &V::Item) {
        self.inner.detach(item)
    }

    fn offset(&mut self, item: &V::Item, delta: f32) {
        self.inner.offset(item, delta)
    }

    fn layout_children(&mut self) {
        self.inner.layout_children()
    }

    fn scroll_by(&mut self, delta: f32) -> f32 {
        self.inner.scroll_by(delta)
    }

    fn first_visible_position(&self) -> Option<usize> {
        self.inner.first_visible_position()
    }

    fn last_visible_position(&self) -> Option<usize> {
        self.inner.last_visible_position()
    }

    fn first_completely_visible_position(&self) -> Option<usize> {
        self.inner.first_completely_visible_position()
    }

    fn last_completely_visible_position(&self) -> Option<usize> {
        self.inner.last_completely_visible_position()
    }

    fn on_items_added(&mut self, position_start: usize, item_count: usize) {
        self.inner.on_items_added(position_start, item_count)
    }

    fn on_items_removed(&mut self, position_start: usize, item_count: usize) {
        self.inner.on_items_removed(position_start, item_count)
    }

    fn on_items_moved(&mut self, from: usize, to: usize, item_count: usize) {
        self.inner.on_items_moved(from, to, item_count)
    }

    fn on_items_updated(&mut self, position_start: usize, item_count: usize) {
        self.inner.on_items_updated(position_start, item_count)
    }

    fn on_items_changed(&mut self) {
        self.inner.on_items_changed()
    }
}
