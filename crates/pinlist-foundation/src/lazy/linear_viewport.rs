//! Reference viewport: a standard linear list with a recycle pool.
//!
//! [`LinearViewport`] implements the [`Viewport`] capability for hosts that
//! have no native list engine. It lays items out back to back from a scroll
//! offset, attaches an item for every position intersecting the viewport and
//! recycles item handles through a pool.

use pinlist_ui_graphics::Rect;
use pinlist_ui_layout::{Axis, AxisSpan};
use rustc_hash::FxHashMap;

use super::viewport::Viewport;

/// Configuration for a [`LinearViewport`].
#[derive(Clone, Debug)]
pub struct LinearViewportConfig {
    /// Scroll axis of the list.
    pub axis: Axis,

    /// Size of the viewport along the scroll axis.
    pub viewport_size: f32,

    /// Size of the viewport across the scroll axis. Every item fills it.
    pub cross_axis_size: f32,
}

impl Default for LinearViewportConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            viewport_size: 0.0,
            cross_axis_size: 0.0,
        }
    }
}

/// Handle to an item produced by a [`LinearViewport`].
///
/// Ids are reused once a handle is detached and goes back to the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemHandle(u64);

impl ItemHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Statistics about item handle lifecycle.
///
/// Used for testing and debugging recycling behavior.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinearViewportStats {
    /// Number of items currently attached.
    pub attached: usize,

    /// Number of handles waiting in the recycle pool.
    pub pooled: usize,

    /// Total number of handles ever created.
    pub created: usize,

    /// Number of requests served from the pool instead of creating a handle.
    pub reused: usize,

    /// Number of measure calls.
    pub measured: usize,
}

#[derive(Clone, Copy, Debug)]
struct Child {
    handle: ItemHandle,
    position: usize,
    span: AxisSpan,
}

/// A standard linear list over a vector of item sizes.
///
/// The scroll offset is the source of truth for the normal flow: it is the
/// distance between the start of the content and the viewport's leading
/// edge, clamped to `[0, max_scroll_offset]`.
#[derive(Debug)]
pub struct LinearViewport {
    config: LinearViewportConfig,
    item_sizes: Vec<f32>,
    /// Content offset of each item's start; one longer than `item_sizes`.
    item_starts: Vec<f32>,
    scroll_offset: f32,
    /// Attached items in drawing order.
    children: Vec<Child>,
    /// Position every live handle (attached or merely requested) is bound to.
    bound: FxHashMap<ItemHandle, usize>,
    pool: Vec<ItemHandle>,
    next_id: u64,
    stats: LinearViewportStats,
}

impl LinearViewport {
    /// Creates a viewport over items with the given sizes along the scroll axis.
    pub fn new(config: LinearViewportConfig, item_sizes: Vec<f32>) -> Self {
        let mut viewport = Self {
            config,
            item_sizes: Vec::new(),
            item_starts: vec![0.0],
            scroll_offset: 0.0,
            children: Vec::new(),
            bound: FxHashMap::default(),
            pool: Vec::new(),
            next_id: 0,
            stats: LinearViewportStats::default(),
        };
        viewport.set_item_sizes(item_sizes);
        viewport
    }

    /// Creates a viewport over `item_count` items of the same size.
    pub fn uniform(config: LinearViewportConfig, item_count: usize, item_size: f32) -> Self {
        Self::new(config, vec![item_size; item_count])
    }

    pub fn config(&self) -> &LinearViewportConfig {
        &self.config
    }

    /// Replaces the item sizes.
    ///
    /// Attached items keep their spans until the next layout or scroll.
    pub fn set_item_sizes(&mut self, item_sizes: Vec<f32>) {
        self.item_starts = Vec::with_capacity(item_sizes.len() + 1);
        let mut start = 0.0;
        self.item_starts.push(start);
        for &size in &item_sizes {
            start += size.max(0.0);
            self.item_starts.push(start);
        }
        self.item_sizes = item_sizes;
    }

    /// Inserts items with the given sizes before `position_start`.
    pub fn insert_items(&mut self, position_start: usize, sizes: &[f32]) {
        let mut item_sizes = std::mem::take(&mut self.item_sizes);
        let at = position_start.min(item_sizes.len());
        item_sizes.splice(at..at, sizes.iter().copied());
        self.set_item_sizes(item_sizes);
    }

    /// Removes up to `item_count` items starting at `position_start`.
    pub fn remove_items(&mut self, position_start: usize, item_count: usize) {
        let mut item_sizes = std::mem::take(&mut self.item_sizes);
        let start = position_start.min(item_sizes.len());
        let end = position_start.saturating_add(item_count).min(item_sizes.len());
        item_sizes.drain(start..end);
        self.set_item_sizes(item_sizes);
    }

    /// Size of the item at `position` along the scroll axis.
    pub fn item_size(&self, position: usize) -> Option<f32> {
        self.item_sizes.get(position).copied()
    }

    /// Total length of the content along the scroll axis.
    pub fn content_size(&self) -> f32 {
        self.item_starts.last().copied().unwrap_or(0.0)
    }

    pub fn max_scroll_offset(&self) -> f32 {
        (self.content_size() - self.config.viewport_size).max(0.0)
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn stats(&self) -> LinearViewportStats {
        LinearViewportStats {
            attached: self.children.len(),
            pooled: self.pool.len(),
            ..self.stats.clone()
        }
    }

    /// Attached positions and spans in drawing order.
    pub fn attached_spans(&self) -> Vec<(usize, AxisSpan)> {
        self.children
            .iter()
            .map(|child| (child.position, child.span))
            .collect()
    }

    /// Attached positions and their bounds in drawing order.
    pub fn children_rects(&self) -> Vec<(usize, Rect)> {
        self.children
            .iter()
            .map(|child| {
                (
                    child.position,
                    self.config.axis.rect(child.span, self.config.cross_axis_size),
                )
            })
            .collect()
    }

    /// Span an item at `position` takes in the normal flow at the current offset.
    pub fn natural_span(&self, position: usize) -> Option<AxisSpan> {
        let start = *self.item_starts.get(position)?;
        let end = *self.item_starts.get(position + 1)?;
        Some(AxisSpan::new(
            start - self.scroll_offset,
            end - self.scroll_offset,
        ))
    }

    fn child_index(&self, handle: ItemHandle) -> Option<usize> {
        self.children.iter().position(|child| child.handle == handle)
    }

    fn is_position_attached(&self, position: usize) -> bool {
        self.children.iter().any(|child| child.position == position)
    }

    fn obtain_handle(&mut self) -> ItemHandle {
        if let Some(handle) = self.pool.pop() {
            self.stats.reused += 1;
            handle
        } else {
            let handle = ItemHandle(self.next_id);
            self.next_id += 1;
            self.stats.created += 1;
            handle
        }
    }

    fn recycle(&mut self, handle: ItemHandle) {
        if self.bound.remove(&handle).is_some() {
            self.pool.push(handle);
        }
    }

    fn clamp_scroll_offset(&mut self) {
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll_offset());
    }

    /// Positions whose natural span intersects the viewport.
    fn visible_positions(&self) -> std::ops::Range<usize> {
        let viewport_start = self.scroll_offset;
        let viewport_end = self.scroll_offset + self.config.viewport_size;
        let count = self.item_sizes.len();
        // item_starts[p + 1] is the end of item p.
        let first = self.item_starts[1..].partition_point(|&end| end <= viewport_start);
        let last = self.item_starts[..count].partition_point(|&start| start < viewport_end);
        first..last.max(first)
    }

    /// Attaches every visible position that is not attached yet.
    fn fill(&mut self) {
        for position in self.visible_positions() {
            if self.is_position_attached(position) {
                continue;
            }
            let Some(span) = self.natural_span(position) else {
                continue;
            };
            if let Some(handle) = self.request_item(position) {
                self.attach(&handle, span);
            }
        }
    }

    /// Detaches every child that no longer intersects the viewport.
    fn recycle_out_of_viewport(&mut self) {
        let viewport_size = self.config.viewport_size;
        let gone: Vec<ItemHandle> = self
            .children
            .iter()
            .filter(|child| !child.span.intersects_viewport(viewport_size))
            .map(|child| child.handle)
            .collect();
        for handle in gone {
            self.detach(&handle);
        }
    }

    fn positions_where(
        &self,
        predicate: impl Fn(&Child) -> bool + 'static,
    ) -> impl Iterator<Item = usize> + '_ {
        self.children
            .iter()
            .filter(move |child| predicate(*child))
            .map(|child| child.position)
    }
}

impl Viewport for LinearViewport {
    type Item = ItemHandle;

    fn item_count(&self) -> usize {
        self.item_sizes.len()
    }

    fn extent(&self) -> f32 {
        self.config.viewport_size
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_at(&self, index: usize) -> Option<ItemHandle> {
        self.children.get(index).map(|child| child.handle)
    }

    fn position_of(&self, item: &ItemHandle) -> Option<usize> {
        self.bound.get(item).copied()
    }

    fn measure(&mut self, _item: &ItemHandle) {
        self.stats.measured += 1;
    }

    fn decorated_measurement(&self, item: &ItemHandle) -> f32 {
        match self.child_index(*item) {
            Some(index) => self.children[index].span.extent(),
            None => self
                .position_of(item)
                .and_then(|position| self.item_size(position))
                .unwrap_or(0.0),
        }
    }

    fn decorated_start(&self, item: &ItemHandle) -> f32 {
        // Unattached items have not been laid out and sit at the origin.
        self.child_index(*item)
            .map(|index| self.children[index].span.start)
            .unwrap_or(0.0)
    }

    fn decorated_end(&self, item: &ItemHandle) -> f32 {
        match self.child_index(*item) {
            Some(index) => self.children[index].span.end,
            None => self.decorated_measurement(item),
        }
    }

    fn request_item(&mut self, position: usize) -> Option<ItemHandle> {
        if position >= self.item_sizes.len() {
            return None;
        }
        let handle = self.obtain_handle();
        self.bound.insert(handle, position);
        Some(handle)
    }

    fn attach(&mut self, item: &ItemHandle, span: AxisSpan) {
        let Some(position) = self.position_of(item) else {
            log::warn!("LinearViewport: attach of unknown item {:?}", item);
            return;
        };
        if let Some(index) = self.child_index(*item) {
            self.children.remove(index);
        }
        self.children.push(Child {
            handle: *item,
            position,
            span,
        });
    }

    fn detach(&mut self, item: &ItemHandle) {
        if let Some(index) = self.child_index(*item) {
            self.children.remove(index);
        } else if !self.bound.contains_key(item) {
            log::warn!("LinearViewport: detach of unknown item {:?}", item);
            return;
        }
        self.recycle(*item);
    }

    fn offset(&mut self, item: &ItemHandle, delta: f32) {
        if let Some(index) = self.child_index(*item) {
            let child = &mut self.children[index];
            child.span = child.span.offset(delta);
        }
    }

    fn layout_children(&mut self) {
        let attached: Vec<ItemHandle> = self.children.iter().map(|child| child.handle).collect();
        for handle in attached {
            self.detach(&handle);
        }
        self.clamp_scroll_offset();
        self.fill();
    }

    fn scroll_by(&mut self, delta: f32) -> f32 {
        if self.item_sizes.is_empty() {
            return 0.0;
        }
        // A non-finite delta scrolls nothing but still refills evicted positions.
        let delta = if delta.is_finite() {
            delta
        } else {
            log::warn!("LinearViewport: ignoring non-finite scroll delta {}", delta);
            0.0
        };
        let previous = self.scroll_offset;
        self.scroll_offset = (previous + delta).clamp(0.0, self.max_scroll_offset());
        let consumed = self.scroll_offset - previous;

        let attached: Vec<ItemHandle> = self.children.iter().map(|child| child.handle).collect();
        for handle in attached {
            self.offset(&handle, -consumed);
        }
        self.recycle_out_of_viewport();
        self.fill();
        consumed
    }

    fn first_visible_position(&self) -> Option<usize> {
        let size = self.config.viewport_size;
        self.positions_where(move |child| child.span.intersects_viewport(size))
            .min()
    }

    fn last_visible_position(&self) -> Option<usize> {
        let size = self.config.viewport_size;
        self.positions_where(move |child| child.span.intersects_viewport(size))
            .max()
    }

    fn first_completely_visible_position(&self) -> Option<usize> {
        let size = self.config.viewport_size;
        self.positions_where(move |child| child.span.is_within_viewport(size))
            .min()
    }

    fn last_completely_visible_position(&self) -> Option<usize> {
        let size = self.config.viewport_size;
        self.positions_where(move |child| child.span.is_within_viewport(size))
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_viewport(item_count: usize) -> LinearViewport {
        let config = LinearViewportConfig {
            viewport_size: 500.0,
            cross_axis_size: 320.0,
            ..Default::default()
        };
        LinearViewport::uniform(config, item_count, 100.0)
    }

    fn attached_positions(viewport: &LinearViewport) -> Vec<usize> {
        let mut positions: Vec<usize> = viewport
            .attached_spans()
            .into_iter()
            .map(|(position, _)| position)
            .collect();
        positions.sort_unstable();
        positions
    }

    #[test]
    fn test_layout_fills_viewport() {
        let mut viewport = create_viewport(10);
        viewport.layout_children();

        assert_eq!(attached_positions(&viewport), vec![0, 1, 2, 3, 4]);
        assert_eq!(viewport.natural_span(2), Some(AxisSpan::new(200.0, 300.0)));
        assert_eq!(viewport.first_visible_position(), Some(0));
        assert_eq!(viewport.last_completely_visible_position(), Some(4));
    }

    #[test]
    fn test_scroll_recycles_and_fills() {
        let mut viewport = create_viewport(10);
        viewport.layout_children();

        let consumed = viewport.scroll_by(250.0);

        assert_eq!(consumed, 250.0);
        assert_eq!(attached_positions(&viewport), vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(viewport.first_visible_position(), Some(2));
        assert_eq!(viewport.first_completely_visible_position(), Some(3));
        assert_eq!(viewport.last_completely_visible_position(), Some(6));

        let stats = viewport.stats();
        assert_eq!(stats.attached, 6);
        assert_eq!(stats.created, 6, "recycled handles should be reused");
        assert_eq!(stats.reused, 2);
        assert_eq!(stats.pooled, 0);
    }

    #[test]
    fn test_scroll_clamps_at_bounds() {
        let mut viewport = create_viewport(10);
        viewport.layout_children();

        assert_eq!(viewport.scroll_by(-40.0), 0.0);
        assert_eq!(viewport.scroll_by(10_000.0), 500.0);
        assert_eq!(viewport.scroll_offset(), 500.0);
        assert_eq!(attached_positions(&viewport), vec![5, 6, 7, 8, 9]);
        assert_eq!(viewport.scroll_by(1.0), 0.0);
    }

    #[test]
    fn test_non_finite_delta_is_ignored() {
        let mut viewport = create_viewport(10);
        viewport.layout_children();
        viewport.scroll_by(150.0);

        for delta in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert_eq!(viewport.scroll_by(delta), 0.0);
            assert_eq!(viewport.scroll_offset(), 150.0);
        }
        assert_eq!(attached_positions(&viewport), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(viewport.scroll_by(100.0), 100.0);
        assert_eq!(viewport.scroll_offset(), 250.0);
    }

    #[test]
    fn test_short_content_does_not_scroll() {
        let mut viewport = create_viewport(3);
        viewport.layout_children();

        assert_eq!(viewport.scroll_by(50.0), 0.0);
        assert_eq!(attached_positions(&viewport), vec![0, 1, 2]);
    }

    #[test]
    fn test_request_out_of_range_misses() {
        let mut viewport = create_viewport(10);
        assert_eq!(viewport.request_item(10), None);
        assert!(viewport.request_item(9).is_some());
    }

    #[test]
    fn test_unattached_item_sits_at_origin() {
        let mut viewport = create_viewport(10);
        let handle = viewport.request_item(3).unwrap();

        assert_eq!(viewport.decorated_start(&handle), 0.0);
        assert_eq!(viewport.decorated_end(&handle), 100.0);
        assert_eq!(viewport.decorated_measurement(&handle), 100.0);

        viewport.detach(&handle);
        assert_eq!(viewport.stats().pooled, 1);
        assert_eq!(viewport.position_of(&handle), None);
    }

    #[test]
    fn test_attach_existing_child_raises_it() {
        let mut viewport = create_viewport(10);
        viewport.layout_children();
        let first = viewport.child_at(0).unwrap();

        viewport.attach(&first, AxisSpan::at(50.0, 100.0));

        assert_eq!(viewport.child_count(), 5);
        assert_eq!(viewport.child_at(4), Some(first));
        assert_eq!(viewport.decorated_start(&first), 50.0);
    }

    #[test]
    fn test_remove_items_clamps_offset_on_layout() {
        let mut viewport = create_viewport(10);
        viewport.layout_children();
        viewport.scroll_by(500.0);

        viewport.remove_items(6, 4);
        viewport.layout_children();

        assert_eq!(viewport.item_count(), 6);
        assert_eq!(viewport.scroll_offset(), 100.0);
        assert_eq!(attached_positions(&viewport), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insert_items_shifts_content() {
        let mut viewport = create_viewport(2);
        viewport.insert_items(1, &[40.0, 60.0]);

        assert_eq!(viewport.item_count(), 4);
        assert_eq!(viewport.item_size(1), Some(40.0));
        assert_eq!(viewport.natural_span(3), Some(AxisSpan::new(200.0, 300.0)));
        assert_eq!(viewport.content_size(), 300.0);
    }

    #[test]
    fn test_horizontal_rects() {
        let config = LinearViewportConfig {
            axis: Axis::Horizontal,
            viewport_size: 300.0,
            cross_axis_size: 48.0,
        };
        let mut viewport = LinearViewport::uniform(config, 5, 120.0);
        viewport.layout_children();

        let rects = viewport.children_rects();
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[2], (2, Rect::new(240.0, 0.0, 120.0, 48.0)));
    }
}
