//! Test rule driving a pinned list over a [`LinearViewport`].
//!
//! # Example
//!
//! ```
//! use pinlist_testing::PinnedListTestRule;
//!
//! let mut rule = PinnedListTestRule::uniform(10, 100.0, 500.0, &[1, 3]);
//! rule.layout();
//! rule.scroll(250.0);
//! assert_eq!(rule.pinned_positions(), vec![1, 3]);
//! ```

use pinlist_foundation::lazy::{
    LinearViewport, LinearViewportConfig, PinnedListLayout, PinnedPositionSet, Viewport,
};
use pinlist_ui_graphics::Rect;
use pinlist_ui_layout::{Axis, AxisSpan};

/// Cross-axis size used for every viewport the rule builds.
pub const TEST_CROSS_AXIS_SIZE: f32 = 320.0;

/// Owns a [`PinnedListLayout`] over a [`LinearViewport`] and exposes the
/// observations tests need.
pub struct PinnedListTestRule {
    layout: PinnedListLayout<LinearViewport>,
}

impl PinnedListTestRule {
    /// Vertical list of `item_count` items of `item_size` in a viewport of
    /// `viewport_size`.
    pub fn uniform(item_count: usize, item_size: f32, viewport_size: f32, pinned: &[usize]) -> Self {
        Self::with_sizes(vec![item_size; item_count], viewport_size, pinned)
    }

    /// Vertical list with one size per item.
    pub fn with_sizes(item_sizes: Vec<f32>, viewport_size: f32, pinned: &[usize]) -> Self {
        Self::with_config(
            LinearViewportConfig {
                axis: Axis::Vertical,
                viewport_size,
                cross_axis_size: TEST_CROSS_AXIS_SIZE,
            },
            item_sizes,
            pinned,
        )
    }

    pub fn with_config(config: LinearViewportConfig, item_sizes: Vec<f32>, pinned: &[usize]) -> Self {
        let viewport = LinearViewport::new(config, item_sizes);
        Self {
            layout: PinnedListLayout::new(viewport, PinnedPositionSet::new(pinned.iter().copied())),
        }
    }

    /// Runs a full layout pass.
    pub fn layout(&mut self) -> &mut Self {
        self.layout.on_layout();
        self
    }

    /// Scrolls by `delta` and returns the consumed distance.
    pub fn scroll(&mut self, delta: f32) -> f32 {
        self.layout.on_scroll_by_delta(delta)
    }

    /// Scrolls in `steps` equal increments, returning the total consumed.
    pub fn scroll_in_steps(&mut self, delta: f32, steps: usize) -> f32 {
        let step = delta / steps.max(1) as f32;
        (0..steps.max(1)).map(|_| self.scroll(step)).sum()
    }

    pub fn list(&self) -> &PinnedListLayout<LinearViewport> {
        &self.layout
    }

    pub fn list_mut(&mut self) -> &mut PinnedListLayout<LinearViewport> {
        &mut self.layout
    }

    pub fn viewport(&self) -> &LinearViewport {
        self.layout.viewport()
    }

    /// Pinned positions in stacking order.
    pub fn pinned_positions(&self) -> Vec<usize> {
        self.layout.tracker().positions().collect()
    }

    /// Pinned positions and their spans in stacking order.
    pub fn pinned_spans(&self) -> Vec<(usize, AxisSpan)> {
        self.layout
            .tracker()
            .entries()
            .iter()
            .map(|entry| (entry.position, entry.span))
            .collect()
    }

    /// Span a pinned position is stacked at, if pinned.
    pub fn pinned_span(&self, position: usize) -> Option<AxisSpan> {
        self.layout.tracker().get(position).map(|entry| entry.span)
    }

    /// Span the viewport currently reports for the pinned item at `position`.
    pub fn attached_span_of_pinned(&self, position: usize) -> Option<AxisSpan> {
        let entry = self.layout.tracker().get(position)?;
        let viewport = self.viewport();
        Some(AxisSpan::new(
            viewport.decorated_start(&entry.item),
            viewport.decorated_end(&entry.item),
        ))
    }

    /// Sorted positions of every attached item, pinned or not.
    pub fn attached_positions(&self) -> Vec<usize> {
        let mut positions: Vec<usize> = self
            .viewport()
            .attached_spans()
            .into_iter()
            .map(|(position, _)| position)
            .collect();
        positions.sort_unstable();
        positions
    }

    /// Bounds of the pinned overlays in stacking order.
    pub fn pinned_rects(&self) -> Vec<(usize, Rect)> {
        let config = self.viewport().config();
        self.pinned_spans()
            .into_iter()
            .map(|(position, span)| (position, config.axis.rect(span, config.cross_axis_size)))
            .collect()
    }
}
