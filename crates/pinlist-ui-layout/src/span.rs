/// A half-open interval `[start, end)` along a list's main axis.
///
/// Offsets are relative to the viewport's leading edge, so a span with a
/// negative start has been scrolled partly past that edge.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AxisSpan {
    pub start: f32,
    pub end: f32,
}

impl AxisSpan {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Span of `extent` beginning at `start`.
    pub fn at(start: f32, extent: f32) -> Self {
        Self {
            start,
            end: start + extent,
        }
    }

    #[inline]
    pub fn extent(&self) -> f32 {
        self.end - self.start
    }

    pub fn offset(&self, delta: f32) -> Self {
        Self {
            start: self.start + delta,
            end: self.end + delta,
        }
    }

    /// Returns true if any part of the span lies inside `[0, viewport_size)`.
    pub fn intersects_viewport(&self, viewport_size: f32) -> bool {
        self.end > 0.0 && self.start < viewport_size
    }

    /// Returns true if the whole span lies inside `[0, viewport_size]`.
    pub fn is_within_viewport(&self, viewport_size: f32) -> bool {
        self.start >= 0.0 && self.end <= viewport_size
    }
}
