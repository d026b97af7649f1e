use pinlist_ui_graphics::{Rect, Size};

use crate::AxisSpan;

/// Represents the scroll axis of a list.
///
/// The main axis is where items are stacked and where scrolling happens;
/// the cross axis is filled by every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Horizontal main axis.
    /// Main axis: left to right
    /// Cross axis: top to bottom
    Horizontal,

    /// Vertical main axis.
    /// Main axis: top to bottom
    /// Cross axis: left to right
    #[default]
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Extent of `size` along this axis.
    #[inline]
    pub fn main_size(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Extent of `size` across this axis.
    #[inline]
    pub fn cross_size(self, size: Size) -> f32 {
        self.cross_axis().main_size(size)
    }

    /// Builds a size from main and cross extents.
    pub fn size(self, main: f32, cross: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// Maps a main-axis span to a rectangle that fills `cross_size` on the
    /// cross axis.
    pub fn rect(self, span: AxisSpan, cross_size: f32) -> Rect {
        match self {
            Axis::Horizontal => Rect::new(span.start, 0.0, span.extent(), cross_size),
            Axis::Vertical => Rect::new(0.0, span.start, cross_size, span.extent()),
        }
    }

    /// Projects a rectangle onto this axis.
    pub fn span_of(self, rect: Rect) -> AxisSpan {
        match self {
            Axis::Horizontal => AxisSpan::new(rect.x, rect.right()),
            Axis::Vertical => AxisSpan::new(rect.y, rect.bottom()),
        }
    }
}
