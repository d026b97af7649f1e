//! Virtualized list layout with pinned leading-edge overlays.
//!
//! The [`lazy`] module holds the pinned-overlay layout engine and the
//! reference [`lazy::LinearViewport`] it can run against.

pub mod lazy;

pub use lazy::*;

pub mod prelude {
    pub use crate::lazy::{
        LinearViewport, LinearViewportConfig, PinnedListLayout, PinnedPositionSet,
        RangeClassification, Viewport, VisibleWindow,
    };
    pub use pinlist_ui_layout::{Axis, AxisSpan};
}
