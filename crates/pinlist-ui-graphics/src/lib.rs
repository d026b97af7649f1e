//! Pure geometry for pinned-list layout
//!
//! This crate contains the geometry primitives shared by the layout
//! contracts and the lazy list foundation.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Rect, Size};
}
