//! Layout contracts for pinned-list layout

mod axis;
mod span;

#[cfg(test)]
mod tests;

pub use axis::*;
pub use span::*;

pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::span::AxisSpan;
}
