//! Testing utilities and harness for pinned-list layout

pub mod assertions;
pub mod missing_items;
pub mod rule;

pub use missing_items::MissingItemsViewport;
pub use rule::PinnedListTestRule;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::missing_items::MissingItemsViewport;
    pub use crate::rule::PinnedListTestRule;
}
