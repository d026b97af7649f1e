//! Lazy list layout with pinned positions.
//!
//! A pinned list renders a normal scrolling sequence of items and keeps a
//! fixed set of absolute positions stacked as overlays on the viewport's
//! leading edge once they are reachable, much like sticky headers whose set
//! is configured rather than derived from content.
//!
//! # Architecture
//!
//! - [`Viewport`] - Capability trait over the underlying virtualized list
//!   engine (measurement, attach/detach, standard layout and scroll)
//! - [`PinnedPositionSet`] - Ordered positions to pin, in stacking order
//! - [`PinnedOverlayTracker`] - Pinned items attached by the last pass
//! - [`RangeClassification`] - Where a pinned position sits relative to the
//!   normal-visible window
//! - [`PinnedLayoutEngine`] - Builds the pinned stack after every pass
//! - [`ScrollCoordinator`] - Wraps delta scrolls so overlays stay consistent
//! - [`VisibleRangeAdjuster`] - Visible-position queries that ignore overlays
//! - [`PinnedListLayout`] - Host facade tying the above together
//! - [`LinearViewport`] - Reference [`Viewport`] with a recycle pool
//!
//! # Example
//!
//! ```rust
//! use pinlist_foundation::lazy::{
//!     LinearViewport, LinearViewportConfig, PinnedListLayout, PinnedPositionSet,
//! };
//!
//! let config = LinearViewportConfig {
//!     viewport_size: 500.0,
//!     cross_axis_size: 320.0,
//!     ..Default::default()
//! };
//! let viewport = LinearViewport::uniform(config, 10, 100.0);
//! let mut list = PinnedListLayout::new(viewport, PinnedPositionSet::new([1, 3]));
//!
//! list.on_layout();
//! assert!(list.tracker().is_empty());
//!
//! let consumed = list.on_scroll_by_delta(250.0);
//! assert_eq!(consumed, 250.0);
//! assert!(list.tracker().contains(1));
//! assert_eq!(list.first_visible_position(), Some(2));
//! ```

mod covered_items;
mod linear_viewport;
mod pinned_layout_engine;
mod pinned_list_layout;
mod pinned_overlay_tracker;
mod pinned_positions;
mod range_classifier;
mod scroll_coordinator;
mod viewport;
mod visible_range;

pub use covered_items::*;
pub use linear_viewport::*;
pub use pinned_layout_engine::*;
pub use pinned_list_layout::*;
pub use pinned_overlay_tracker::*;
pub use pinned_positions::*;
pub use range_classifier::*;
pub use scroll_coordinator::*;
pub use viewport::*;
pub use visible_range::*;
