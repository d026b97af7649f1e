//! Detection of normal-flow items hidden under the pinned stack.

use super::range_classifier::VisibleWindow;
use super::viewport::Viewport;

/// Attached items whose trailing edge lies above `leading_space_used`.
///
/// `leading_space_used` is the pinned extent recorded by the previous pass;
/// the caller evicts these items before the scroll so the engine does not keep
/// stale items alive under the overlay. An empty window covers nothing.
pub fn find_covered_items<V: Viewport>(
    viewport: &V,
    window: Option<VisibleWindow>,
    leading_space_used: f32,
) -> Vec<V::Item> {
    if window.is_none() {
        return Vec::new();
    }
    (0..viewport.child_count())
        .filter_map(|index| viewport.child_at(index))
        .filter(|item| viewport.decorated_end(item) < leading_space_used)
        .collect()
}
