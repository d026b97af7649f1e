//! Pinned overlay layout pass.
//!
//! After the viewport finishes a normal layout or scroll, the engine walks the
//! pinned positions in stacking order and stacks every reachable one at the
//! viewport's leading edge:
//!
//! 1. Reset the cursor to the leading edge
//! 2. Classify each pinned position against the normal-visible window
//! 3. `In`: reuse the attached item (or request one) and pin it only once its
//!    start has reached the cursor
//! 4. `OutAbove`: request a fresh item and pin it unconditionally
//! 5. `OutBelow`: leave it alone
//! 6. Record the final cursor as the leading space used

use pinlist_ui_layout::AxisSpan;

use super::pinned_overlay_tracker::PinnedOverlayTracker;
use super::pinned_positions::PinnedPositionSet;
use super::range_classifier::{RangeClassification, VisibleWindow};
use super::viewport::Viewport;
use super::visible_range::{find_attached_by_position, VisibleRangeAdjuster};

/// State of one pinned list between passes.
///
/// Owns the overlay tracker and the leading space the last pass consumed.
/// Only the [`PinnedLayoutEngine`] and the scroll coordinator mutate it.
#[derive(Debug)]
pub struct PinnedLayoutSession<I> {
    tracker: PinnedOverlayTracker<I>,
    leading_space_used: f32,
    passes: u64,
}

impl<I> Default for PinnedLayoutSession<I> {
    fn default() -> Self {
        Self {
            tracker: PinnedOverlayTracker::new(),
            leading_space_used: 0.0,
            passes: 0,
        }
    }
}

impl<I> PinnedLayoutSession<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pinned items attached by the last pass.
    pub fn tracker(&self) -> &PinnedOverlayTracker<I> {
        &self.tracker
    }

    /// Leading-edge space consumed by the last pass.
    ///
    /// Survives [`release_overlays`](Self::release_overlays) so coverage can be
    /// computed against the previous stack right before it is rebuilt.
    pub fn leading_space_used(&self) -> f32 {
        self.leading_space_used
    }

    /// Number of pinned passes run so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Detaches every pinned item and empties the tracker.
    pub fn release_overlays<V>(&mut self, viewport: &mut V)
    where
        V: Viewport<Item = I>,
    {
        for entry in self.tracker.drain() {
            viewport.detach(&entry.item);
        }
    }
}

/// Builds the pinned overlay stack for a configured set of positions.
pub struct PinnedLayoutEngine<'a> {
    positions: &'a PinnedPositionSet,
}

impl<'a> PinnedLayoutEngine<'a> {
    pub fn new(positions: &'a PinnedPositionSet) -> Self {
        Self { positions }
    }

    /// Runs one pinned pass against the viewport's current normal flow.
    ///
    /// A pass always starts from an empty stack: overlays left by the previous
    /// pass are released first. Returns the leading space used.
    pub fn run<V: Viewport>(
        &self,
        session: &mut PinnedLayoutSession<V::Item>,
        viewport: &mut V,
    ) -> f32 {
        session.release_overlays(viewport);
        let window = VisibleRangeAdjuster::new(&*viewport, &session.tracker).window();
        self.run_in_window(session, viewport, window)
    }

    /// Runs one pinned pass against an explicit normal-visible window.
    ///
    /// The tracker must already be empty.
    pub fn run_in_window<V: Viewport>(
        &self,
        session: &mut PinnedLayoutSession<V::Item>,
        viewport: &mut V,
        window: Option<VisibleWindow>,
    ) -> f32 {
        debug_assert!(session.tracker.is_empty());
        let mut cursor = 0.0;

        for position in self.positions {
            match RangeClassification::classify_in(position, window) {
                RangeClassification::In => {
                    let reused = find_attached_by_position(&*viewport, position);
                    let is_fresh = reused.is_none();
                    let Some(item) = reused.or_else(|| viewport.request_item(position)) else {
                        log::trace!("pinned {}: no item available, skipping", position);
                        continue;
                    };
                    let start = viewport.decorated_start(&item);
                    if start <= cursor {
                        let span = pin_at(viewport, &item, cursor);
                        log::trace!("pinned {}: in window, stacked at {:?}", position, span);
                        cursor = span.end;
                        session.tracker.insert(position, item, span);
                    } else {
                        log::trace!(
                            "pinned {}: in window, start {} still below cursor {}",
                            position,
                            start,
                            cursor
                        );
                        if is_fresh {
                            viewport.detach(&item);
                        }
                    }
                }
                RangeClassification::OutAbove => {
                    let Some(item) = viewport.request_item(position) else {
                        log::trace!("pinned {}: no item available, skipping", position);
                        continue;
                    };
                    let span = pin_at(viewport, &item, cursor);
                    log::trace!("pinned {}: scrolled past, forced at {:?}", position, span);
                    cursor = span.end;
                    session.tracker.insert(position, item, span);
                }
                RangeClassification::OutBelow => {}
            }
        }

        session.leading_space_used = cursor;
        session.passes += 1;
        log::debug!(
            "pinned pass {}: window {:?}, {} pinned, leading space {}",
            session.passes,
            window,
            session.tracker.len(),
            cursor
        );
        cursor
    }
}

/// Measures the item and attaches it at `cursor`, returning its span.
fn pin_at<V: Viewport>(viewport: &mut V, item: &V::Item, cursor: f32) -> AxisSpan {
    viewport.measure(item);
    let extent = viewport.decorated_measurement(item);
    let span = AxisSpan::at(cursor, extent);
    viewport.attach(item, span);
    span
}
