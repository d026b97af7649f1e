//! Delta scrolling that keeps the pinned stack consistent with moved content.

use super::covered_items::find_covered_items;
use super::pinned_layout_engine::{PinnedLayoutEngine, PinnedLayoutSession};
use super::pinned_positions::PinnedPositionSet;
use super::viewport::Viewport;
use super::visible_range::VisibleRangeAdjuster;

/// Wraps the viewport's delta scroll with pinned-overlay bookkeeping.
///
/// Per call:
/// 1. Compute the normal-visible window
/// 2. Detach every pinned overlay (full teardown, no reconciliation)
/// 3. Detach normal items covered by the previous pass's pinned extent
/// 4. Let the viewport scroll
/// 5. Rebuild the pinned stack against the post-scroll window
/// 6. Report the viewport's consumed distance unchanged
pub struct ScrollCoordinator<'a> {
    engine: PinnedLayoutEngine<'a>,
}

impl<'a> ScrollCoordinator<'a> {
    pub fn new(positions: &'a PinnedPositionSet) -> Self {
        Self {
            engine: PinnedLayoutEngine::new(positions),
        }
    }

    /// Scrolls by `delta` and returns the distance the viewport consumed.
    pub fn scroll_by<V: Viewport>(
        &self,
        session: &mut PinnedLayoutSession<V::Item>,
        viewport: &mut V,
        delta: f32,
    ) -> f32 {
        let window = VisibleRangeAdjuster::new(&*viewport, session.tracker()).window();

        session.release_overlays(viewport);

        // Coverage uses the extent of the stack that was just torn down.
        let covered = find_covered_items(&*viewport, window, session.leading_space_used());
        if !covered.is_empty() {
            log::debug!(
                "scroll {}: evicting {} items covered by {} of pinned space",
                delta,
                covered.len(),
                session.leading_space_used()
            );
        }
        for item in &covered {
            viewport.detach(item);
        }

        let consumed = viewport.scroll_by(delta);

        self.engine.run(session, viewport);
        consumed
    }
}

#[cfg(test)]
mod tests {
    use super::super::linear_viewport::{LinearViewport, LinearViewportConfig};
    use super::*;

    fn create_viewport() -> LinearViewport {
        let config = LinearViewportConfig {
            viewport_size: 500.0,
            cross_axis_size: 320.0,
            ..Default::default()
        };
        let mut viewport = LinearViewport::uniform(config, 10, 100.0);
        viewport.layout_children();
        viewport
    }

    #[test]
    fn test_scroll_reports_viewport_distance() {
        let positions = PinnedPositionSet::new([1, 3]);
        let coordinator = ScrollCoordinator::new(&positions);
        let mut viewport = create_viewport();
        let mut session = PinnedLayoutSession::new();

        assert_eq!(coordinator.scroll_by(&mut session, &mut viewport, 250.0), 250.0);
        assert_eq!(coordinator.scroll_by(&mut session, &mut viewport, 1000.0), 250.0);
        assert_eq!(coordinator.scroll_by(&mut session, &mut viewport, -2000.0), -500.0);
        assert_eq!(coordinator.scroll_by(&mut session, &mut viewport, -10.0), 0.0);
    }

    #[test]
    fn test_scroll_rebuilds_stack() {
        let positions = PinnedPositionSet::new([1, 3]);
        let coordinator = ScrollCoordinator::new(&positions);
        let mut viewport = create_viewport();
        let mut session = PinnedLayoutSession::new();

        coordinator.scroll_by(&mut session, &mut viewport, 250.0);
        let pinned: Vec<usize> = session.tracker().positions().collect();
        assert_eq!(pinned, vec![1, 3]);
        assert_eq!(session.leading_space_used(), 200.0);

        coordinator.scroll_by(&mut session, &mut viewport, -250.0);
        assert!(session.tracker().is_empty());
        assert_eq!(session.leading_space_used(), 0.0);
    }

    #[test]
    fn test_scroll_evicts_items_under_previous_stack() {
        let positions = PinnedPositionSet::new([1, 3]);
        let coordinator = ScrollCoordinator::new(&positions);
        let mut viewport = create_viewport();
        let mut session = PinnedLayoutSession::new();
        coordinator.scroll_by(&mut session, &mut viewport, 250.0);
        let created = viewport.stats().created;

        // Item 2 (-50..50) ends under the 200px stack and is evicted before
        // the scroll; the viewport refills it from the pool afterwards.
        coordinator.scroll_by(&mut session, &mut viewport, 10.0);

        assert_eq!(viewport.stats().created, created);
        let mut positions: Vec<usize> = viewport
            .attached_spans()
            .into_iter()
            .map(|(position, _)| position)
            .collect();
        positions.sort_unstable();
        assert_eq!(positions, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_zero_delta_still_rebuilds() {
        let positions = PinnedPositionSet::new([0]);
        let coordinator = ScrollCoordinator::new(&positions);
        let mut viewport = create_viewport();
        let mut session = PinnedLayoutSession::new();
        coordinator.scroll_by(&mut session, &mut viewport, 150.0);
        let before: Vec<usize> = session.tracker().positions().collect();

        assert_eq!(coordinator.scroll_by(&mut session, &mut viewport, 0.0), 0.0);

        let after: Vec<usize> = session.tracker().positions().collect();
        assert_eq!(before, after);
        assert_eq!(session.passes(), 2);
    }
}
