//! Pinned items currently attached as overlays.

use pinlist_ui_layout::AxisSpan;
use smallvec::SmallVec;

use super::range_classifier::VisibleWindow;

/// A pinned item attached by the last pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PinnedEntry<I> {
    /// Position the item is pinned for.
    pub position: usize,
    /// Handle of the attached item.
    pub item: I,
    /// Where the item was stacked along the scroll axis.
    pub span: AxisSpan,
}

impl<I> PinnedEntry<I> {
    /// Extent the item consumes at the leading edge.
    pub fn extent(&self) -> f32 {
        self.span.extent()
    }
}

/// Mapping from pinned position to attached item, in stacking order.
///
/// Keys are a subset of the configured [`PinnedPositionSet`](super::PinnedPositionSet).
/// The tracker is rebuilt from scratch on every layout and scroll pass.
#[derive(Clone, Debug)]
pub struct PinnedOverlayTracker<I> {
    entries: SmallVec<[PinnedEntry<I>; 4]>,
}

impl<I> Default for PinnedOverlayTracker<I> {
    fn default() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }
}

impl<I> PinnedOverlayTracker<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, position: usize) -> bool {
        self.entries.iter().any(|entry| entry.position == position)
    }

    pub fn get(&self, position: usize) -> Option<&PinnedEntry<I>> {
        self.entries.iter().find(|entry| entry.position == position)
    }

    /// Records `item` as pinned for `position`, replacing any previous entry.
    pub(crate) fn insert(&mut self, position: usize, item: I, span: AxisSpan) {
        self.entries.retain(|entry| entry.position != position);
        self.entries.push(PinnedEntry {
            position,
            item,
            span,
        });
    }

    /// Removes every entry, handing them out in stacking order.
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = PinnedEntry<I>> + '_ {
        self.entries.drain(..)
    }

    /// Entries in stacking order.
    pub fn entries(&self) -> &[PinnedEntry<I>] {
        &self.entries
    }

    /// Pinned positions in stacking order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|entry| entry.position)
    }

    /// Sum of the extents of all entries.
    pub fn total_extent(&self) -> f32 {
        self.entries.iter().map(PinnedEntry::extent).sum()
    }

    /// Entries whose position lies outside `window`.
    ///
    /// These are the items that are on screen only because they were forced
    /// into the stack. With no window every entry is outside.
    pub fn entries_outside(
        &self,
        window: Option<VisibleWindow>,
    ) -> impl Iterator<Item = &PinnedEntry<I>> + '_ {
        self.entries
            .iter()
            .filter(move |entry| !window.is_some_and(|window| window.contains(entry.position)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_stacking_order() {
        let mut tracker = PinnedOverlayTracker::new();
        tracker.insert(3, "c", AxisSpan::at(0.0, 40.0));
        tracker.insert(1, "a", AxisSpan::at(40.0, 60.0));

        let positions: Vec<usize> = tracker.positions().collect();
        assert_eq!(positions, vec![3, 1]);
        assert_eq!(tracker.total_extent(), 100.0);
        assert_eq!(tracker.get(1).map(|entry| entry.item), Some("a"));
    }

    #[test]
    fn test_insert_replaces_same_position() {
        let mut tracker = PinnedOverlayTracker::new();
        tracker.insert(1, "old", AxisSpan::at(0.0, 50.0));
        tracker.insert(1, "new", AxisSpan::at(0.0, 80.0));

        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.get(1).map(|entry| entry.item), Some("new"));
        assert_eq!(tracker.total_extent(), 80.0);
    }

    #[test]
    fn test_drain_empties_tracker() {
        let mut tracker = PinnedOverlayTracker::new();
        tracker.insert(1, 10u64, AxisSpan::at(0.0, 100.0));
        tracker.insert(3, 30u64, AxisSpan::at(100.0, 100.0));

        let drained: Vec<u64> = tracker.drain().map(|entry| entry.item).collect();
        assert_eq!(drained, vec![10, 30]);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_entries_outside_window() {
        let mut tracker = PinnedOverlayTracker::new();
        tracker.insert(1, (), AxisSpan::at(0.0, 100.0));
        tracker.insert(3, (), AxisSpan::at(100.0, 100.0));

        let window = VisibleWindow::new(2, 7);
        let outside: Vec<usize> = tracker
            .entries_outside(window)
            .map(|entry| entry.position)
            .collect();
        assert_eq!(outside, vec![1]);
        assert_eq!(tracker.entries_outside(None).count(), 2);
    }
}
