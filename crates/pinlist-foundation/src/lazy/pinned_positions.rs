//! Configured set of pinned positions.

use smallvec::SmallVec;

/// Inline capacity for pinned positions.
/// Pinned sets are a handful of headers, so 4 avoids a heap allocation in
/// the common case.
pub type SmallPositionVec = SmallVec<[usize; 4]>;

/// Ordered set of absolute item positions that render pinned once reachable.
///
/// Iteration order is stacking order from the leading edge. The set is
/// configured before the first layout and stays fixed while scrolling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PinnedPositionSet {
    positions: SmallPositionVec,
}

impl PinnedPositionSet {
    /// Creates a set from positions in stacking order.
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn new(positions: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Self::default();
        for position in positions {
            if set.contains(position) {
                log::warn!(
                    "PinnedPositionSet: dropping duplicate pinned position {}",
                    position
                );
                continue;
            }
            set.positions.push(position);
        }
        set
    }

    /// Creates an empty set; nothing is ever pinned.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    /// Positions in stacking order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.positions
    }

    /// Positions that can never be produced for a list of `item_count` items.
    pub fn out_of_range(&self, item_count: usize) -> impl Iterator<Item = usize> + '_ {
        self.iter().filter(move |&position| position >= item_count)
    }
}

impl FromIterator<usize> for PinnedPositionSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a PinnedPositionSet {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_stacking_order() {
        let set = PinnedPositionSet::new([3, 1, 7]);
        assert_eq!(set.as_slice(), &[3, 1, 7]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_drops_duplicates_keeping_first() {
        let set: PinnedPositionSet = [1, 3, 1, 5, 3].into_iter().collect();
        assert_eq!(set.as_slice(), &[1, 3, 5]);
    }

    #[test]
    fn test_out_of_range_positions() {
        let set = PinnedPositionSet::new([1, 12, 3, 10]);
        let invalid: Vec<usize> = set.out_of_range(10).collect();
        assert_eq!(invalid, vec![12, 10]);
    }

    #[test]
    fn test_empty_set() {
        let set = PinnedPositionSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains(0));
        assert_eq!((&set).into_iter().count(), 0);
    }
}
