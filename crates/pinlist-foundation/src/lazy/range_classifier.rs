//! Classification of pinned positions against the normal-visible window.

/// First and last visible positions among normal-flow items.
///
/// Normal-flow items are the attached items that are not presented as pinned
/// overlays. An empty window is represented as `Option::<VisibleWindow>::None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleWindow {
    first: usize,
    last: usize,
}

impl VisibleWindow {
    /// Creates a window, or `None` when `first > last`.
    pub fn new(first: usize, last: usize) -> Option<Self> {
        (first <= last).then_some(Self { first, last })
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn last(&self) -> usize {
        self.last
    }

    pub fn contains(&self, position: usize) -> bool {
        self.first <= position && position <= self.last
    }

    /// Number of positions covered by the window.
    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }
}

/// Where a position sits relative to the normal-visible window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeClassification {
    /// Inside `[first, last]`.
    In,
    /// Before `first`: scrolled past the leading edge.
    OutAbove,
    /// After `last`: not reached yet.
    OutBelow,
}

impl RangeClassification {
    /// Classifies `position` against `[first, last]`.
    ///
    /// `first > last` is the empty window: nothing is visible yet, so every
    /// position is `OutBelow`.
    pub fn classify(position: usize, first: usize, last: usize) -> Self {
        if first > last {
            RangeClassification::OutBelow
        } else if position < first {
            RangeClassification::OutAbove
        } else if position > last {
            RangeClassification::OutBelow
        } else {
            RangeClassification::In
        }
    }

    /// Classifies `position` against a possibly empty window.
    ///
    /// An empty window means nothing can be pinned yet, so everything is
    /// `OutBelow`.
    pub fn classify_in(position: usize, window: Option<VisibleWindow>) -> Self {
        match window {
            Some(window) => Self::classify(position, window.first, window.last),
            None => RangeClassification::OutBelow,
        }
    }
}
