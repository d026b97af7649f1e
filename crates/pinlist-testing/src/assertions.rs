//! Assertion utilities for pinned-list tests
//!
//! Helpers for validating pinned overlay state with readable failure
//! messages.

use pinlist_ui_graphics::Rect;
use pinlist_ui_layout::AxisSpan;

use crate::rule::PinnedListTestRule;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a span is approximately equal to another.
pub fn assert_span_approx_eq(actual: AxisSpan, expected: AxisSpan, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.start, expected.start, tolerance, &format!("{} - start", msg));
    assert_approx_eq(actual.end, expected.end, tolerance, &format!("{} - end", msg));
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(actual.width, expected.width, tolerance, &format!("{} - width", msg));
    assert_approx_eq(actual.height, expected.height, tolerance, &format!("{} - height", msg));
}

/// Assert that `position` is pinned starting at `start`, both in the tracker
/// and in the viewport.
pub fn assert_pinned_at(rule: &PinnedListTestRule, position: usize, start: f32) {
    let Some(span) = rule.pinned_span(position) else {
        panic!(
            "position {} should be pinned, pinned positions are {:?}",
            position,
            rule.pinned_positions()
        );
    };
    assert_approx_eq(span.start, start, 0.01, &format!("pinned {} start", position));
    let attached = rule.attached_span_of_pinned(position);
    assert_eq!(
        attached,
        Some(span),
        "pinned {} is laid out at {:?} but tracked at {:?}",
        position,
        attached,
        span
    );
}

/// Assert that `position` is not pinned.
pub fn assert_not_pinned(rule: &PinnedListTestRule, position: usize) {
    assert!(
        !rule.list().tracker().contains(position),
        "position {} should not be pinned, pinned spans are {:?}",
        position,
        rule.pinned_spans()
    );
}

/// Assert that the pinned extents add up to the recorded leading space.
pub fn assert_extent_consistent(rule: &PinnedListTestRule) {
    assert_approx_eq(
        rule.list().tracker().total_extent(),
        rule.list().leading_space_used(),
        0.01,
        "sum of pinned extents",
    );
}
