use crate::{Axis, AxisSpan};
use pinlist_ui_graphics::{Rect, Size};

#[test]
fn vertical_span_fills_width() {
    let rect = Axis::Vertical.rect(AxisSpan::at(100.0, 50.0), 320.0);
    assert_eq!(rect, Rect::new(0.0, 100.0, 320.0, 50.0));
    assert_eq!(Axis::Vertical.span_of(rect), AxisSpan::new(100.0, 150.0));
}

#[test]
fn horizontal_span_fills_height() {
    let rect = Axis::Horizontal.rect(AxisSpan::at(-20.0, 80.0), 48.0);
    assert_eq!(rect, Rect::new(-20.0, 0.0, 80.0, 48.0));
    assert_eq!(Axis::Horizontal.main_size(rect.size()), 80.0);
    assert_eq!(Axis::Horizontal.cross_size(rect.size()), 48.0);
}

#[test]
fn size_round_trips_through_axis() {
    let size = Axis::Horizontal.size(30.0, 10.0);
    assert_eq!(size, Size::new(30.0, 10.0));
    assert_eq!(Axis::Vertical.size(30.0, 10.0), Size::new(10.0, 30.0));
}

#[test]
fn span_viewport_checks() {
    let partially_scrolled = AxisSpan::new(-50.0, 50.0);
    assert!(partially_scrolled.intersects_viewport(500.0));
    assert!(!partially_scrolled.is_within_viewport(500.0));

    let gone = AxisSpan::new(-100.0, 0.0);
    assert!(!gone.intersects_viewport(500.0));

    let flush = AxisSpan::new(400.0, 500.0);
    assert!(flush.is_within_viewport(500.0));
    assert_eq!(flush.offset(-25.0), AxisSpan::new(375.0, 475.0));
}
