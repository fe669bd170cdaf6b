use super::*;

fn view() -> Rect {
    viewport_at(0.0, 1000.0, 800.0)
}

#[test]
fn overlapping_element_intersects() {
    let el = Rect::new(0.0, 700.0, 100.0, 900.0);
    assert!(intersects(el, view(), 0.0));
}

#[test]
fn element_below_fold_does_not() {
    let el = Rect::new(0.0, 900.0, 100.0, 1000.0);
    assert!(!intersects(el, view(), 0.0));
}

#[test]
fn touching_edge_does_not_count() {
    let el = Rect::new(0.0, 800.0, 100.0, 900.0);
    assert!(!intersects(el, view(), 0.0));
}

#[test]
fn negative_margin_requires_deeper_entry() {
    let el = Rect::new(200.0, 750.0, 300.0, 850.0);
    assert!(intersects(el, view(), 0.0));
    assert!(!intersects(el, view(), -100.0));
    assert!(intersects(el, viewport_at(100.0, 1000.0, 800.0), -100.0));
}

#[test]
fn negative_margin_insets_the_sides_too() {
    let left_edge = Rect::new(0.0, 300.0, 100.0, 400.0);
    assert!(intersects(left_edge, view(), 0.0));
    assert!(!intersects(left_edge, view(), -100.0));

    let right_edge = Rect::new(920.0, 300.0, 1000.0, 400.0);
    assert!(!intersects(right_edge, view(), -100.0));
    assert!(intersects(right_edge, view(), -50.0));
}

#[test]
fn positive_margin_pre_triggers() {
    let el = Rect::new(0.0, 850.0, 100.0, 900.0);
    assert!(!intersects(el, view(), 0.0));
    assert!(intersects(el, view(), 100.0));
}

#[test]
fn zero_height_element_inside_viewport_intersects() {
    let inside = Rect::new(0.0, 400.0, 100.0, 400.0);
    let below = Rect::new(0.0, 900.0, 100.0, 900.0);
    assert!(intersects(inside, view(), 0.0));
    assert!(!intersects(below, view(), 0.0));
}

#[test]
fn margin_larger_than_viewport_never_intersects() {
    let el = Rect::new(0.0, 0.0, 1000.0, 800.0);
    assert!(!intersects(el, view(), -500.0));
}
