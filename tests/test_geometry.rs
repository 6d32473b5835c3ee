use approx::assert_relative_eq;
use fly_rush::geometry::Rect;

// ── Construction & edges ──────────────────────────────────────────────────────

#[test]
fn from_center_places_top_left() {
    let r = Rect::from_center((50.0, 50.0), 20.0, 10.0);
    assert_eq!(r.x, 40.0);
    assert_eq!(r.y, 45.0);
    assert_eq!(r.center(), (50.0, 50.0));
}

#[test]
fn edge_setters_move_without_resizing() {
    let mut r = Rect::new(0.0, 0.0, 10.0, 20.0);
    r.set_right(100.0);
    assert_eq!(r.left(), 90.0);
    r.set_bottom(50.0);
    assert_eq!(r.top(), 30.0);
    r.set_center_y(0.0);
    assert_eq!(r.top(), -10.0);
    assert_eq!((r.w, r.h), (10.0, 20.0));
}

// ── Intersection ──────────────────────────────────────────────────────────────

#[test]
fn overlapping_rects_intersect() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn shared_edge_is_not_a_collision() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let right = Rect::new(10.0, 0.0, 10.0, 10.0);
    let below = Rect::new(0.0, 10.0, 10.0, 10.0);
    assert!(!a.intersects(&right));
    assert!(!a.intersects(&below));
}

#[test]
fn contained_rect_intersects() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
    assert!(outer.intersects(&inner));
}

// ── Derived rectangles ────────────────────────────────────────────────────────

#[test]
fn scaled_keeps_center() {
    let r = Rect::new(10.0, 20.0, 40.0, 40.0);
    let s = r.scaled(0.5, 0.25);
    assert_eq!(s.center(), r.center());
    assert_eq!((s.w, s.h), (20.0, 10.0));
}

#[test]
fn inflated_negative_shrinks_and_never_goes_below_zero() {
    let r = Rect::new(0.0, 0.0, 32.0, 12.0);
    let s = r.inflated(-10.0, -5.0);
    assert_eq!((s.w, s.h), (22.0, 7.0));
    assert_eq!(s.center(), r.center());

    let gone = r.inflated(-100.0, -100.0);
    assert_eq!((gone.w, gone.h), (0.0, 0.0));
}

#[test]
fn rotated_bounds_quarter_turn_swaps_sides() {
    let r = Rect::from_center((100.0, 100.0), 40.0, 20.0);
    let q = r.rotated_bounds(90.0);
    assert_relative_eq!(q.w, 20.0, epsilon = 1e-3);
    assert_relative_eq!(q.h, 40.0, epsilon = 1e-3);
    assert_eq!(q.center(), r.center());
}

#[test]
fn rotated_bounds_grow_at_45_degrees() {
    let r = Rect::from_center((0.0, 0.0), 44.0, 44.0);
    let d = r.rotated_bounds(45.0);
    let expected = 44.0 * std::f32::consts::SQRT_2;
    assert_relative_eq!(d.w, expected, epsilon = 1e-3);
    assert_relative_eq!(d.h, expected, epsilon = 1e-3);
}
