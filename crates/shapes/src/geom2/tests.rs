use super::*;
use nalgebra::vector;
use proptest::prelude::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn approx_equality_uses_eps() {
    let a = p(1.0, 2.0);
    assert_eq!(a, a);
    assert_eq!(a, p(1.0 + 0.5 * EPS, 2.0 - 0.5 * EPS));
    assert_ne!(a, p(1.0 + 2.0 * EPS, 2.0));
    assert_ne!(a, p(1.0, 2.0 + 2.0 * EPS));
}

#[test]
fn approx_equality_is_not_transitive() {
    // Each neighbour is within EPS, the endpoints are not.
    let a = p(0.0, 0.0);
    let b = p(0.75 * EPS, 0.0);
    let c = p(1.5 * EPS, 0.0);
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_ne!(a, c);
}

#[test]
fn point_vec2_conversions() {
    let v = vector![3.0, -1.5];
    let q: Point = v.into();
    assert_eq!(q.x(), 3.0);
    assert_eq!(q.y(), -1.5);
    assert_eq!(q.to_vec2(), v);
    assert_eq!(Point::from((3.0, -1.5)), q);
}

#[test]
fn orientation_sign_and_magnitude() {
    // CCW unit right triangle: twice the area is +1.
    let o = orientation(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
    assert!((o - 1.0).abs() < 1e-12);
    let cw = orientation(p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0));
    assert!((cw + 1.0).abs() < 1e-12);
    assert_eq!(orientation(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)), 0.0);
}

#[test]
fn orientation_keeps_rounding_residue_on_decimal_collinear_points() {
    // Collinear on paper; the raw-coordinate expansion does not cancel to zero.
    let o = orientation(p(0.1, 0.1), p(0.2, 0.2), p(0.25, 0.25));
    assert_ne!(o, 0.0);
    assert!(o.abs() < 1e-15);
    assert!(orientation(p(0.1, 0.2), p(0.2, 0.4), p(0.25, 0.5)) < 0.0);
}

#[test]
fn side_of_line_right_left_and_on() {
    let a = p(0.0, 0.0);
    let b = p(1.0, 0.0);
    assert!(side_of_line(p(0.5, -1.0), a, b));
    assert!(!side_of_line(p(0.5, 1.0), a, b));
    // On the line falls on the "not right" side.
    assert!(!side_of_line(p(0.5, 0.0), a, b));
}

#[test]
fn crossing_segments_intersect() {
    assert!(segments_intersect(
        p(0.0, 0.0),
        p(2.0, 2.0),
        p(0.0, 2.0),
        p(2.0, 0.0)
    ));
}

#[test]
fn shared_endpoint_is_not_an_intersection() {
    let shared = p(1.0, 1.0);
    assert!(!segments_intersect(p(0.0, 0.0), shared, shared, p(2.0, 0.0)));
    // T-junction: endpoint on the other segment's interior.
    assert!(!segments_intersect(
        p(0.0, 0.0),
        p(2.0, 0.0),
        p(1.0, 0.0),
        p(1.0, 1.0)
    ));
}

#[test]
fn collinear_overlap_is_not_an_intersection() {
    assert!(!segments_intersect(
        p(0.0, 0.0),
        p(2.0, 0.0),
        p(1.0, 0.0),
        p(3.0, 0.0)
    ));
}

#[test]
fn disjoint_segments_do_not_intersect() {
    // Lines cross, segments do not.
    assert!(!segments_intersect(
        p(0.0, 0.0),
        p(1.0, 1.0),
        p(3.0, 0.0),
        p(2.0, 1.0)
    ));
}

#[test]
fn next_vertex_index_wraps() {
    assert_eq!(next_vertex_index(0, 3), 1);
    assert_eq!(next_vertex_index(1, 3), 2);
    assert_eq!(next_vertex_index(2, 3), 0);
    assert_eq!(next_vertex_index(3, 4), 0);
}

fn coord() -> impl Strategy<Value = f64> {
    -1e3..1e3f64
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

/// Integer-valued points: every product and partial sum is exact in f64.
fn grid_point() -> impl Strategy<Value = Point> {
    (-1000i32..1000, -1000i32..1000).prop_map(|(x, y)| Point::new(x.into(), y.into()))
}

proptest! {
    #[test]
    fn approx_equality_reflexive_and_symmetric(a in point(), b in point()) {
        prop_assert!(a == a);
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn orientation_antisymmetric(a in grid_point(), b in grid_point(), c in grid_point()) {
        prop_assert_eq!(orientation(a, b, c), -orientation(a, c, b));
    }

    #[test]
    fn orientation_antisymmetric_up_to_rounding(a in point(), b in point(), c in point()) {
        let (o1, o2) = (orientation(a, b, c), orientation(a, c, b));
        prop_assert!((o1 + o2).abs() <= 1e-6);
    }

    #[test]
    fn segments_intersect_symmetric(a in point(), b in point(), c in point(), d in point()) {
        prop_assert_eq!(segments_intersect(a, b, c, d), segments_intersect(c, d, a, b));
    }

    #[test]
    fn segments_sharing_an_endpoint_never_intersect(
        a in grid_point(),
        b in grid_point(),
        c in grid_point()
    ) {
        prop_assert!(!segments_intersect(a, b, b, c));
        prop_assert!(!segments_intersect(a, b, a, c));
    }
}
