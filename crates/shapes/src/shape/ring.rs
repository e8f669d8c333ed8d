//! Boundary logic shared by all variants, over a closed vertex ring.

use crate::geom2::{next_vertex_index, segments_intersect, side_of_line, Point};

/// Edges `(v[i], v[i+1])` including the closing edge back to `v[0]`.
pub(crate) fn edges(vs: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = vs.len();
    (0..n).map(move |i| (vs[i], vs[next_vertex_index(i, n)]))
}

/// O(N·M) scan over edge pairs; stops at the first proper crossing.
pub(crate) fn rings_intersect(a: &[Point], b: &[Point]) -> bool {
    edges(a).any(|(p1, p2)| edges(b).any(|(p3, p4)| segments_intersect(p1, p2, p3, p4)))
}

/// `p` falls on the same side of every edge of `ring`.
///
/// Rings with fewer than three vertices enclose nothing.
pub(crate) fn contains_point(ring: &[Point], p: Point) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut sides = edges(ring).map(|(a, b)| side_of_line(p, a, b));
    match sides.next() {
        Some(first) => sides.all(|s| s == first),
        None => false,
    }
}

/// Some vertex of `inner` lies inside `outer`.
pub(crate) fn any_vertex_inside(inner: &[Point], outer: &[Point]) -> bool {
    inner.iter().any(|&p| contains_point(outer, p))
}

pub(crate) fn validate_vertex_count_and_distinctness(vs: &[Point], required: usize) -> bool {
    vs.len() == required
        && vs
            .iter()
            .enumerate()
            .all(|(i, a)| vs[i + 1..].iter().all(|b| a != b))
}
