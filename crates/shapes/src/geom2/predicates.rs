//! Orientation-based predicates.
//!
//! - `orientation`: twice the signed area of a triangle (positive = CCW turn).
//! - `side_of_line`: right/not-right classification against a directed line.
//! - `segments_intersect`: proper crossing of two segments; touching, shared
//!   endpoints, and collinear overlap all count as NOT intersecting.
//! - `next_vertex_index`: cyclic successor used to walk polygon edges.

use super::types::Point;

/// Scale from twice-the-area to signed triangle area.
const HALF: f64 = 0.5;

/// Twice the signed area of the triangle `p1 p2 p3`.
///
/// Sarrus expansion of `[[x1, y1, 1], [x2, y2, 1], [x3, y3, 1]]` over the raw
/// coordinates, summed left to right in a fixed term order. Near-collinear
/// decimal input can leave a rounding residue instead of an exact zero, and
/// callers (triangle validity in particular) see that residue as-is.
#[inline]
pub fn orientation(p1: Point, p2: Point, p3: Point) -> f64 {
    let (x1, y1) = (p1.x(), p1.y());
    let (x2, y2) = (p2.x(), p2.y());
    let (x3, y3) = (p3.x(), p3.y());
    x1 * y2 + y1 * x3 + x2 * y3 - y2 * x3 - y1 * x2 - y3 * x1
}

/// True iff `p` lies strictly to the right of the directed line `a -> b`.
///
/// Points on the line (zero determinant) report `false`, i.e. they share a side
/// with the left half-plane.
#[inline]
pub fn side_of_line(p: Point, a: Point, b: Point) -> bool {
    HALF * orientation(p, a, b) < 0.0
}

/// `p1` and `p2` lie strictly on opposite sides of the line through `a` and `b`.
#[inline]
fn straddles(p1: Point, p2: Point, a: Point, b: Point) -> bool {
    let s1 = HALF * orientation(p1, a, b);
    let s2 = HALF * orientation(p2, a, b);
    s1 * s2 < 0.0
}

/// Proper intersection of segments `p1 p2` and `p3 p4`.
///
/// Each segment must straddle the other's supporting line. A zero product
/// (an endpoint on the other line) is not a crossing, so polygons that only
/// share a vertex or run along a common edge are never reported here.
#[inline]
pub fn segments_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    straddles(p1, p2, p3, p4) && straddles(p3, p4, p1, p2)
}

/// Cyclic successor of vertex `i` in a ring of `n` vertices.
#[inline]
pub fn next_vertex_index(i: usize, n: usize) -> usize {
    debug_assert!(i < n, "vertex index out of range");
    if i + 1 == n {
        0
    } else {
        i + 1
    }
}
