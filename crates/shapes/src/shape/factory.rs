//! Type-flag lookup and construction of the matching variant.

use crate::geom2::Point;

use super::{Polygon, ShapeKind, Trapezoid, Triangle};

/// `'T'` → Triangle, `'t'` → Trapezoid, anything else → `Invalid`.
#[inline]
pub fn classify(flag: char) -> ShapeKind {
    ShapeKind::from_flag(flag)
}

/// Construct the variant for `kind`, or `None` for `ShapeKind::Invalid`.
///
/// The vertex count is not checked here: call `Polygon::validate_shape` on the
/// result before using it.
pub fn construct(kind: ShapeKind, vertices: Vec<Point>) -> Option<Polygon> {
    match kind {
        ShapeKind::Triangle => Some(Triangle::new(vertices).into()),
        ShapeKind::Trapezoid => Some(Trapezoid::new(vertices).into()),
        ShapeKind::Invalid => None,
    }
}
