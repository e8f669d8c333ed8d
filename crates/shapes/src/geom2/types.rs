//! Point type and the shared coordinate tolerance.

use nalgebra::Vector2;

/// Tolerance for every approximate coordinate comparison.
///
/// Inputs are expected at O(1)..O(1e3) scale; coordinates closer than this are
/// treated as the same value.
pub const EPS: f64 = 1e-4;

/// Immutable point in the plane.
///
/// Equality is approximate: two points are equal iff both coordinate
/// differences are at most `EPS`. This relation is reflexive and symmetric but
/// not transitive (a chain of points each within `EPS` of the next can drift).
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        (other.x - self.x).abs() <= EPS && (other.y - self.y).abs() <= EPS
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vec2()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
