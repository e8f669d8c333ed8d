//! Closed polygon type over the two supported variants.
//!
//! Purpose
//! - `Polygon` is a sum type over `Triangle` and `Trapezoid`; every query is a
//!   `match` over the tag, with the boundary logic shared in `ring`.
//! - Vertices and area are fixed at construction. Validity is recomputed on
//!   each `validate_shape` call and never cached.
//!
//! Assumptions
//! - Containment uses the consistent-side test, which is only meaningful for
//!   convex, simple rings (all supported shapes when valid). Concave or
//!   self-intersecting input can be misclassified.
//! - Boundary contact (shared vertices, collinear edges) is not an
//!   intersection; see `geom2::segments_intersect`.

pub mod factory;
pub mod rand;
mod ring;
mod trapezoid;
mod triangle;

use crate::geom2::Point;

pub use trapezoid::Trapezoid;
pub use triangle::Triangle;

/// Area of a shape whose vertex count does not match its variant.
pub const EMPTY_AREA: f64 = 0.0;

/// Shape discriminator, including the sentinel for unknown type flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Triangle,
    Trapezoid,
    Invalid,
}

const TRIANGLE_FLAG: char = 'T';
const TRAPEZOID_FLAG: char = 't';

impl ShapeKind {
    /// Map a single-character type flag to a kind (`Invalid` if unknown).
    pub fn from_flag(flag: char) -> Self {
        match flag {
            TRIANGLE_FLAG => ShapeKind::Triangle,
            TRAPEZOID_FLAG => ShapeKind::Trapezoid,
            _ => ShapeKind::Invalid,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Triangle => Triangle::LABEL,
            ShapeKind::Trapezoid => Trapezoid::LABEL,
            ShapeKind::Invalid => "Invalid",
        }
    }
}

/// Receiver for `Polygon::render`: gets the kind and the ordered vertices.
///
/// Formatting is entirely up to the implementor.
pub trait ShapeSink {
    fn shape(&mut self, kind: ShapeKind, vertices: &[Point]);
}

impl<S: ShapeSink + ?Sized> ShapeSink for &mut S {
    fn shape(&mut self, kind: ShapeKind, vertices: &[Point]) {
        (**self).shape(kind, vertices)
    }
}

/// A triangle or trapezoid with immutable vertices and precomputed area.
#[derive(Clone, Debug)]
pub enum Polygon {
    Triangle(Triangle),
    Trapezoid(Trapezoid),
}

impl Polygon {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Polygon::Triangle(_) => ShapeKind::Triangle,
            Polygon::Trapezoid(_) => ShapeKind::Trapezoid,
        }
    }

    /// Human-readable type label ("Triangle" / "Trapezoid").
    pub fn type_label(&self) -> &'static str {
        self.kind().label()
    }

    /// Boundary in traversal order; vertex `i` connects to `i+1`, the last to the first.
    pub fn vertices(&self) -> &[Point] {
        match self {
            Polygon::Triangle(t) => t.vertices(),
            Polygon::Trapezoid(t) => t.vertices(),
        }
    }

    /// Area computed at construction (`EMPTY_AREA` if the vertex count was wrong).
    pub fn area(&self) -> f64 {
        match self {
            Polygon::Triangle(t) => t.area(),
            Polygon::Trapezoid(t) => t.area(),
        }
    }

    /// Variant-specific validity; the driver must discard shapes that fail it.
    pub fn validate_shape(&self) -> bool {
        match self {
            Polygon::Triangle(t) => t.validate_shape(),
            Polygon::Trapezoid(t) => t.validate_shape(),
        }
    }

    /// Exact vertex count and pairwise (approximate) distinct vertices.
    pub fn validate_vertex_count_and_distinctness(&self, required: usize) -> bool {
        ring::validate_vertex_count_and_distinctness(self.vertices(), required)
    }

    /// Some edge of `self` properly crosses some edge of `other`.
    pub fn intersects(&self, other: &Polygon) -> bool {
        ring::rings_intersect(self.vertices(), other.vertices())
    }

    /// Some vertex of either shape lies strictly inside the other.
    pub fn is_subset_of_or_superset_of(&self, other: &Polygon) -> bool {
        ring::any_vertex_inside(self.vertices(), other.vertices())
            || ring::any_vertex_inside(other.vertices(), self.vertices())
    }

    /// Consistent-side containment test for a single point.
    pub fn contains_point(&self, p: Point) -> bool {
        ring::contains_point(self.vertices(), p)
    }

    /// Pair predicate used by the scan: crossing edges or nested vertices.
    pub fn overlaps(&self, other: &Polygon) -> bool {
        self.intersects(other) || self.is_subset_of_or_superset_of(other)
    }

    /// Hand the ordered vertices to an external formatter.
    pub fn render<S: ShapeSink>(&self, mut sink: S) {
        sink.shape(self.kind(), self.vertices());
    }

    /// Iterator over the closed boundary's edges.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        ring::edges(self.vertices())
    }
}

impl From<Triangle> for Polygon {
    fn from(t: Triangle) -> Self {
        Polygon::Triangle(t)
    }
}

impl From<Trapezoid> for Polygon {
    fn from(t: Trapezoid) -> Self {
        Polygon::Trapezoid(t)
    }
}
