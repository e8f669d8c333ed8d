//! Overlap and area queries for small convex polygons (triangles, trapezoids).
//!
//! Layout
//! - `geom2`: points with tolerance-aware equality and the orientation predicates.
//! - `shape`: the closed `Polygon` type, its two variants, and the factory.
//! - `scan`: pairwise overlap search and area totals over a collection.
//!
//! The crate performs no I/O; parsing and formatting live in the `cli` crate.

pub mod geom2;
pub mod scan;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Point, EPS};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        next_vertex_index, orientation, segments_intersect, side_of_line, Point, EPS,
    };
    pub use crate::scan::{analyze, first_overlapping_pair, total_area, Outcome};
    pub use crate::shape::factory::{classify, construct};
    pub use crate::shape::rand::{random_trapezoid, random_triangle};
    pub use crate::shape::{Polygon, ShapeKind, ShapeSink, Trapezoid, Triangle, EMPTY_AREA};
}
