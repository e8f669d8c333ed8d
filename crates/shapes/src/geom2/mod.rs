//! 2D points and orientation predicates.
//!
//! Purpose
//! - One point type with tolerance-aware equality (`EPS`), shared by every
//!   coordinate comparison in the crate.
//! - Sign-based predicates (orientation, side of line, proper segment crossing)
//!   that the polygon queries are built from.
//!
//! Numerics
//! - Plain `f64`; no adaptive precision. Degenerate (zero) determinants are
//!   classified, never special-cased: see `predicates` for the exact rules.

mod predicates;
mod types;

pub use predicates::{next_vertex_index, orientation, segments_intersect, side_of_line};
pub use types::{Point, EPS};

#[cfg(test)]
mod tests;
