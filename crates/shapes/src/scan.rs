//! Collection-level queries: first overlapping pair, else total area.
//!
//! Pairs are visited as `(i, j)` with `i < j` in input order, so the reported
//! pair is deterministic. Cost is O(K²) pair checks over K shapes.

use crate::shape::{Polygon, EMPTY_AREA};

/// Result of `analyze`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// Indices of the first pair whose boundaries cross or whose vertices nest.
    Overlap { first: usize, second: usize },
    /// No pair overlaps; sum of all areas.
    TotalArea(f64),
}

/// First `(i, j)`, `i < j`, for which `polygons[i].overlaps(&polygons[j])`.
pub fn first_overlapping_pair(polygons: &[Polygon]) -> Option<(usize, usize)> {
    polygons.iter().enumerate().find_map(|(i, a)| {
        polygons[i + 1..]
            .iter()
            .position(|b| a.overlaps(b))
            .map(|k| (i, i + 1 + k))
    })
}

/// Sum of areas, starting from `EMPTY_AREA`.
pub fn total_area(polygons: &[Polygon]) -> f64 {
    polygons.iter().fold(EMPTY_AREA, |acc, p| acc + p.area())
}

/// Report the first overlapping pair if any, otherwise the total area.
pub fn analyze(polygons: &[Polygon]) -> Outcome {
    match first_overlapping_pair(polygons) {
        Some((first, second)) => Outcome::Overlap { first, second },
        None => Outcome::TotalArea(total_area(polygons)),
    }
}
