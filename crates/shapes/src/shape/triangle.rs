use crate::geom2::{orientation, Point};

use super::{ring, EMPTY_AREA};

/// Three-vertex polygon.
#[derive(Clone, Debug)]
pub struct Triangle {
    vertices: Box<[Point]>,
    area: f64,
}

impl Triangle {
    pub const VERTICES: usize = 3;
    pub const LABEL: &'static str = "Triangle";

    /// Build from any vertex list; a wrong count yields a shape that never validates.
    pub fn new(vertices: Vec<Point>) -> Self {
        let area = match vertices.as_slice() {
            &[p1, p2, p3] => (0.5 * orientation(p1, p2, p3)).abs(),
            _ => EMPTY_AREA,
        };
        Self {
            vertices: vertices.into_boxed_slice(),
            area,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Three distinct vertices that are not collinear (non-zero area).
    pub fn validate_shape(&self) -> bool {
        ring::validate_vertex_count_and_distinctness(&self.vertices, Self::VERTICES)
            && self.area != EMPTY_AREA
    }
}
