use crate::geom2::{Point, EPS};

use super::{ring, EMPTY_AREA};

/// Four-vertex polygon with both bases parallel to the x axis.
///
/// Traversal order is `p1 -> p2 -> p3 -> p4 -> p1`: `p1 p2` is one base and
/// `p3 p4` the other. The area formula relies on this layout and is not a
/// general quadrilateral area.
#[derive(Clone, Debug)]
pub struct Trapezoid {
    vertices: Box<[Point]>,
    area: f64,
}

impl Trapezoid {
    pub const VERTICES: usize = 4;
    pub const LABEL: &'static str = "Trapezoid";

    /// Build from any vertex list; a wrong count yields a shape that never validates.
    pub fn new(vertices: Vec<Point>) -> Self {
        let area = match vertices.as_slice() {
            &[p1, p2, p3, p4] => {
                let base_a = (p2.x() - p1.x()).abs();
                let base_b = (p3.x() - p4.x()).abs();
                let height = (p4.y() - p1.y()).abs();
                (base_a + base_b) * height / 2.0
            }
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

    /// Four distinct vertices, horizontal bases, bases on different lines.
    pub fn validate_shape(&self) -> bool {
        ring::validate_vertex_count_and_distinctness(&self.vertices, Self::VERTICES)
            && self.bases_horizontal_and_apart()
    }

    fn bases_horizontal_and_apart(&self) -> bool {
        let &[p1, p2, p3, p4] = &*self.vertices else {
            return false;
        };
        (p1.y() - p2.y()).abs() <= EPS
            && (p3.y() - p4.y()).abs() <= EPS
            && (p1.y() - p3.y()).abs() > EPS
    }
}
