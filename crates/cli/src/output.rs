//! Text and JSON rendering of a scan outcome.

use serde::Serialize;
use shapes::geom2::Point;
use shapes::scan::Outcome;
use shapes::shape::{Polygon, ShapeKind, ShapeSink};

/// Writes `<Label>: (x1, y1) (x2, y2) ...` lines with fixed precision.
pub struct TextSink {
    precision: usize,
    buf: String,
}

impl TextSink {
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            buf: String::new(),
        }
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl ShapeSink for TextSink {
    fn shape(&mut self, kind: ShapeKind, vertices: &[Point]) {
        let p = self.precision;
        self.buf.push_str(kind.label());
        self.buf.push(':');
        for v in vertices {
            self.buf.push_str(&format!(" ({:.p$}, {:.p$})", v.x(), v.y()));
        }
        self.buf.push('\n');
    }
}

pub const INTERSECT_LINE: &str = "Shapes intersect";

/// Human-readable report: both overlapping shapes, else the total area.
pub fn text(shapes: &[Polygon], outcome: Outcome, precision: usize) -> String {
    match outcome {
        Outcome::Overlap { first, second } => {
            let mut sink = TextSink::new(precision);
            shapes[first].render(&mut sink);
            shapes[second].render(&mut sink);
            let mut out = sink.into_string();
            out.push_str(INTERSECT_LINE);
            out.push('\n');
            out
        }
        Outcome::TotalArea(area) => format!("Total area: {area:.precision$}\n"),
    }
}

#[derive(Debug, Serialize)]
pub struct ShapeReport {
    pub index: usize,
    pub kind: &'static str,
    pub vertices: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub shapes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap: Option<[ShapeReport; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_area: Option<f64>,
}

/// Collects rendered vertices as `[x, y]` pairs.
#[derive(Default)]
struct PairSink(Vec<(ShapeKind, Vec<[f64; 2]>)>);

impl ShapeSink for PairSink {
    fn shape(&mut self, kind: ShapeKind, vertices: &[Point]) {
        self.0
            .push((kind, vertices.iter().map(|v| [v.x(), v.y()]).collect()));
    }
}

fn shape_report(shapes: &[Polygon], index: usize) -> ShapeReport {
    let mut sink = PairSink::default();
    shapes[index].render(&mut sink);
    let (kind, vertices) = sink.0.pop().unwrap_or((shapes[index].kind(), Vec::new()));
    ShapeReport {
        index,
        kind: kind.label(),
        vertices,
    }
}

pub fn report(shapes: &[Polygon], outcome: Outcome) -> Report {
    match outcome {
        Outcome::Overlap { first, second } => Report {
            shapes: shapes.len(),
            overlap: Some([shape_report(shapes, first), shape_report(shapes, second)]),
            total_area: None,
        },
        Outcome::TotalArea(area) => Report {
            shapes: shapes.len(),
            overlap: None,
            total_area: Some(area),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapes::scan::analyze;
    use shapes::shape::factory::construct;

    fn shape(kind: ShapeKind, coords: &[(f64, f64)]) -> Polygon {
        construct(kind, coords.iter().map(|&c| Point::from(c)).collect()).unwrap()
    }

    fn overlapping() -> Vec<Polygon> {
        vec![
            shape(ShapeKind::Triangle, &[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]),
            shape(
                ShapeKind::Trapezoid,
                &[(1.0, 1.0), (5.0, 1.0), (4.0, 3.0), (2.0, 3.0)],
            ),
        ]
    }

    #[test]
    fn text_renders_overlapping_pair() {
        let shapes = overlapping();
        let out = text(&shapes, analyze(&shapes), 2);
        assert_eq!(
            out,
            "Triangle: (0.00, 0.00) (4.00, 0.00) (0.00, 4.00)\n\
             Trapezoid: (1.00, 1.00) (5.00, 1.00) (4.00, 3.00) (2.00, 3.00)\n\
             Shapes intersect\n"
        );
    }

    #[test]
    fn text_reports_total_area_with_precision() {
        let shapes = vec![shape(
            ShapeKind::Triangle,
            &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)],
        )];
        assert_eq!(text(&shapes, analyze(&shapes), 2), "Total area: 0.50\n");
        assert_eq!(text(&shapes, analyze(&shapes), 0), "Total area: 0\n");
        assert_eq!(text(&[], analyze(&[]), 3), "Total area: 0.000\n");
    }

    #[test]
    fn json_report_shapes() {
        let shapes = overlapping();
        let v = serde_json::to_value(report(&shapes, analyze(&shapes))).unwrap();
        assert_eq!(v["shapes"], 2);
        assert_eq!(v["overlap"][1]["kind"], "Trapezoid");
        assert_eq!(v["overlap"][1]["index"], 1);
        assert_eq!(v["overlap"][0]["vertices"][1], serde_json::json!([4.0, 0.0]));
        assert!(v.get("total_area").is_none());

        let single = &shapes[..1];
        let v = serde_json::to_value(report(single, analyze(single))).unwrap();
        assert_eq!(v["total_area"], 8.0);
        assert!(v.get("overlap").is_none());
    }
}
