//! Line-oriented shape input.
//!
//! Each non-empty line is `<flag> <x1> <y1> <x2> <y2> ...`, tab separated (any
//! whitespace is accepted). `T` is a triangle, `t` a trapezoid. The first bad
//! line aborts parsing.

use shapes::geom2::Point;
use shapes::shape::factory::{classify, construct};
use shapes::shape::{Polygon, ShapeKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("ERROR: Invalid Shape Type.")]
    InvalidShapeType { line: usize },
    #[error("ERROR: Illegal {label}")]
    IllegalShape { line: usize, label: &'static str },
    #[error("line {line}: `{token}` is not a finite coordinate")]
    BadCoordinate { line: usize, token: String },
    #[error("line {line}: odd number of coordinates ({count})")]
    OddCoordinateCount { line: usize, count: usize },
}

impl InputError {
    /// 1-based line number the error refers to.
    pub fn line(&self) -> usize {
        match *self {
            InputError::InvalidShapeType { line }
            | InputError::IllegalShape { line, .. }
            | InputError::BadCoordinate { line, .. }
            | InputError::OddCoordinateCount { line, .. } => line,
        }
    }
}

fn flag_kind(token: &str) -> ShapeKind {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => classify(c),
        _ => ShapeKind::Invalid,
    }
}

/// Parse one non-empty line into a validated shape.
pub fn parse_line(line: usize, text: &str) -> Result<Polygon, InputError> {
    let mut tokens = text.split_whitespace();
    let kind = tokens.next().map_or(ShapeKind::Invalid, flag_kind);
    if kind == ShapeKind::Invalid {
        return Err(InputError::InvalidShapeType { line });
    }

    let coords = tokens
        .map(|token| match token.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(InputError::BadCoordinate {
                line,
                token: token.to_string(),
            }),
        })
        .collect::<Result<Vec<f64>, _>>()?;
    if coords.len() % 2 != 0 {
        return Err(InputError::OddCoordinateCount {
            line,
            count: coords.len(),
        });
    }
    let points: Vec<Point> = coords
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect();

    let shape = construct(kind, points).ok_or(InputError::InvalidShapeType { line })?;
    if !shape.validate_shape() {
        tracing::info!(line, kind = shape.type_label(), "rejected shape");
        return Err(InputError::IllegalShape {
            line,
            label: shape.type_label(),
        });
    }
    tracing::debug!(line, kind = shape.type_label(), area = shape.area(), "shape");
    Ok(shape)
}

/// Parse every non-empty line; stops at the first invalid one.
pub fn parse_shapes(text: &str) -> Result<Vec<Polygon>, InputError> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| parse_line(i + 1, l))
        .collect()
}
