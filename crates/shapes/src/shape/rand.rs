//! Random valid triangles and trapezoids (rejection sampling + replay tokens).
//!
//! Purpose
//! - Deterministic shape generators for property tests and benchmarks.
//! - Every returned shape passes `validate_shape`.
//!
//! Model
//! - Triangle: three uniform points in `[-half_width, half_width]²`, redrawn
//!   until the triangle validates.
//! - Trapezoid: two distinct y levels, a lower base `p1 p2` drawn left to
//!   right and an upper base `p3 p4` drawn right to left, so the traversal is a
//!   simple (convex) quadrilateral.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Trapezoid, Triangle};
use crate::geom2::Point;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ShapeCfg {
    /// Coordinates are drawn from `[-half_width, half_width]`.
    pub half_width: f64,
    /// Give up after this many rejected draws.
    pub max_attempts: usize,
}

impl Default for ShapeCfg {
    fn default() -> Self {
        Self {
            half_width: 10.0,
            max_attempts: 64,
        }
    }
}

impl ShapeCfg {
    fn usable(&self) -> bool {
        self.half_width.is_finite() && self.half_width > 0.0 && self.max_attempts > 0
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

#[inline]
fn coord<R: Rng>(rng: &mut R, half_width: f64) -> f64 {
    rng.gen_range(-half_width..=half_width)
}

/// Draw a valid triangle, or `None` if `cfg` is unusable or every attempt was degenerate.
pub fn random_triangle<R: Rng>(rng: &mut R, cfg: ShapeCfg) -> Option<Triangle> {
    if !cfg.usable() {
        return None;
    }
    let w = cfg.half_width;
    (0..cfg.max_attempts).find_map(|_| {
        let vs = (0..Triangle::VERTICES)
            .map(|_| Point::new(coord(rng, w), coord(rng, w)))
            .collect();
        Some(Triangle::new(vs)).filter(Triangle::validate_shape)
    })
}

/// Draw a valid axis-parallel trapezoid; `None` as for `random_triangle`.
pub fn random_trapezoid<R: Rng>(rng: &mut R, cfg: ShapeCfg) -> Option<Trapezoid> {
    if !cfg.usable() {
        return None;
    }
    let w = cfg.half_width;
    (0..cfg.max_attempts).find_map(|_| {
        let (y_lo, y_hi) = ordered(coord(rng, w), coord(rng, w));
        let (x1, x2) = ordered(coord(rng, w), coord(rng, w));
        let (x4, x3) = ordered(coord(rng, w), coord(rng, w));
        let vs = vec![
            Point::new(x1, y_lo),
            Point::new(x2, y_lo),
            Point::new(x3, y_hi),
            Point::new(x4, y_hi),
        ];
        Some(Trapezoid::new(vs)).filter(Trapezoid::validate_shape)
    })
}

/// Replayable triangle draw.
pub fn draw_triangle(cfg: ShapeCfg, tok: ReplayToken) -> Option<Triangle> {
    random_triangle(&mut tok.to_std_rng(), cfg)
}

/// Replayable trapezoid draw.
pub fn draw_trapezoid(cfg: ShapeCfg, tok: ReplayToken) -> Option<Trapezoid> {
    random_trapezoid(&mut tok.to_std_rng(), cfg)
}

#[inline]
fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
