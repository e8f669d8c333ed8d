//! Draw a handful of random shapes and report the scan outcome.
//!
//! Usage:
//!   cargo run -p shapes --example overlap_probe -- [count] [seed]

use shapes::scan::{analyze, Outcome};
use shapes::shape::rand::{draw_trapezoid, draw_triangle, ReplayToken, ShapeCfg};
use shapes::shape::Polygon;

fn main() {
    let mut args = std::env::args().skip(1);
    let count: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(6);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let cfg = ShapeCfg::default();

    let shapes: Vec<Polygon> = (0..count)
        .filter_map(|index| {
            let tok = ReplayToken { seed, index };
            if index % 2 == 0 {
                draw_triangle(cfg, tok).map(Polygon::from)
            } else {
                draw_trapezoid(cfg, tok).map(Polygon::from)
            }
        })
        .collect();

    for (i, s) in shapes.iter().enumerate() {
        println!("{i:>3} {:<9} area={:.3}", s.type_label(), s.area());
    }
    match analyze(&shapes) {
        Outcome::Overlap { first, second } => println!("overlap: {first} and {second}"),
        Outcome::TotalArea(a) => println!("no overlap, total area {a:.3}"),
    }
}
