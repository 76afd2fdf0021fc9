//! Timing of an eruption animation for a tilted triple of flags.
//!
//! Purpose
//! - Reproducible data point for “how long does one full eruption animation
//!   take at the default range?” and how far the triple ratio moves per frame.
//!
//! References
//! - Code: crates/flagflow/src/animation/driver.rs::animate

use std::time::Instant;

use flagflow::api::{animate, circle_flag, AnimationCfg, FlagComplex, Trafo};
use flagflow::prelude::vector;

fn main() {
    let flags = [
        circle_flag(0.0, 0.05),
        circle_flag(2.2, -0.02),
        circle_flag(4.1, 0.03),
    ];
    let base = FlagComplex::from_flags(&flags, &vector![0.0, 0.0, 1.0]).expect("valid flags");
    let ratio = base.get_triple_ratio([0, 1, 2]).expect("triple ratio defined");

    let cfg = AnimationCfg::default();
    let mut fc = base.clone();
    let start = Instant::now();
    let frames = animate(&mut fc, Trafo::Erupt, &cfg, None).expect("positive complex");
    let elapsed = start.elapsed().as_secs_f64() * 1e3;

    let last = fc.get_triple_ratio([0, 1, 2]).expect("triple ratio defined");
    let at_infinity = frames
        .values()
        .filter(|f| f.ps.iter().chain(&f.qs).any(Option::is_none))
        .count();
    println!(
        "frames={} elapsed_ms={:.2} ratio_initial={:.6} ratio_last={:.6} frames_with_points_at_infinity={}",
        frames.len(),
        elapsed,
        ratio,
        last,
        at_infinity
    );
}
