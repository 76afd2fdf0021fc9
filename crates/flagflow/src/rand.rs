//! Random positive flag complexes (tangent flags of a jittered circle).
//!
//! Purpose
//! - Deterministic, replayable inputs for property tests and benchmarks.
//!
//! Model
//! - `n` sorted angles on the unit circle of the chart `z = 1`, with bounded
//!   angular jitter. Each flag point sits on the circle; its direction point is
//!   one step along the tangent, rotated by a small tilt. Without tilt every
//!   triple ratio equals 1; small tilts keep the complex positive.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::vector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::complex::FlagComplex;
use crate::error::FlagResult;
use crate::proj::Vec3;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ConicCfg {
    pub flags: usize,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.4].
    pub angle_jitter_frac: f64,
    /// Maximum tilt of the flag lines away from the tangent, in radians.
    pub max_tilt: f64,
}

impl Default for ConicCfg {
    fn default() -> Self {
        Self {
            flags: 4,
            angle_jitter_frac: 0.3,
            max_tilt: 0.05,
        }
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
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
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

/// Flag at angle `theta` on the unit circle whose line is the tangent rotated by `tilt`.
pub fn circle_flag(theta: f64, tilt: f64) -> (Vec3, Vec3) {
    let p = vector![theta.cos(), theta.sin(), 1.0];
    let dir = theta + std::f64::consts::FRAC_PI_2 + tilt;
    let d = vector![p.x + dir.cos(), p.y + dir.sin(), 1.0];
    (p, d)
}

/// Complex of exact tangent flags at the given angles, chart normal `[0,0,1]`.
pub fn conic_complex(angles: &[f64]) -> FlagResult<FlagComplex> {
    let flags: Vec<_> = angles.iter().map(|&a| circle_flag(a, 0.0)).collect();
    FlagComplex::from_flags(&flags, &vector![0.0, 0.0, 1.0])
}

/// Draw a random complex; positive for `max_tilt` well below the angular gaps.
pub fn draw_positive_complex(cfg: ConicCfg, tok: ReplayToken) -> FlagResult<FlagComplex> {
    let mut rng = tok.to_std_rng();
    let n = cfg.flags.max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.4);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let flags: Vec<_> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let tilt = (rng.gen::<f64>() * 2.0 - 1.0) * cfg.max_tilt.abs();
            circle_flag(phase + (k as f64) * delta + jitter, tilt)
        })
        .collect();
    FlagComplex::from_flags(&flags, &vector![0.0, 0.0, 1.0])
}
