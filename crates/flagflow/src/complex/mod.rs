//! Flag complexes in RP² and their derived quantities.
//!
//! Purpose
//! - `FlagComplex` owns the flags `(p[i], d[i])` and keeps the derived lines
//!   `l[i] = p[i] × d[i]` and corner points `q[i] = l[i-1] × l[i]` fresh.
//! - Triangle accessors (middle, outer, inner triangles and the triple ratio)
//!   follow the nomenclature of Wienhard–Zhang, “Deforming convex real
//!   projective structures” (arXiv:1702.00580), Figure 1.
//! - The rendering cache holds `ChartPoint`s for the current projection plane.
//!
//! Code cross-refs: `proj::{connecting_line,line_intersection,project_point,rotate_vectors}`,
//! `flows` (mutators), `animation` (frame sampling).

mod conic;
mod flag_complex;
mod triangles;
mod types;

pub use flag_complex::FlagComplex;
pub use triangles::CANONICAL_TRIANGLE;
pub use types::{ChartPoint, Quad, Triangle};
