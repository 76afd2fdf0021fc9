//! Animation frames for the deformation flows.
//!
//! Purpose
//! - Drive one flow in small steps and sample the drawn complex after each
//!   step: flag points, corners, the inner triangles of the witness triangles
//!   and optionally a tessellation, all in display coordinates.
//!
//! Loop
//! - Pre-step to `-(range + 1) · t_step`, then `2 · range + 1` steps of
//!   `+t_step`; the frame after step `k` gets key `k - range`.
//! - Pre-flight: projection plane set, enough flags, positive complex.
//!
//! Code cross-refs: `flows`, `complex::FlagComplex::draw_complex`, `tessellate`.

mod driver;
mod types;

pub use driver::{animate, Animation};
pub use types::{AnimationCfg, Frame, Frames, Trafo, TrafoRange, DISPLAY_SCALE};

#[cfg(test)]
mod tests;
