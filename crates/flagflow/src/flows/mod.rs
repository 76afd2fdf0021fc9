//! Deformation flows on flag complexes.
//!
//! Purpose
//! - Eruption flow on a triangle of flags (basis fixing the corners `Q` or the
//!   flag points `P`), bulge and shear flows on a quadrilateral, and the
//!   two-triangle composite eruptions with projective re-normalization.
//! - Every flow is a one-parameter family of diagonal maps conjugated into a
//!   basis read off the *current* geometry, so steps must run in sequence.
//!
//! Invariants
//! - Flows mutate `p`/`d` in place and refresh `l`/`q` before returning.
//! - A flow either completes or leaves the complex untouched: all matrices are
//!   built and checked before the first flag moves.
//!
//! References
//! - Wienhard–Zhang, “Deforming convex real projective structures”, §3.3.
//! - Code cross-refs: `proj::{invert_basis,conjugate_diagonal,transform_four_points}`.

mod composite;
mod eruption;
mod quad;
mod style;

pub use composite::{CompositeEruption, CompositeStyle};
pub use style::{EruptionStyle, QuadStyle};

use crate::error::{FlagError, FlagResult};
use crate::proj::Mat3;

/// Reject transformation matrices with overflowed or NaN entries.
fn ensure_finite(ms: &[Mat3]) -> FlagResult<()> {
    if ms.iter().all(|m| m.iter().all(|x| x.is_finite())) {
        Ok(())
    } else {
        Err(FlagError::DegenerateConfiguration("flow parameter overflows the transformation"))
    }
}
