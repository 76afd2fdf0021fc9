//! Projective Geometry Kernel (homogeneous coordinates in RP²).
//!
//! Purpose
//! - Stateless primitives on 3-vectors up to scale: joins, meets, chart
//!   projection, chart rotation, basis changes, and the four-point solver.
//! - Every degeneracy check is relative to the vector norms so that callers
//!   may keep arbitrary homogeneous representatives.
//!
//! Conventions
//! - A point `p` and a line `l` are both `Vector3<f64>`; `p` lies on `l` iff `l·p = 0`.
//! - Projection planes are unit normals; the chart is the affine plane `n·x = 1`.
//!
//! Code cross-refs: `complex::FlagComplex`, `flows`.

pub(crate) mod cfg;
mod frame;
mod kernel;
mod rotation;

pub use frame::{transform_four_points, REFERENCE_FRAME};
pub use kernel::{
    conjugate_diagonal, connecting_line, invert_basis, line_intersection, project_point,
    same_projective_point,
};
pub use rotation::rotate_vectors;

use nalgebra::{Matrix3, Vector3};

/// Homogeneous point or line coordinates.
pub type Vec3 = Vector3<f64>;
/// Linear map of homogeneous coordinates.
pub type Mat3 = Matrix3<f64>;

#[cfg(test)]
mod tests;
