//! Four-point projective normalization.
//!
//! Any four points in general position can be mapped onto any other four by a
//! unique projective transformation. We route both lists through the fixed
//! reference frame `REFERENCE_FRAME` and compose.

use super::cfg::DEPENDENT_EPS;
use super::kernel::relative_det;
use super::{Mat3, Vec3};
use crate::error::{FlagError, FlagResult};

/// `[1,0,1], [-1,0,1], [0,1,1], [0,1,0]`: the unit circle's points at angles
/// 0, π, π/2 and the point at infinity of its tangent lines at 0 and π.
pub const REFERENCE_FRAME: [[f64; 3]; 4] = [
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [0.0, 1.0, 0.0],
];

const TRIPLES: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];

fn reference_points() -> [Vec3; 4] {
    REFERENCE_FRAME.map(|[x, y, z]| Vec3::new(x, y, z))
}

fn ensure_general_position(points: &[Vec3; 4], frame: usize) -> FlagResult<()> {
    for triple in TRIPLES {
        let [i, j, k] = triple;
        if relative_det(&points[i], &points[j], &points[k]).abs() <= DEPENDENT_EPS {
            return Err(FlagError::Collinear { frame, triple });
        }
    }
    Ok(())
}

/// Matrix sending `e₀, e₁, e₂, (1,1,1)` to multiples of `points[0..4]`.
fn from_standard(points: &[Vec3; 4], frame: usize) -> FlagResult<Mat3> {
    ensure_general_position(points, frame)?;
    let m = Mat3::from_columns(&[points[0], points[1], points[2]]);
    let scales = m
        .lu()
        .solve(&points[3])
        .ok_or(FlagError::Collinear {
            frame,
            triple: [0, 1, 2],
        })?;
    Ok(m * Mat3::from_diagonal(&scales))
}

/// Matrix sending multiples of `points[i]` to multiples of `REFERENCE_FRAME[i]`.
fn to_reference(points: &[Vec3; 4], frame: usize) -> FlagResult<Mat3> {
    let reference = from_standard(&reference_points(), frame)?;
    let inverse = from_standard(points, frame)?
        .try_inverse()
        .ok_or(FlagError::DegenerateConfiguration("four-point frame is not invertible"))?;
    Ok(reference * inverse)
}

/// Projective transformation `T` with `T·points[i] ∝ other_points[i]` for all `i`.
///
/// Unique up to scale. Fails with `Collinear` (frame 0 for `points`, frame 1
/// for `other_points`) if three points of either list lie on one line.
pub fn transform_four_points(points: &[Vec3; 4], other_points: &[Vec3; 4]) -> FlagResult<Mat3> {
    let source = to_reference(points, 0)?;
    let target = to_reference(other_points, 1)?
        .try_inverse()
        .ok_or(FlagError::DegenerateConfiguration("four-point frame is not invertible"))?;
    Ok(target * source)
}
