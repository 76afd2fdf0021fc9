//! Joins, meets, chart projection, and basis changes.

use super::cfg::{COINCIDENT_EPS, DEPENDENT_EPS, INFINITY_EPS};
use super::{Mat3, Vec3};
use crate::error::{FlagError, FlagResult};

/// Line through the projective points `p` and `q`, as the linear form `p × q`.
///
/// Fails with `CoincidentPoints` when `p` and `q` are scalar multiples of each
/// other (or one of them vanishes), since the join is then undefined.
pub fn connecting_line(p: &Vec3, q: &Vec3) -> FlagResult<Vec3> {
    let l = p.cross(q);
    if l.norm() <= COINCIDENT_EPS * p.norm() * q.norm() || l.norm() == 0.0 {
        return Err(FlagError::CoincidentPoints);
    }
    Ok(l)
}

/// Intersection point of the lines `l` and `m`, as `l × m`.
///
/// Returns the zero vector when both lines coincide.
#[inline]
pub fn line_intersection(l: &Vec3, m: &Vec3) -> Vec3 {
    l.cross(m)
}

/// True iff `p` and `q` are non-zero and represent the same projective point.
pub fn same_projective_point(p: &Vec3, q: &Vec3, tol: f64) -> bool {
    let (np, nq) = (p.norm(), q.norm());
    if np == 0.0 || nq == 0.0 {
        return false;
    }
    p.cross(q).norm() <= tol * np * nq
}

/// Representative of `point` on the affine plane `normal · x = 1`.
///
/// `normal` is expected to be a unit vector. Fails with `AtInfinity` when
/// `point` lies on the plane through the origin parallel to the chart.
pub fn project_point(normal: &Vec3, point: &Vec3) -> FlagResult<Vec3> {
    let s = point.dot(normal);
    if s.abs() <= INFINITY_EPS * point.norm() || !s.is_finite() {
        return Err(FlagError::AtInfinity);
    }
    Ok(point / s)
}

/// Relative determinant `det[a b c] / (|a|·|b|·|c|)`; zero if any column vanishes.
pub(crate) fn relative_det(a: &Vec3, b: &Vec3, c: &Vec3) -> f64 {
    let scale = a.norm() * b.norm() * c.norm();
    if scale == 0.0 || !scale.is_finite() {
        return 0.0;
    }
    Mat3::from_columns(&[*a, *b, *c]).determinant() / scale
}

/// Basis matrix with the given columns together with its inverse.
///
/// `context` names the caller in the `DegenerateBasis` error.
pub fn invert_basis(columns: [Vec3; 3], context: &'static str) -> FlagResult<(Mat3, Mat3)> {
    let [a, b, c] = columns;
    if relative_det(&a, &b, &c).abs() <= DEPENDENT_EPS {
        return Err(FlagError::DegenerateBasis { context });
    }
    let basis = Mat3::from_columns(&columns);
    let inverse = basis
        .try_inverse()
        .ok_or(FlagError::DegenerateBasis { context })?;
    Ok((basis, inverse))
}

/// `B · diag(d) · B⁻¹`: the diagonal map `d` written in standard coordinates.
#[inline]
pub fn conjugate_diagonal(basis: &Mat3, inverse: &Mat3, d: &Vec3) -> Mat3 {
    basis * Mat3::from_diagonal(d) * inverse
}
