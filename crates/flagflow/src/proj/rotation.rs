use super::cfg::PARALLEL_EPS;
use super::{Mat3, Vec3};

/// Rotation matrix carrying the direction of `p` onto the direction of `q`.
///
/// Both inputs are normalized first and must be non-zero. The rotation acts in
/// the plane spanned by `p` and `q` and fixes the axis `p × q`:
/// `R = B · G · Bᵀ` with the orthonormal basis `B = [p̂, m̂, â]` and the planar
/// block `G` of angle `∠(p, q)`. Opposite directions yield a half-turn about
/// an axis orthogonal to `p`.
pub fn rotate_vectors(p: &Vec3, q: &Vec3) -> Mat3 {
    debug_assert!(p.norm() > 0.0 && q.norm() > 0.0, "rotate_vectors needs non-zero vectors");
    let p = p.normalize();
    let q = q.normalize();
    if (p - q).norm() <= PARALLEL_EPS {
        return Mat3::identity();
    }

    let scal = p.dot(&q);
    let axis = p.cross(&q);
    let ncross = axis.norm();
    if ncross <= PARALLEL_EPS {
        // Antiparallel: any axis orthogonal to p works.
        let helper = if p.x.abs() < 0.9 {
            Vec3::new(1.0, 0.0, 0.0)
        } else {
            Vec3::new(0.0, 1.0, 0.0)
        };
        let k = p.cross(&helper).normalize();
        return 2.0 * k * k.transpose() - Mat3::identity();
    }

    #[rustfmt::skip]
    let g = Mat3::new(
        scal, -ncross, 0.0,
        ncross, scal,  0.0,
        0.0,    0.0,   1.0,
    );
    let mid = (q - p * scal).normalize();
    let basis = Mat3::from_columns(&[p, mid, axis / ncross]);
    basis * g * basis.transpose()
}
