//! Conic tangent to two flags and passing through a third point.

use std::f64::consts::PI;

use super::flag_complex::FlagComplex;
use crate::error::FlagResult;
use crate::proj::{line_intersection, transform_four_points, Vec3, REFERENCE_FRAME};

impl FlagComplex {
    /// Sample the conic through `p[a]`, `p[b]` and `point` that is tangent to
    /// the lines `l[a]` and `l[b]`.
    ///
    /// The four points `p[a], p[b], point, l[a] ∩ l[b]` are mapped onto the
    /// reference frame, where the conic is the unit circle; `4 · resolution`
    /// equally spaced circle points are mapped back. Sample `0` is `p[a]`,
    /// sample `resolution` is `point`, sample `2 · resolution` is `p[b]`.
    pub fn conic_through_flags_and_point(
        &self,
        a: usize,
        b: usize,
        point: &Vec3,
        resolution: usize,
    ) -> FlagResult<Vec<Vec3>> {
        let (pa, la) = self.get_flag(a)?;
        let (pb, lb) = self.get_flag(b)?;
        let frame = [pa, pb, *point, line_intersection(&la, &lb)];
        let reference = REFERENCE_FRAME.map(|[x, y, z]| Vec3::new(x, y, z));
        // Reference coordinates back to the flags' coordinates.
        let back = transform_four_points(&reference, &frame)?;

        let samples = 4 * resolution;
        Ok((0..samples)
            .map(|i| {
                let angle = 2.0 * PI * (i as f64) / (samples as f64);
                back * Vec3::new(angle.cos(), angle.sin(), 1.0)
            })
            .collect())
    }
}
