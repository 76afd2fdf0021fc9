//! Triple ratio and the middle/outer/inner triangles of a triple of flags.

use super::flag_complex::FlagComplex;
use super::types::{ChartPoint, Triangle};
use crate::error::{FlagError, FlagResult};
use crate::proj::{connecting_line, line_intersection, Vec3};

/// Triangle whose positivity decides whether a complex may be deformed.
pub const CANONICAL_TRIANGLE: Triangle = [0, 1, 2];

impl FlagComplex {
    /// Triple ratio
    /// `(l_a·p_b)(l_b·p_c)(l_c·p_a) / (l_a·p_c)(l_c·p_b)(l_b·p_a)` of `(a, b, c)`.
    ///
    /// Independent of the chosen homogeneous representatives. A vanishing
    /// denominator (a flag point on a neighbouring flag line) is reported as a
    /// degenerate configuration.
    pub fn get_triple_ratio(&self, triangle: Triangle) -> FlagResult<f64> {
        self.check_indices(&triangle)?;
        let [a, b, c] = triangle;
        let (p, l) = (&self.ps, &self.ls);
        let numerator = l[a].dot(&p[b]) * l[b].dot(&p[c]) * l[c].dot(&p[a]);
        let denominator = l[a].dot(&p[c]) * l[c].dot(&p[b]) * l[b].dot(&p[a]);
        let ratio = numerator / denominator;
        if denominator == 0.0 || !ratio.is_finite() {
            return Err(FlagError::DegenerateConfiguration(
                "triple ratio undefined: a flag point lies on another flag's line",
            ));
        }
        Ok(ratio)
    }

    /// True iff the triple ratio of `(0, 1, 2)` is strictly positive.
    pub fn is_positive(&self) -> FlagResult<bool> {
        if self.len() < 3 {
            return Err(FlagError::TooFewFlags {
                needed: 3,
                len: self.len(),
            });
        }
        Ok(self.get_triple_ratio(CANONICAL_TRIANGLE)? > 0.0)
    }

    /// Pre-flight check for the flows: `NotPositive` unless `is_positive()`.
    pub fn ensure_positive(&self) -> FlagResult<()> {
        if self.is_positive()? {
            Ok(())
        } else {
            Err(FlagError::NotPositive {
                ratio: self.get_triple_ratio(CANONICAL_TRIANGLE)?,
            })
        }
    }

    /// Middle triangle `(p_a, p_b, p_c)`.
    pub fn get_middle_triangle(&self, triangle: Triangle) -> FlagResult<[Vec3; 3]> {
        self.check_indices(&triangle)?;
        Ok(triangle.map(|i| self.ps[i]))
    }

    /// Outer triangle: vertex `i` is `l[(i-1) mod 3] ∩ l[(i+1) mod 3]`, the
    /// corner opposite to the flag point `p[i]`.
    pub fn get_outer_triangle(&self, triangle: Triangle) -> FlagResult<[Vec3; 3]> {
        self.check_indices(&triangle)?;
        let l = |k: usize| &self.ls[triangle[k % 3]];
        Ok([0, 1, 2].map(|i| line_intersection(l(i + 2), l(i + 1))))
    }

    /// Inner triangle `(u_0, u_1, u_2)`: `u_i` is the meet of the lines
    /// `p_{i-1} q_{i-1}` and `p_{i+1} q_{i+1}` joining middle and outer vertices.
    ///
    /// Only meaningful for positive triples; fails with `CoincidentPoints` if a
    /// flag point coincides with its opposite corner.
    pub fn get_inner_triangle(&self, triangle: Triangle) -> FlagResult<[Vec3; 3]> {
        let tps = self.get_middle_triangle(triangle)?;
        let tqs = self.get_outer_triangle(triangle)?;
        let mut us = [Vec3::zeros(); 3];
        for (i, u) in us.iter_mut().enumerate() {
            let (prev, next) = ((i + 2) % 3, (i + 1) % 3);
            *u = line_intersection(
                &connecting_line(&tps[prev], &tqs[prev])?,
                &connecting_line(&tps[next], &tqs[next])?,
            );
        }
        Ok(us)
    }

    /// Inner triangle in chart coordinates.
    pub fn get_projected_us(&self, triangle: Triangle) -> FlagResult<[ChartPoint; 3]> {
        let [u0, u1, u2] = self.get_inner_triangle(triangle)?;
        Ok([self.chart_point(&u0)?, self.chart_point(&u1)?, self.chart_point(&u2)?])
    }
}
