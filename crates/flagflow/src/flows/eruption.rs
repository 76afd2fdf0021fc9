//! Eruption flow on a triangle of flags.

use nalgebra::vector;

use super::{ensure_finite, EruptionStyle};
use crate::complex::{FlagComplex, Triangle};
use crate::error::FlagResult;
use crate::proj::{conjugate_diagonal, invert_basis, line_intersection, Vec3};

/// Diagonals of the three eruption generators `g_0, g_1, g_2` at parameter `t`.
fn generators(t: f64) -> [Vec3; 3] {
    let (up, down) = ((t / 3.0).exp(), (-t / 3.0).exp());
    [
        vector![1.0, up, down],
        vector![down, 1.0, up],
        vector![up, down, 1.0],
    ]
}

impl FlagComplex {
    /// Eruption flow with parameter `t` on the flags of `triangle`.
    ///
    /// The generators are diagonal in the basis chosen by `style`:
    /// - `Q`: the corners `l[tri[i-1]] ∩ l[tri[i]]`, ordered `(q₂, q₀, q₁)`;
    ///   the lines of the triangle stay fixed and the points slide along them.
    /// - `P`: the flag points `(p₀, p₁, p₂)`; the points stay fixed and the
    ///   lines turn about them.
    ///
    /// Flag `tri[i]` (point and direction) is moved by generator `(i + 2) mod 3`.
    /// Positivity of the triangle is the caller's pre-flight check.
    pub fn erupt_triangle(
        &mut self,
        t: f64,
        triangle: Triangle,
        style: EruptionStyle,
    ) -> FlagResult<()> {
        self.check_indices(&triangle)?;
        let columns = match style {
            EruptionStyle::Q => {
                let l = |k: usize| &self.ls[triangle[k % 3]];
                let corner = |i: usize| line_intersection(l(i + 2), l(i));
                [corner(2), corner(0), corner(1)]
            }
            EruptionStyle::P => triangle.map(|i| self.ps[i]),
        };
        let (basis, inverse) = invert_basis(columns, "eruption flow")?;
        let gs = generators(t).map(|d| conjugate_diagonal(&basis, &inverse, &d));
        ensure_finite(&gs)?;

        for (i, &flag) in triangle.iter().enumerate() {
            let g = &gs[(i + 2) % 3];
            self.ps[flag] = g * self.ps[flag];
            self.ds[flag] = g * self.ds[flag];
        }
        self.refresh();
        Ok(())
    }
}
