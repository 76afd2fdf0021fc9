//! Bulge and shear flows on a quadrilateral of flags.

use nalgebra::vector;

use super::{ensure_finite, QuadStyle};
use crate::complex::{FlagComplex, Quad};
use crate::error::FlagResult;
use crate::proj::{conjugate_diagonal, invert_basis, line_intersection, Vec3};

/// Diagonals `(b, mb)` for the flags on either side of the edge.
fn generators(t: f64, style: QuadStyle) -> (Vec3, Vec3) {
    match style {
        QuadStyle::Bulge => (
            vector![(-t / 6.0).exp(), (t / 3.0).exp(), (-t / 6.0).exp()],
            vector![(t / 6.0).exp(), (-t / 3.0).exp(), (t / 6.0).exp()],
        ),
        QuadStyle::Shear => (
            vector![(t / 2.0).exp(), 1.0, (-t / 2.0).exp()],
            vector![(-t / 6.0).exp(), 1.0, (t / 2.0).exp()],
        ),
    }
}

impl FlagComplex {
    /// Bulge or shear flow with parameter `t` along the edge `(quad[0], quad[2])`.
    ///
    /// Basis `(p[quad[0]], l[quad[0]] ∩ l[quad[2]], p[quad[2]])`. The flags
    /// `quad[0]`, `quad[1]` are moved by `b`, the flags `quad[2]`, `quad[3]` by
    /// `mb`. The edge points are eigenvectors of both maps and are left as is;
    /// only their directions are transformed.
    pub fn bulge_quadrilateral(&mut self, t: f64, quad: Quad, style: QuadStyle) -> FlagResult<()> {
        self.check_indices(&quad)?;
        let [q0, q1, q2, q3] = quad;
        let v_0 = self.ps[q0];
        let v_2 = self.ps[q2];
        let v_0_2 = line_intersection(&self.ls[q0], &self.ls[q2]);
        let (basis, inverse) = invert_basis([v_0, v_0_2, v_2], "quadrilateral flow")?;

        let (b, mb) = generators(t, style);
        let b = conjugate_diagonal(&basis, &inverse, &b);
        let mb = conjugate_diagonal(&basis, &inverse, &mb);
        ensure_finite(&[b, mb])?;

        self.ds[q0] = b * self.ds[q0];
        self.ds[q1] = b * self.ds[q1];
        self.ds[q2] = mb * self.ds[q2];
        self.ds[q3] = mb * self.ds[q3];
        self.ps[q1] = b * self.ps[q1];
        self.ps[q3] = mb * self.ps[q3];

        self.refresh();
        Ok(())
    }

    /// Shear flow: `bulge_quadrilateral` with `QuadStyle::Shear`.
    pub fn shear_quadrilateral(&mut self, t: f64, quad: Quad) -> FlagResult<()> {
        self.bulge_quadrilateral(t, quad, QuadStyle::Shear)
    }
}
