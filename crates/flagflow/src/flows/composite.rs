//! Two-triangle composite eruptions with projective re-normalization.
//!
//! A quadrilateral `[a, b, c, d]` is split along the edge `(a, c)` into the
//! triangles `[a, b, c]` and `[a, c, d]`. One step erupts the first triangle
//! with `∓t`, then the second with `+t`, and finally maps the four outer
//! corners of the quadrilateral back onto the corners captured when the flow
//! was created, so that the picture stays in a stable viewing frame.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::EruptionStyle;
use crate::complex::{FlagComplex, Quad, Triangle};
use crate::error::{FlagError, FlagResult};
use crate::proj::{line_intersection, transform_four_points, Vec3};

/// Signs of the two eruption parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositeStyle {
    /// `(-t, +t)`
    MinusPlus,
    /// `(+t, +t)`
    PlusPlus,
}

impl CompositeStyle {
    #[inline]
    fn first_sign(self) -> f64 {
        match self {
            CompositeStyle::MinusPlus => -1.0,
            CompositeStyle::PlusPlus => 1.0,
        }
    }
}

impl FromStr for CompositeStyle {
    type Err = FlagError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minus-plus" => Ok(CompositeStyle::MinusPlus),
            "plus-plus" => Ok(CompositeStyle::PlusPlus),
            other => Err(FlagError::InvalidStyle(other.to_string())),
        }
    }
}

impl fmt::Display for CompositeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CompositeStyle::MinusPlus => "minus-plus",
            CompositeStyle::PlusPlus => "plus-plus",
        })
    }
}

/// Outer corners `l[d]∩l[a], l[a]∩l[b], l[b]∩l[c], l[c]∩l[d]` of a quadrilateral.
pub(crate) fn outer_corners(complex: &FlagComplex, quad: Quad) -> [Vec3; 4] {
    let l = complex.lines();
    [0, 1, 2, 3].map(|i| line_intersection(&l[quad[(i + 3) % 4]], &l[quad[i]]))
}

/// A composite eruption bound to the reference corners it re-normalizes to.
#[derive(Clone, Debug)]
pub struct CompositeEruption {
    style: CompositeStyle,
    eruption: EruptionStyle,
    quad: Quad,
    reference: [Vec3; 4],
}

impl CompositeEruption {
    /// Capture the current outer corners of `quad` as the reference frame.
    pub fn new(
        complex: &FlagComplex,
        quad: Quad,
        style: CompositeStyle,
        eruption: EruptionStyle,
    ) -> FlagResult<Self> {
        complex.check_indices(&quad)?;
        Ok(Self {
            style,
            eruption,
            quad,
            reference: outer_corners(complex, quad),
        })
    }

    #[inline]
    pub fn reference(&self) -> &[Vec3; 4] {
        &self.reference
    }
    /// `[a, b, c]` and `[a, c, d]`, in the order they are erupted.
    #[inline]
    pub fn triangles(&self) -> [Triangle; 2] {
        let [a, b, c, d] = self.quad;
        [[a, b, c], [a, c, d]]
    }

    /// One step of the flow with parameter `t`.
    ///
    /// The re-normalizing transformation is recomputed from the current
    /// corners on every call. On error the complex is left unchanged.
    pub fn step(&self, complex: &mut FlagComplex, t: f64) -> FlagResult<()> {
        complex.check_indices(&self.quad)?;
        let [first, second] = self.triangles();
        let mut next = complex.clone();
        next.erupt_triangle(self.style.first_sign() * t, first, self.eruption)?;
        next.erupt_triangle(t, second, self.eruption)?;

        let current = outer_corners(&next, self.quad);
        let m = transform_four_points(&current, &self.reference)?;
        let det = m.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(FlagError::DegenerateConfiguration("re-normalization is singular"));
        }
        next.apply_to_all(&(m / det.abs().cbrt()));
        *complex = next;
        Ok(())
    }
}
