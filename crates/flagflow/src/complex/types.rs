//! Index tuples and chart coordinates.

use nalgebra::Vector2;

/// Three flag indices of a complex.
pub type Triangle = [usize; 3];
/// Four flag indices; `quad[0]` and `quad[2]` span the diagonal edge.
pub type Quad = [usize; 4];

/// Image of a projective point in the 2D chart of the projection plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartPoint {
    Finite(Vector2<f64>),
    /// The point lies on the line at infinity of the chart.
    AtInfinity,
}

impl ChartPoint {
    #[inline]
    pub fn finite(&self) -> Option<Vector2<f64>> {
        match *self {
            ChartPoint::Finite(v) => Some(v),
            ChartPoint::AtInfinity => None,
        }
    }
    #[inline]
    pub fn is_at_infinity(&self) -> bool {
        matches!(self, ChartPoint::AtInfinity)
    }
    /// Display coordinates `scale · (x, y)`, `None` at infinity.
    #[inline]
    pub fn scaled(&self, scale: f64) -> Option<[f64; 2]> {
        self.finite().map(|v| [v.x * scale, v.y * scale])
    }
}
