//! Error type shared by the projective kernel, the flag complex, and the flows.
//!
//! A point at infinity is reported as `AtInfinity` by the single-point
//! routines only; batch projections fold it into `ChartPoint::AtInfinity`.

use thiserror::Error;

pub type FlagResult<T> = Result<T, FlagError>;

/// Failures of the flag-complex engine.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FlagError {
    /// Two homogeneous vectors represent the same projective point.
    #[error("points represent the same projective point; connecting line is undefined")]
    CoincidentPoints,
    /// The point lies on the plane through the origin parallel to the chart.
    #[error("point lies at infinity for the current projection plane")]
    AtInfinity,
    #[error("zero vector does not represent a projective point")]
    ZeroVector,
    /// Point and direction of a flag coincide, so the flag has no line.
    #[error("flag {index} is degenerate: point and direction coincide")]
    DegenerateFlag { index: usize },
    /// Basis vectors for a flow are linearly dependent.
    #[error("degenerate basis for {context}: vectors are linearly dependent")]
    DegenerateBasis { context: &'static str },
    #[error("degenerate configuration: {0}")]
    DegenerateConfiguration(&'static str),
    /// Three of four frame points lie on a common line.
    #[error("points {triple:?} of frame {frame} are collinear")]
    Collinear { frame: usize, triple: [usize; 3] },
    #[error("flag complex is not positive (triple ratio {ratio})")]
    NotPositive { ratio: f64 },
    #[error("{0:?} is not a valid transformation style")]
    InvalidStyle(String),
    #[error("flag index {index} out of range for {len} flags")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("operation needs at least {needed} flags, complex has {len}")]
    TooFewFlags { needed: usize, len: usize },
    #[error("the projection plane has not been defined")]
    MissingProjectionPlane,
}

impl FlagError {
    /// Status code reported by the request layer: 1 for a non-positive complex,
    /// 2 for every other failure.
    pub fn status_code(&self) -> u8 {
        match self {
            FlagError::NotPositive { .. } => 1,
            _ => 2,
        }
    }
}
