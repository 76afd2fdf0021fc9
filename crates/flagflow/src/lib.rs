//! Flag complexes in the real projective plane and their deformation flows.
//!
//! Layers, bottom-up:
//! - `proj`: homogeneous-coordinate kernel (joins, meets, chart projection).
//! - `complex`: `FlagComplex`, triple ratios, triangle accessors, conics.
//! - `flows`: eruption, bulge, shear, and composite eruptions.
//! - `animation`, `tessellate`, `request`: step-and-sample frames for display.
//!
//! Reference: Wienhard–Zhang, “Deforming convex real projective structures”
//! (arXiv:1702.00580).
//!
//! API Policy
//! - No stable public API; `api` and `prelude` are the convenience surfaces.

pub mod animation;
pub mod api;
pub mod complex;
pub mod error;
pub mod flows;
pub mod proj;
pub mod rand;
pub mod request;
pub mod tessellate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use complex::FlagComplex;
pub use error::{FlagError, FlagResult};
pub use proj::{Mat3, Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::animation::{animate, AnimationCfg, Frame, Trafo, TrafoRange};
    pub use crate::complex::{ChartPoint, FlagComplex, Quad, Triangle};
    pub use crate::error::{FlagError, FlagResult};
    pub use crate::flows::{CompositeEruption, CompositeStyle, EruptionStyle, QuadStyle};
    pub use crate::proj::{Mat3, Vec3};
    pub use nalgebra::vector;
}
