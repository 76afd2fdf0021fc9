//! Curated surface for the CLI and benchmarks (UNSTABLE).
//!
//! Breaking changes are allowed; prefer these re-exports over deep paths.

// Projective kernel
pub use crate::proj::{
    conjugate_diagonal, connecting_line, invert_basis, line_intersection, project_point,
    rotate_vectors, same_projective_point, transform_four_points, Mat3, Vec3, REFERENCE_FRAME,
};
// Flag complexes
pub use crate::complex::{ChartPoint, FlagComplex, Quad, Triangle, CANONICAL_TRIANGLE};
// Flows
pub use crate::flows::{CompositeEruption, CompositeStyle, EruptionStyle, QuadStyle};
// Frames and requests
pub use crate::animation::{animate, Animation, AnimationCfg, Frame, Frames, Trafo, TrafoRange};
pub use crate::request::{
    compute_transformation_data, trafos_for, TransformationRequest, TransformationResponse,
    SCREEN_DEPTH,
};
pub use crate::tessellate::{HullTessellator, Tessellation, TessellationFrame, Tessellator};
// Random inputs
pub use crate::rand::{
    circle_flag, conic_complex, draw_positive_complex, ConicCfg, ReplayToken as ConicReplay,
};
