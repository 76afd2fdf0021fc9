//! Tolerance defaults for projective computations (internal).
//!
//! All thresholds are relative: a quantity is compared against the product of
//! the norms of the vectors it was built from.

/// `|p × q| <= COINCIDENT_EPS · |p|·|q|` means `p` and `q` are the same projective point.
pub(crate) const COINCIDENT_EPS: f64 = 1e-12;
/// `|n·p| <= INFINITY_EPS · |p|` means `p` has no image in the chart with normal `n`.
pub(crate) const INFINITY_EPS: f64 = 1e-12;
/// Relative determinant below which three vectors count as linearly dependent.
pub(crate) const DEPENDENT_EPS: f64 = 1e-12;
/// Distance between unit vectors treated as equal directions by `rotate_vectors`.
pub(crate) const PARALLEL_EPS: f64 = 1e-14;
