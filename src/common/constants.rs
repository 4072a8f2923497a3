//! Numerical constants used throughout the grid filters
//!
//! These are intentionally separate from the model parameters, which are
//! user-configurable.

/// Tolerance for configuration-time normalization checks
///
/// Initial beliefs and transition-matrix columns must sum to 1 within
/// this tolerance or construction fails.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-6;

/// Tolerance for belief-sum invariants on computed output
///
/// Every corrected belief in a returned history sums to 1 within this
/// tolerance; tighter than the configuration tolerance because the
/// normalization is applied explicitly at every correct step.
pub const BELIEF_SUM_TOLERANCE: f64 = 1e-9;

/// Epsilon below which a normalization denominator counts as zero
///
/// Used when checking `likelihood . predicted` before dividing. Smaller
/// than typical floating-point epsilon to avoid premature cutoff of
/// genuinely tiny but valid denominators.
pub const ETA_EPSILON: f64 = 1e-15;
