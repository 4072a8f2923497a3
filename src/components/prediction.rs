//! Belief prediction through the motion model
//!
//! The prediction step propagates the belief forward in time. It is the
//! discrete total-probability form of the Chapman-Kolmogorov prediction:
//!
//! `bel_bar(x_t = i) = sum_j P(i | j) * bel(x_{t-1} = j)`
//!
//! which is exactly the matrix-vector product `transition * belief`.

use nalgebra::{DMatrix, DVector};

/// Propagate a belief through a transition matrix.
///
/// With a column-stochastic transition matrix and a normalized input
/// belief, the result is normalized up to floating-point rounding. That
/// is an invariant the test suite verifies; callers must not rely on the
/// sum being exactly 1.
///
/// The belief length must match the matrix dimension.
#[inline]
pub fn predict_belief(transition: &DMatrix<f64>, belief: &DVector<f64>) -> DVector<f64> {
    transition * belief
}
