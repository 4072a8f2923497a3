//! Belief correction from an observation likelihood
//!
//! The correct step conditions a predicted belief on new evidence:
//!
//! `bel(x_t = i) = eta * P(z_t | x_t = i) * bel_bar(x_t = i)`
//!
//! where `eta = 1 / (likelihood . bel_bar)` makes the posterior sum to 1.
//! The same likelihood vector is used for both the elementwise product and
//! the normalization constant; mixing vectors between the two silently
//! breaks normalization.

use nalgebra::DVector;

use crate::common::constants::ETA_EPSILON;
use crate::grid::errors::FilterError;

/// Condition a predicted belief on an observation likelihood.
///
/// Returns the normalized posterior belief and the normalization constant
/// `eta`.
///
/// # Errors
///
/// [`FilterError::DegenerateBelief`] if `likelihood . predicted` vanishes:
/// every position with belief mass is ruled out by the observation, so no
/// normalization exists. `timestep` is only used to label that error.
pub fn correct_belief(
    likelihood: &DVector<f64>,
    predicted: &DVector<f64>,
    timestep: usize,
) -> Result<(DVector<f64>, f64), FilterError> {
    let denominator = likelihood.dot(predicted);
    if denominator.abs() < ETA_EPSILON {
        return Err(FilterError::DegenerateBelief { timestep });
    }

    let eta = 1.0 / denominator;
    let belief = likelihood.component_mul(predicted) * eta;
    Ok((belief, eta))
}
