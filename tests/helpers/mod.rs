//! Shared helpers for integration tests
#![allow(dead_code)] // each test binary uses a subset

use nalgebra::DVector;

/// Check if two f64 values are approximately equal
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Check if a vector matches expected entries within tolerance
pub fn vec_approx_eq(v: &DVector<f64>, expected: &[f64], tol: f64) -> bool {
    v.len() == expected.len() && v.iter().zip(expected).all(|(a, b)| approx_eq(*a, *b, tol))
}

/// Assert every corrected belief in a history sums to 1 within `tol`
pub fn assert_history_normalized(history: &beliefgrid::FilterHistory, tol: f64) {
    for record in history.records() {
        let sum: f64 = record.belief.sum();
        assert!(
            approx_eq(sum, 1.0, tol),
            "belief at step {} sums to {}",
            record.timestep,
            sum
        );
    }
}
