//! Belief-vector and stochastic-matrix helpers

use nalgebra::{DMatrix, DVector};

/// A uniform belief over `n` positions
pub fn uniform_belief(n: usize) -> DVector<f64> {
    DVector::from_element(n, 1.0 / n as f64)
}

/// Whether a vector is non-negative and sums to 1 within `tolerance`
pub fn is_normalized(v: &DVector<f64>, tolerance: f64) -> bool {
    v.iter().all(|&p| p >= 0.0) && (v.sum() - 1.0).abs() <= tolerance
}

/// Largest deviation of any column sum from 1
pub fn column_sum_deviation(m: &DMatrix<f64>) -> f64 {
    (0..m.ncols())
        .map(|j| (m.column(j).sum() - 1.0).abs())
        .fold(0.0, f64::max)
}

/// Rescale every column to sum to 1.
///
/// Columns with a zero sum are left untouched.
pub fn normalize_columns(m: &mut DMatrix<f64>) {
    for j in 0..m.ncols() {
        let sum: f64 = m.column(j).sum();
        if sum > 0.0 {
            m.column_mut(j).iter_mut().for_each(|x| *x /= sum);
        }
    }
}

/// Index of the largest entry (first wins on ties)
pub fn argmax(v: &DVector<f64>) -> usize {
    let mut best = 0;
    for (i, &x) in v.iter().enumerate() {
        if x > v[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_belief() {
        let belief = uniform_belief(4);
        assert_eq!(belief.len(), 4);
        assert!(is_normalized(&belief, 1e-12));
    }

    #[test]
    fn test_is_normalized_rejects_negative_entries() {
        let v = DVector::from_vec(vec![1.5, -0.5]);
        assert!(!is_normalized(&v, 1e-6));
    }

    #[test]
    fn test_column_sum_deviation() {
        #[rustfmt::skip]
        let m = DMatrix::from_row_slice(2, 2, &[
            0.5, 0.9,
            0.5, 0.0,
        ]);
        assert!((column_sum_deviation(&m) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_columns() {
        #[rustfmt::skip]
        let mut m = DMatrix::from_row_slice(2, 2, &[
            2.0, 1.0,
            2.0, 3.0,
        ]);
        normalize_columns(&mut m);
        assert!(column_sum_deviation(&m) < 1e-12);
        assert!((m[(0, 0)] - 0.5).abs() < 1e-12);
        assert!((m[(1, 1)] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_argmax_first_wins_on_ties() {
        let v = DVector::from_vec(vec![0.1, 0.45, 0.45]);
        assert_eq!(argmax(&v), 1);
    }
}
