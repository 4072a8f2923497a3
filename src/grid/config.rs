//! Configuration types for grid filters
//!
//! This module provides the two model structs a [`BeliefFilter`] is built
//! from: the motion (state-transition) model and the DOOR/WALL sensor
//! likelihood pair. The structs themselves are plain containers; all
//! consistency checks run once at filter construction.
//!
//! [`BeliefFilter`]: crate::grid::BeliefFilter

use nalgebra::{DMatrix, DVector};
use serde::Serialize;

use super::types::SensorReading;

/// Motion model parameters for prediction
#[derive(Debug, Clone, Serialize)]
pub struct MotionModel {
    /// State transition matrix: entry (i, j) is P(move to i | robot at j).
    /// Each column is a distribution over destinations, so columns sum to 1.
    pub transition_matrix: DMatrix<f64>,
}

impl MotionModel {
    /// Create a new motion model
    pub fn new(transition_matrix: DMatrix<f64>) -> Self {
        Self { transition_matrix }
    }

    /// Get the number of grid positions
    #[inline]
    pub fn num_positions(&self) -> usize {
        self.transition_matrix.nrows()
    }

    /// Create a forward-drift motion model for a corridor of `n` positions.
    ///
    /// `advance_kernel[k]` is the probability of advancing `k` cells per
    /// step. Moves past the end of the corridor saturate at the last
    /// position, so each column remains a valid distribution as long as
    /// the kernel itself sums to 1.
    ///
    /// The reference hallway uses kernel `[0.2, 0.6, 0.2]`: stay with
    /// probability 0.2, advance one cell with 0.6, advance two with 0.2.
    pub fn linear_corridor(n: usize, advance_kernel: &[f64]) -> Self {
        let mut transition = DMatrix::zeros(n, n);
        for j in 0..n {
            for (k, &p) in advance_kernel.iter().enumerate() {
                let i = (j + k).min(n.saturating_sub(1));
                transition[(i, j)] += p;
            }
        }
        Self::new(transition)
    }
}

/// DOOR/WALL sensor likelihood pair
///
/// Each vector gives P(reading | position) for every grid position. These
/// are likelihoods, not distributions over position: they are not required
/// to sum to 1 across positions.
#[derive(Debug, Clone, Serialize)]
pub struct SensorModel {
    /// P(sense = DOOR | position) for each position
    pub door_likelihood: DVector<f64>,
    /// P(sense = WALL | position) for each position
    pub wall_likelihood: DVector<f64>,
}

impl SensorModel {
    /// Create a new sensor model
    pub fn new(door_likelihood: DVector<f64>, wall_likelihood: DVector<f64>) -> Self {
        Self {
            door_likelihood,
            wall_likelihood,
        }
    }

    /// Get the number of grid positions
    #[inline]
    pub fn num_positions(&self) -> usize {
        self.door_likelihood.len()
    }

    /// The likelihood vector selected by a reading
    #[inline]
    pub fn likelihood(&self, reading: SensorReading) -> &DVector<f64> {
        match reading {
            SensorReading::Door => &self.door_likelihood,
            SensorReading::Wall => &self.wall_likelihood,
        }
    }
}
