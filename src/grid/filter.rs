//! Main belief filter implementation
//!
//! Implements the complete recursive Bayes update for a discrete position
//! grid: predict with the motion model, correct with the sensor model,
//! append to the belief history. The filter is a strict linear recurrence;
//! step `t` depends only on the corrected belief of step `t - 1` and the
//! reading supplied for step `t`.

use nalgebra::DVector;

use crate::common::constants::NORMALIZATION_TOLERANCE;
use crate::common::utils::{column_sum_deviation, is_normalized};
use crate::components::prediction::predict_belief;
use crate::components::update::correct_belief;
use crate::reporter::{NoOpReporter, StepReporter};

use super::config::{MotionModel, SensorModel};
use super::errors::FilterError;
use super::output::{FilterHistory, StepRecord};
use super::types::SensorReading;

/// Discrete Bayes filter over a one-dimensional position grid.
///
/// Owns the motion model, the sensor model, and the append-only belief
/// history. Each instance is independent; concurrent use of one instance
/// is not supported.
///
/// # Example
///
/// ```
/// use beliefgrid::{BeliefFilter, MotionModel, SensorModel, SensorReading};
/// use nalgebra::DVector;
///
/// let motion = MotionModel::linear_corridor(4, &[0.2, 0.6, 0.2]);
/// let sensor = SensorModel::new(
///     DVector::from_vec(vec![0.4, 0.85, 0.4, 0.85]),
///     DVector::from_vec(vec![0.6, 0.15, 0.6, 0.15]),
/// );
/// let initial = DVector::from_element(4, 0.25);
///
/// let mut filter = BeliefFilter::new(motion, sensor, initial).unwrap();
/// let record = filter.step(SensorReading::Door).unwrap();
/// assert_eq!(record.timestep, 1);
/// ```
#[derive(Debug, Clone)]
pub struct BeliefFilter {
    motion: MotionModel,
    sensor: SensorModel,
    initial_belief: DVector<f64>,
    history: FilterHistory,
}

impl BeliefFilter {
    /// Create a filter, validating the full configuration.
    ///
    /// Checks, in order:
    /// - the grid is non-empty and all dimensions agree
    /// - the initial belief is non-negative and sums to 1 within 1e-6
    /// - the transition matrix is square, non-negative, and
    ///   column-stochastic within 1e-6
    /// - both likelihood vectors are non-negative and finite
    ///
    /// # Errors
    ///
    /// [`FilterError::DimensionMismatch`] on any size disagreement,
    /// [`FilterError::Configuration`] on any value-level inconsistency.
    pub fn new(
        motion: MotionModel,
        sensor: SensorModel,
        initial_belief: DVector<f64>,
    ) -> Result<Self, FilterError> {
        validate_configuration(&motion, &sensor, &initial_belief)?;
        let history = FilterHistory::new(initial_belief.clone());
        Ok(Self {
            motion,
            sensor,
            initial_belief,
            history,
        })
    }

    /// Number of grid positions
    #[inline]
    pub fn num_positions(&self) -> usize {
        self.initial_belief.len()
    }

    /// The motion model
    #[inline]
    pub fn motion(&self) -> &MotionModel {
        &self.motion
    }

    /// The sensor model
    #[inline]
    pub fn sensor(&self) -> &SensorModel {
        &self.sensor
    }

    /// The belief history accumulated so far
    #[inline]
    pub fn history(&self) -> &FilterHistory {
        &self.history
    }

    /// The most recent corrected belief
    #[inline]
    pub fn latest_belief(&self) -> &DVector<f64> {
        &self.history.latest().belief
    }

    /// Consume the filter, returning its history
    pub fn into_history(self) -> FilterHistory {
        self.history
    }

    /// Propagate a belief through the motion model.
    ///
    /// `belief` must have one entry per grid position. The result is
    /// normalized up to floating-point rounding when the input is; that
    /// invariant is verified by the test suite, not assumed here.
    pub fn predict(&self, belief: &DVector<f64>) -> DVector<f64> {
        predict_belief(&self.motion.transition_matrix, belief)
    }

    /// Condition a predicted belief on a sensor reading.
    ///
    /// Returns the normalized posterior and the normalization constant.
    /// `timestep` labels the [`FilterError::DegenerateBelief`] error when
    /// the observation rules out every position with belief mass.
    pub fn correct(
        &self,
        predicted: &DVector<f64>,
        reading: SensorReading,
        timestep: usize,
    ) -> Result<(DVector<f64>, f64), FilterError> {
        correct_belief(self.sensor.likelihood(reading), predicted, timestep)
    }

    /// Apply one predict/correct cycle with an explicit reading.
    ///
    /// Appends the new record to the history and returns it.
    pub fn step(&mut self, reading: SensorReading) -> Result<&StepRecord, FilterError> {
        self.step_with_reporter(reading, &mut NoOpReporter)
    }

    /// [`step`](Self::step) with observability callbacks.
    pub fn step_with_reporter<R: StepReporter>(
        &mut self,
        reading: SensorReading,
        reporter: &mut R,
    ) -> Result<&StepRecord, FilterError> {
        let timestep = self.history.latest().timestep + 1;

        let predicted = self.predict(self.latest_belief());
        reporter.on_predict(timestep, &predicted);

        let (belief, eta) = self.correct(&predicted, reading, timestep)?;
        self.history.push(StepRecord {
            timestep,
            reading: Some(reading),
            predicted: Some(predicted),
            belief,
            eta: Some(eta),
        });

        let record = self.history.latest();
        reporter.on_correct(record);
        Ok(record)
    }

    /// Run one step per reading, in order.
    ///
    /// Returns the full history including the step-0 record. A degenerate
    /// correction aborts the run; records from completed steps remain in
    /// the history.
    pub fn run(&mut self, readings: &[SensorReading]) -> Result<&FilterHistory, FilterError> {
        self.run_with_reporter(readings, &mut NoOpReporter)
    }

    /// [`run`](Self::run) with observability callbacks.
    pub fn run_with_reporter<R: StepReporter>(
        &mut self,
        readings: &[SensorReading],
        reporter: &mut R,
    ) -> Result<&FilterHistory, FilterError> {
        reporter.on_start(self.history.initial());
        for &reading in readings {
            self.step_with_reporter(reading, reporter)?;
        }
        Ok(&self.history)
    }

    /// Drop the history back to the step-0 record.
    pub fn reset(&mut self) {
        self.history = FilterHistory::new(self.initial_belief.clone());
    }
}

fn validate_configuration(
    motion: &MotionModel,
    sensor: &SensorModel,
    initial_belief: &DVector<f64>,
) -> Result<(), FilterError> {
    let n = initial_belief.len();
    if n == 0 {
        return Err(FilterError::Configuration {
            description: "initial belief is empty".to_string(),
        });
    }

    let transition = &motion.transition_matrix;
    if transition.nrows() != transition.ncols() {
        return Err(FilterError::DimensionMismatch {
            expected: transition.nrows(),
            actual: transition.ncols(),
            context: "transition matrix columns (must be square)".to_string(),
        });
    }
    if transition.nrows() != n {
        return Err(FilterError::DimensionMismatch {
            expected: n,
            actual: transition.nrows(),
            context: "transition matrix size".to_string(),
        });
    }
    if sensor.door_likelihood.len() != n {
        return Err(FilterError::DimensionMismatch {
            expected: n,
            actual: sensor.door_likelihood.len(),
            context: "door likelihood length".to_string(),
        });
    }
    if sensor.wall_likelihood.len() != n {
        return Err(FilterError::DimensionMismatch {
            expected: n,
            actual: sensor.wall_likelihood.len(),
            context: "wall likelihood length".to_string(),
        });
    }

    if !is_normalized(initial_belief, NORMALIZATION_TOLERANCE) {
        return Err(FilterError::Configuration {
            description: format!(
                "initial belief must be non-negative and sum to 1, sums to {}",
                initial_belief.sum()
            ),
        });
    }

    if transition.iter().any(|&p| p < 0.0) {
        return Err(FilterError::Configuration {
            description: "transition matrix has negative entries".to_string(),
        });
    }
    let deviation = column_sum_deviation(transition);
    if deviation > NORMALIZATION_TOLERANCE {
        return Err(FilterError::Configuration {
            description: format!(
                "transition matrix columns must each sum to 1, worst deviation {:e}",
                deviation
            ),
        });
    }

    for (name, likelihood) in [
        ("door", &sensor.door_likelihood),
        ("wall", &sensor.wall_likelihood),
    ] {
        if likelihood.iter().any(|&p| p < 0.0 || !p.is_finite()) {
            return Err(FilterError::Configuration {
                description: format!("{} likelihood has negative or non-finite entries", name),
            });
        }
    }

    Ok(())
}
