//! Output types for the per-step belief history.
//!
//! Each filter step produces a [`StepRecord`] holding the predicted belief
//! (post-motion, pre-sensor), the corrected belief, and the normalization
//! constant used. The [`FilterHistory`] collects these records in step
//! order, starting with a step-0 record that carries the initial belief
//! and no update data. Records are append-only and never mutated once
//! pushed, so presentation collaborators can safely hold onto them.

use nalgebra::DVector;
use serde::Serialize;

use super::types::SensorReading;

/// One step of filter output.
///
/// Step 0 is the initial belief before any update: `reading`, `predicted`
/// and `eta` are `None` there. Every later record carries all fields.
#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    /// Step index (0 = initial belief, 1 = first update)
    pub timestep: usize,
    /// Sensor reading incorporated at this step
    pub reading: Option<SensorReading>,
    /// Predicted belief: post-transition, pre-sensor
    pub predicted: Option<DVector<f64>>,
    /// Corrected belief: post-sensor, normalized
    pub belief: DVector<f64>,
    /// Normalization constant applied during correction
    pub eta: Option<f64>,
}

impl StepRecord {
    /// The step-0 record holding the initial belief
    pub fn initial(belief: DVector<f64>) -> Self {
        Self {
            timestep: 0,
            reading: None,
            predicted: None,
            belief,
            eta: None,
        }
    }

    /// Whether this is the step-0 record
    #[inline]
    pub fn is_initial(&self) -> bool {
        self.timestep == 0
    }

    /// Number of grid positions
    #[inline]
    pub fn num_positions(&self) -> usize {
        self.belief.len()
    }

    /// Index of the most probable position in the corrected belief
    pub fn most_likely_position(&self) -> usize {
        crate::common::utils::argmax(&self.belief)
    }
}

/// Append-only sequence of step records, owned by the filter.
#[derive(Debug, Clone, Serialize)]
pub struct FilterHistory {
    steps: Vec<StepRecord>,
}

impl FilterHistory {
    /// Create a history seeded with the step-0 record
    pub fn new(initial_belief: DVector<f64>) -> Self {
        Self {
            steps: vec![StepRecord::initial(initial_belief)],
        }
    }

    /// Append a step record
    pub(crate) fn push(&mut self, record: StepRecord) {
        self.steps.push(record);
    }

    /// Number of records, including step 0
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: the step-0 record is present from construction
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of applied belief updates (records minus the initial one)
    #[inline]
    pub fn num_updates(&self) -> usize {
        self.steps.len() - 1
    }

    /// All records in step order
    #[inline]
    pub fn records(&self) -> &[StepRecord] {
        &self.steps
    }

    /// The record for a given timestep
    pub fn get(&self, timestep: usize) -> Option<&StepRecord> {
        self.steps.get(timestep)
    }

    /// The step-0 record
    pub fn initial(&self) -> &StepRecord {
        &self.steps[0]
    }

    /// The most recent record
    pub fn latest(&self) -> &StepRecord {
        self.steps
            .last()
            .expect("history always holds the step-0 record")
    }

    /// Corrected beliefs in step order, step 0 included
    pub fn beliefs(&self) -> impl Iterator<Item = &DVector<f64>> {
        self.steps.iter().map(|s| &s.belief)
    }

    /// Normalization constants in step order, step 0 excluded
    pub fn etas(&self) -> impl Iterator<Item = f64> + '_ {
        self.steps.iter().filter_map(|s| s.eta)
    }
}
