//! Reference scenario configuration and walk simulation
//!
//! The reference scenario is a hallway of four positions with doors at p1
//! and p3, a forward-drifting robot, and a scripted DOOR/WALL observation
//! sequence alternating by step parity. This module bundles that
//! configuration and provides a simulator that samples "real" trajectories
//! and readings from the models for callers that want non-scripted
//! observations.

use nalgebra::DVector;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::common::utils::uniform_belief;
use crate::grid::{BeliefFilter, FilterError, FilterHistory, MotionModel, SensorModel, SensorReading};

/// Number of positions in the reference hallway
pub const HALLWAY_POSITIONS: usize = 4;

/// Number of steps in the reference run
pub const HALLWAY_STEPS: usize = 3;

/// Motion model of the reference hallway.
///
/// Per step the robot stays with probability 0.2, advances one position
/// with 0.6, and advances two with 0.2; moves past the end of the hallway
/// pile up at the last position.
pub fn hallway_motion() -> MotionModel {
    MotionModel::linear_corridor(HALLWAY_POSITIONS, &[0.2, 0.6, 0.2])
}

/// Sensor model of the reference hallway: doors at p1 and p3.
pub fn hallway_sensor() -> SensorModel {
    SensorModel::new(
        DVector::from_vec(vec![0.4, 0.85, 0.4, 0.85]),
        DVector::from_vec(vec![0.6, 0.15, 0.6, 0.15]),
    )
}

/// Uniform initial belief over the reference hallway.
pub fn hallway_initial_belief() -> DVector<f64> {
    uniform_belief(HALLWAY_POSITIONS)
}

/// Scripted reading sequence alternating by step parity.
///
/// Odd steps (1-indexed) sense DOOR, even steps sense WALL. This is the
/// reference test script, not a general observation contract; the filter
/// API always takes readings explicitly.
pub fn alternating_readings(steps: usize) -> Vec<SensorReading> {
    (1..=steps)
        .map(|t| {
            if t % 2 == 1 {
                SensorReading::Door
            } else {
                SensorReading::Wall
            }
        })
        .collect()
}

/// The reference hallway scenario with its step count.
#[derive(Debug, Clone)]
pub struct HallwayScenario {
    /// Number of predict/correct steps to run
    pub steps: usize,
}

impl Default for HallwayScenario {
    fn default() -> Self {
        Self {
            steps: HALLWAY_STEPS,
        }
    }
}

impl HallwayScenario {
    /// Scenario with a custom step count
    pub fn new(steps: usize) -> Self {
        Self { steps }
    }

    /// Position labels `p0`, `p1`, ... for presentation
    pub fn position_labels(&self) -> Vec<String> {
        (0..HALLWAY_POSITIONS).map(|i| format!("p{}", i)).collect()
    }

    /// The scripted reading sequence for this scenario
    pub fn readings(&self) -> Vec<SensorReading> {
        alternating_readings(self.steps)
    }

    /// A fresh filter for this scenario
    pub fn build_filter(&self) -> Result<BeliefFilter, FilterError> {
        BeliefFilter::new(hallway_motion(), hallway_sensor(), hallway_initial_belief())
    }

    /// Run the scenario and return the belief history
    pub fn run(&self) -> Result<FilterHistory, FilterError> {
        let mut filter = self.build_filter()?;
        filter.run(&self.readings())?;
        Ok(filter.into_history())
    }
}

// ============================================================================
// Walk simulation
// ============================================================================

/// A sampled robot trajectory with the readings its sensor produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedWalk {
    /// True position after each step, starting position excluded
    pub positions: Vec<usize>,
    /// Sensor reading taken at each step
    pub readings: Vec<SensorReading>,
}

/// Sample a true trajectory and noisy readings from the models.
///
/// Each step draws the next position from the current position's
/// transition column and a DOOR/WALL reading from the sensor likelihoods
/// at the new position (the pair is renormalized per position, since
/// likelihoods need not sum to 1 across readings).
///
/// The result feeds [`BeliefFilter::step`] as a stand-in for real
/// observations. Deterministic under a seeded RNG.
///
/// # Errors
///
/// [`FilterError::Configuration`] if `start` is out of range, a
/// transition column cannot be sampled (all-zero), or both likelihoods
/// vanish at a sampled position.
pub fn simulate_walk<R: Rng>(
    rng: &mut R,
    motion: &MotionModel,
    sensor: &SensorModel,
    start: usize,
    steps: usize,
) -> Result<SimulatedWalk, FilterError> {
    let n = motion.num_positions();
    if start >= n {
        return Err(FilterError::Configuration {
            description: format!("start position {} out of range for {} positions", start, n),
        });
    }

    let mut positions = Vec::with_capacity(steps);
    let mut readings = Vec::with_capacity(steps);
    let mut current = start;

    for _ in 0..steps {
        let column = motion.transition_matrix.column(current);
        let destination = WeightedIndex::new(column.iter().copied())
            .map_err(|_| FilterError::Configuration {
                description: format!("transition column {} cannot be sampled", current),
            })?
            .sample(rng);

        let door = sensor.door_likelihood[destination];
        let wall = sensor.wall_likelihood[destination];
        let total = door + wall;
        if total <= 0.0 {
            return Err(FilterError::Configuration {
                description: format!("both sensor likelihoods are zero at position {}", destination),
            });
        }

        let reading = if rng.gen_bool(door / total) {
            SensorReading::Door
        } else {
            SensorReading::Wall
        };

        positions.push(destination);
        readings.push(reading);
        current = destination;
    }

    Ok(SimulatedWalk {
        positions,
        readings,
    })
}
