/*!
# Beliefgrid - Discrete Bayesian localization library

Rust implementation of the recursive Bayes filter over a discrete
one-dimensional position grid (a histogram filter). A robot moving along a
corridor of `N` positions keeps a belief distribution over where it is,
propagating it through a motion model (predict) and conditioning it on
DOOR/WALL observations (correct).

## Features

- Column-stochastic motion models with validated configuration
- DOOR/WALL sensor likelihood models
- Full per-step belief history (predicted belief, corrected belief, eta)
- Observability hooks for narration and visualization collaborators
- Scenario helpers: the four-position hallway and simulated walks

## Modules

- [`grid`] - The belief filter, its configuration, errors, and outputs
- [`components`] - Shared algorithms: prediction, correction
- [`reporter`] - Observability hooks for filter execution
- [`scenario`] - Reference hallway scenario and walk simulation
- [`common`] - Low-level utilities and numerical constants

## Example

```rust
use beliefgrid::scenario::{alternating_readings, hallway_initial_belief, hallway_motion, hallway_sensor};
use beliefgrid::BeliefFilter;

// Reference hallway: four positions, doors at p1 and p3
let mut filter = BeliefFilter::new(
    hallway_motion(),
    hallway_sensor(),
    hallway_initial_belief(),
)
.unwrap();

// Three steps with alternating DOOR/WALL observations
let history = filter.run(&alternating_readings(3)).unwrap();

// History includes the initial belief plus one record per step
assert_eq!(history.len(), 4);
```
*/

// ============================================================================
// Core modules
// ============================================================================

/// Grid localization filter: configuration, errors, filter, outputs
///
/// This is the main module containing the [`grid::BeliefFilter`] and
/// everything it consumes and produces.
pub mod grid;

/// Shared algorithmic components (prediction, correction)
pub mod components;

/// Low-level utilities (belief helpers, numerical constants)
pub mod common;

/// Observability hooks for filter execution
pub mod reporter;

/// Reference scenario configuration and walk simulation
pub mod scenario;

// ============================================================================
// Re-exports for convenience
// ============================================================================

// Core types
pub use grid::{BeliefFilter, FilterHistory, MotionModel, SensorModel, SensorReading, StepRecord};

// Errors
pub use grid::FilterError;

// Observability
pub use reporter::{ConsoleReporter, NoOpReporter, StepReporter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
