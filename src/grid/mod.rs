/*!
Discrete-grid Bayes filter implementation.

The filter maintains a belief distribution over `N` corridor positions and
updates it recursively:

1. Predict: propagate the belief through the motion model
2. Correct: weight by the observation likelihood and renormalize

Every step is recorded in an append-only [`FilterHistory`] so presentation
collaborators (narration, bar charts) can consume the full run afterwards.
*/

pub mod config;
pub mod errors;
pub mod filter;
pub mod output;
pub mod types;

pub use config::{MotionModel, SensorModel};
pub use errors::FilterError;
pub use filter::BeliefFilter;
pub use output::{FilterHistory, StepRecord};
pub use types::SensorReading;
