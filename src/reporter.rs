//! Observability for belief filter execution.
//!
//! This module provides the [`StepReporter`] trait for narration and
//! diagnostic instrumentation. Reporters receive callbacks at key points
//! during filter execution without polluting the core algorithm logic;
//! the filter itself never prints or logs.
//!
//! The default [`NoOpReporter`] compiles to zero overhead - all callback
//! methods are empty and will be optimized away by the compiler.
//! [`ConsoleReporter`] narrates each step through the `log` facade.
//!
//! # Example
//!
//! ```
//! use beliefgrid::StepReporter;
//! use nalgebra::DVector;
//!
//! struct CountingReporter {
//!     predictions: usize,
//! }
//!
//! impl StepReporter for CountingReporter {
//!     fn on_predict(&mut self, _timestep: usize, _predicted: &DVector<f64>) {
//!         self.predictions += 1;
//!     }
//! }
//! ```

use nalgebra::DVector;

use crate::grid::output::StepRecord;

// ============================================================================
// StepReporter Trait
// ============================================================================

/// Observability trait for filter step execution.
///
/// Implement this trait to receive callbacks during filter execution.
/// All methods have default empty implementations, so you only need to
/// override the events you care about.
///
/// Callbacks receive references to avoid cloning overhead. If you need to
/// store the data, clone it within your callback implementation.
pub trait StepReporter {
    /// Called once at the start of a run with the step-0 record.
    fn on_start(&mut self, _initial: &StepRecord) {}

    /// Called after the predict phase, before the sensor correction.
    fn on_predict(&mut self, _timestep: usize, _predicted: &DVector<f64>) {}

    /// Called after the correct phase with the completed step record.
    fn on_correct(&mut self, _record: &StepRecord) {}
}

// ============================================================================
// NoOpReporter
// ============================================================================

/// Zero-cost reporter that does nothing.
///
/// This is the default reporter used when no observability is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpReporter;

impl NoOpReporter {
    /// Create a new no-op reporter.
    pub fn new() -> Self {
        Self
    }
}

impl StepReporter for NoOpReporter {
    // All methods use default empty implementations
}

// ============================================================================
// ConsoleReporter
// ============================================================================

/// Reporter that narrates each step through the `log` facade.
///
/// Emits the initial belief, every predicted belief, and every corrected
/// belief with its eta at `info` level. Wire up a logger implementation
/// (e.g. `env_logger`) to see the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Create a new console reporter.
    pub fn new() -> Self {
        Self
    }
}

impl StepReporter for ConsoleReporter {
    fn on_start(&mut self, initial: &StepRecord) {
        log::info!("initial belief: {}", format_belief(&initial.belief));
    }

    fn on_predict(&mut self, timestep: usize, predicted: &DVector<f64>) {
        log::info!(
            "step {}: predicted belief {}",
            timestep,
            format_belief(predicted)
        );
    }

    fn on_correct(&mut self, record: &StepRecord) {
        if let (Some(reading), Some(eta)) = (record.reading, record.eta) {
            log::info!(
                "step {}: sensed {}, eta = {:.6}, corrected belief {}",
                record.timestep,
                reading,
                eta,
                format_belief(&record.belief)
            );
        }
    }
}

/// Render a belief as `p0 = 0.2500, p1 = 0.2500, ...`
pub fn format_belief(belief: &DVector<f64>) -> String {
    belief
        .iter()
        .enumerate()
        .map(|(i, p)| format!("p{} = {:.4}", i, p))
        .collect::<Vec<_>>()
        .join(", ")
}
