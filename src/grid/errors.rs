//! Error types for filter construction and belief updates
//!
//! This module provides proper error handling instead of panics.

use std::fmt;

/// Errors that can occur during filter construction or belief updates
#[derive(Debug, Clone)]
pub enum FilterError {
    /// Malformed or inconsistent model inputs at construction
    Configuration {
        /// Description of the configuration issue
        description: String,
    },

    /// Dimension mismatch between expected and actual
    DimensionMismatch {
        /// What was expected
        expected: usize,
        /// What was received
        actual: usize,
        /// Context (e.g., "door likelihood length")
        context: String,
    },

    /// Normalization constant undefined during a correct step
    ///
    /// The belief assigns zero probability to every position consistent
    /// with the observation, a modeling contradiction.
    DegenerateBelief {
        /// Timestep at which the update failed (1-based)
        timestep: usize,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::Configuration { description } => {
                write!(f, "Configuration error: {}", description)
            }
            FilterError::DimensionMismatch {
                expected,
                actual,
                context,
            } => {
                write!(
                    f,
                    "Dimension mismatch for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            FilterError::DegenerateBelief { timestep } => {
                write!(
                    f,
                    "Degenerate belief at step {}: observation likelihood is zero at every position with belief mass",
                    timestep
                )
            }
        }
    }
}

impl std::error::Error for FilterError {}
