//! Sensor reading type
//!
//! The corridor robot observes exactly one of two features at each step:
//! a door or a wall. The reading selects which likelihood vector of the
//! [`SensorModel`](crate::grid::SensorModel) is applied during correction.

use std::fmt;

use serde::Serialize;

/// A single sensor observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SensorReading {
    /// The robot senses a door
    Door,
    /// The robot senses a wall
    Wall,
}

impl SensorReading {
    /// The opposite reading (DOOR <-> WALL)
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            SensorReading::Door => SensorReading::Wall,
            SensorReading::Wall => SensorReading::Door,
        }
    }
}

impl fmt::Display for SensorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorReading::Door => write!(f, "DOOR"),
            SensorReading::Wall => write!(f, "WALL"),
        }
    }
}
