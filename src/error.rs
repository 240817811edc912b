//! Error types for simulator construction.

use core::fmt;

/// Errors that can occur when constructing a simulator.
///
/// The simulation itself has no failure modes: once constructed from valid
/// parameters, every operation is a total function over the state space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverscrollError {
    /// The maximum offset must be positive and finite.
    InvalidMaxOffset,
    /// The nominal timestep must be positive and finite.
    InvalidTimestep,
    /// The fling ramp duration must be positive and finite.
    InvalidRampDuration,
}

impl fmt::Display for OverscrollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverscrollError::InvalidMaxOffset => {
                write!(f, "max offset must be positive and finite")
            }
            OverscrollError::InvalidTimestep => {
                write!(f, "timestep must be positive and finite")
            }
            OverscrollError::InvalidRampDuration => {
                write!(f, "ramp duration must be positive and finite")
            }
        }
    }
}
