//! Step observer trait for monitoring simulation progress.

use crate::float::Float;

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor the spring's trajectory (e.g., for
/// debugging, visualization, or tuning). All methods have default no-op
/// implementations.
pub trait StepObserver<F: Float> {
    /// Called after each integration step with the new state.
    fn on_step(&mut self, _displacement: F, _velocity: F) {}

    /// Called when the simulation snaps to rest at `target`.
    fn on_settle(&mut self, _target: F) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}
