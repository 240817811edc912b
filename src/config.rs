//! Configuration types for the overscroll simulation.

use crate::float::Float;

/// Numeric parameters of the overscroll spring model.
///
/// # Builder Pattern
/// ```
/// use overscroll::config::OverscrollConfig;
///
/// let config: OverscrollConfig<f32> = OverscrollConfig::new()
///     .with_spring_constant(0.0005)
///     .with_damping(0.4)
///     .with_timestep_ms(16.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverscrollConfig<F: Float> {
    /// Spring stiffness: acceleration per unit of displacement error,
    /// per ms². Default: 0.0003.
    pub spring_constant: F,
    /// Damping applied to the post-integration velocity each step,
    /// scaled by the fling ramp. Default: 0.5.
    pub damping: F,
    /// Exponent shaping how the spring/damping ramp in after a fling.
    /// Higher = softer initial kick. Default: 4.0.
    pub ramp_exponent: F,
    /// Per-step multiplicative velocity decay. Default: 0.95.
    pub friction: F,
    /// Nominal timestep (ms) substituted when no prior time sample
    /// exists. Default: 16.0.
    pub timestep_ms: F,
    /// Duration (ms) over which a fling ramps the spring to full
    /// strength. Default: 500.0.
    pub ramp_duration_ms: F,
    /// Band around the target within which the simulation snaps to rest.
    /// Default: 0.1.
    pub snap_epsilon: F,
    /// Displacement tolerance for [`reached_target`]. Default: 1.0.
    ///
    /// [`reached_target`]: crate::simulator::Overscroll::reached_target
    pub settle_epsilon: F,
}

impl<F: Float> OverscrollConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        OverscrollConfig {
            spring_constant: F::from_f32(0.0003),
            damping: F::from_f32(0.5),
            ramp_exponent: F::from_f32(4.0),
            friction: F::from_f32(0.95),
            timestep_ms: F::from_f32(16.0),
            ramp_duration_ms: F::from_f32(500.0),
            snap_epsilon: F::from_f32(0.1),
            settle_epsilon: F::one(),
        }
    }

    /// Set the spring constant.
    pub fn with_spring_constant(mut self, spring_constant: F) -> Self {
        self.spring_constant = spring_constant;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the fling ramp exponent.
    pub fn with_ramp_exponent(mut self, ramp_exponent: F) -> Self {
        self.ramp_exponent = ramp_exponent;
        self
    }

    /// Set the per-step velocity friction.
    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    /// Set the nominal timestep in milliseconds.
    pub fn with_timestep_ms(mut self, timestep_ms: F) -> Self {
        self.timestep_ms = timestep_ms;
        self
    }

    /// Set the fling ramp-in duration in milliseconds.
    pub fn with_ramp_duration_ms(mut self, ramp_duration_ms: F) -> Self {
        self.ramp_duration_ms = ramp_duration_ms;
        self
    }

    /// Set the snap band around the target.
    pub fn with_snap_epsilon(mut self, snap_epsilon: F) -> Self {
        self.snap_epsilon = snap_epsilon;
        self
    }

    /// Set the settle tolerance for target-reached queries.
    pub fn with_settle_epsilon(mut self, settle_epsilon: F) -> Self {
        self.settle_epsilon = settle_epsilon;
        self
    }
}

impl<F: Float> Default for OverscrollConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
