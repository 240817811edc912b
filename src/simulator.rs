//! Damped-spring overscroll simulator stepped in discrete time.

use crate::config::OverscrollConfig;
use crate::error::OverscrollError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};

/// The displacement the spring currently pulls toward.
///
/// `Free` means the spring pulls back to rest (0). `Reached` records the
/// point a settle episode terminated at, so target-reached queries stay
/// answerable after the snap clears the active target; it behaves like
/// `Free` for the physics.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Target<F: Float> {
    Free,
    Active(F),
    Reached(F),
}

impl<F: Float> Target<F> {
    fn active(self) -> Option<F> {
        match self {
            Target::Active(t) => Some(t),
            Target::Free | Target::Reached(_) => None,
        }
    }
}

/// Ramp-in state for an externally imposed velocity.
///
/// While `Ramping`, spring and damping forces are scaled up from zero over
/// the configured ramp duration so a fling doesn't snap instantly. `Full`
/// marks forces already at full strength (e.g., after a direct offset
/// override).
#[derive(Copy, Clone, Debug, PartialEq)]
enum FlingRamp<F: Float> {
    Inactive,
    Ramping(F),
    Full,
}

/// One-dimensional damped-spring overscroll simulation.
///
/// Tracks a displacement past a scroll boundary and advances it one
/// animation frame at a time. A frame driver calls [`step`] with a
/// monotonically increasing timestamp and reads [`offset`] to paint; a
/// gesture layer interleaves [`set_offset`] (drag), [`set_velocity`]
/// (release fling), and [`set_target`] (spring toward a point) between
/// steps. Single-owner: one instance per scroll surface, mutated only from
/// one thread/task.
///
/// [`step`]: Overscroll::step
/// [`offset`]: Overscroll::offset
/// [`set_offset`]: Overscroll::set_offset
/// [`set_velocity`]: Overscroll::set_velocity
/// [`set_target`]: Overscroll::set_target
#[derive(Clone, Debug)]
pub struct Overscroll<F: Float> {
    displacement: F,
    velocity: F,
    target: Target<F>,
    /// Last timestamp passed to `step`; `None` means no prior sample and
    /// the nominal timestep is used instead.
    prev_time: Option<F>,
    ramp: FlingRamp<F>,
    max_offset: F,
    config: OverscrollConfig<F>,
}

impl<F: Float> Overscroll<F> {
    /// Create a simulator at rest with default physics constants.
    ///
    /// `max_offset` bounds the friction curve (typically the viewport
    /// extent).
    pub fn new(max_offset: F) -> Self {
        Self::with_config(max_offset, OverscrollConfig::new())
    }

    /// Create a simulator at rest with explicit physics constants.
    pub fn with_config(max_offset: F, config: OverscrollConfig<F>) -> Self {
        debug_assert!(
            max_offset.is_finite() && max_offset > F::zero(),
            "max_offset must be positive and finite"
        );
        Overscroll {
            displacement: F::zero(),
            velocity: F::zero(),
            target: Target::Free,
            prev_time: None,
            ramp: FlingRamp::Inactive,
            max_offset,
            config,
        }
    }

    /// Like [`Overscroll::new`], but validates the extent.
    pub fn try_new(max_offset: F) -> Result<Self, OverscrollError> {
        Self::try_with_config(max_offset, OverscrollConfig::new())
    }

    /// Like [`Overscroll::with_config`], but validates the extent and the
    /// time-related config fields.
    pub fn try_with_config(
        max_offset: F,
        config: OverscrollConfig<F>,
    ) -> Result<Self, OverscrollError> {
        if !max_offset.is_finite() || max_offset <= F::zero() {
            return Err(OverscrollError::InvalidMaxOffset);
        }
        if !config.timestep_ms.is_finite() || config.timestep_ms <= F::zero() {
            return Err(OverscrollError::InvalidTimestep);
        }
        if !config.ramp_duration_ms.is_finite() || config.ramp_duration_ms <= F::zero() {
            return Err(OverscrollError::InvalidRampDuration);
        }
        Ok(Self::with_config(max_offset, config))
    }

    /// Overwrite the spring constant and damping live.
    ///
    /// Intended for interactive tuning from a debug tool; no validation,
    /// no other side effects.
    pub fn set_parameters(&mut self, spring_constant: F, damping: F) {
        self.config.spring_constant = spring_constant;
        self.config.damping = damping;
    }

    /// Begin a spring-driven approach toward `target` from rest.
    ///
    /// Clears any residual velocity and fling ramp; the next step uses the
    /// nominal timestep.
    pub fn set_target(&mut self, target: F) {
        self.target = Target::Active(target);
        self.velocity = F::zero();
        self.ramp = FlingRamp::Inactive;
        self.prev_time = None;
    }

    /// Seed a fling velocity, in offset units per millisecond.
    ///
    /// Starts the ramp-in window: spring and damping forces grow from zero
    /// over the configured ramp duration instead of applying abruptly. Any
    /// active target is kept, so a release can fling toward a point.
    pub fn set_velocity(&mut self, velocity: F) {
        if let Target::Reached(_) = self.target {
            self.target = Target::Free;
        }
        self.velocity = velocity;
        self.ramp = FlingRamp::Ramping(F::zero());
    }

    /// Force the displacement directly, bypassing physics.
    ///
    /// Used while the user is actively dragging and the offset should
    /// track the finger exactly. Clears the target and velocity, resets
    /// the time sample, and leaves the ramp at full strength.
    pub fn set_offset(&mut self, offset: F) {
        self.displacement = offset;
        self.velocity = F::zero();
        self.target = Target::Free;
        self.prev_time = None;
        self.ramp = FlingRamp::Full;
    }

    /// Current displacement from the rest position.
    pub fn offset(&self) -> F {
        self.displacement
    }

    /// Extent bounding the friction curve.
    pub fn max_offset(&self) -> F {
        self.max_offset
    }

    /// Current physics constants.
    pub fn config(&self) -> &OverscrollConfig<F> {
        &self.config
    }

    /// Whether the last settle episode completed.
    ///
    /// True when the displacement is within the settle tolerance of the
    /// active target with zero velocity, or when a previous episode
    /// snapped to rest at its target and no control call has started a new
    /// one since. With no target ever set (or after a direct offset
    /// override) there is nothing to have reached and this returns false.
    pub fn reached_target(&self) -> bool {
        match self.target {
            Target::Active(t) => {
                (self.displacement - t).abs() < self.config.settle_epsilon
                    && self.velocity == F::zero()
            }
            Target::Reached(_) => true,
            Target::Free => false,
        }
    }

    /// Whether the next [`Overscroll::step`] would be a no-op.
    ///
    /// Lets a frame driver stop scheduling updates once the simulation has
    /// settled.
    pub fn is_at_rest(&self) -> bool {
        self.target.active().is_none() && self.velocity == F::zero()
    }

    /// Resistance curve applied to the rendered (not stored) offset.
    ///
    /// Monotonically increasing and concave for non-negative input,
    /// approaching `max_offset` asymptotically; negative input passes
    /// through unchanged (no friction below rest). Pure: does not touch
    /// simulation state.
    pub fn add_friction(&self, offset: F) -> F {
        if offset < F::zero() {
            return offset;
        }
        let r = offset / self.max_offset;
        self.max_offset * r / (F::one() + r)
    }

    /// Advance the simulation to `time_ms`.
    ///
    /// Call once per animation frame with a monotonically increasing
    /// timestamp in milliseconds. Returns whether the displacement
    /// changed. See [`Overscroll::step_observed`] for the transition
    /// details.
    pub fn step(&mut self, time_ms: F) -> bool {
        self.step_observed(time_ms, &mut NoOpStepObserver)
    }

    /// Advance the simulation to `time_ms`, reporting to `observer`.
    ///
    /// At rest (no active target, zero velocity) this is a no-op returning
    /// false. Otherwise the spring accelerates the displacement toward the
    /// active target (or rest when there is none), scaled by the fling
    /// ramp, with per-step friction and damping applied to the velocity.
    /// When the displacement reaches the target with non-positive
    /// velocity, the state snaps exactly onto the target and returns to
    /// rest.
    ///
    /// Inputs are assumed finite; NaN or non-monotonic timestamps produce
    /// numeric drift, not an error.
    pub fn step_observed<O: StepObserver<F>>(&mut self, time_ms: F, observer: &mut O) -> bool {
        if self.is_at_rest() {
            return false;
        }

        let before = self.displacement;
        let target_pos = self.target.active().unwrap_or(F::zero());

        // Without a prior sample, assume one nominal frame has elapsed
        // rather than trusting a possibly huge real delta.
        let delta = match self.prev_time {
            Some(prev) => time_ms - prev,
            None => self.config.timestep_ms,
        };
        self.prev_time = Some(time_ms);

        if let FlingRamp::Ramping(elapsed) = self.ramp {
            let elapsed = elapsed + delta;
            self.ramp = if elapsed < self.config.ramp_duration_ms {
                FlingRamp::Ramping(elapsed)
            } else {
                FlingRamp::Full
            };
        }

        let lerp = match self.ramp {
            FlingRamp::Ramping(elapsed) => elapsed / self.config.ramp_duration_ms,
            FlingRamp::Inactive | FlingRamp::Full => F::one(),
        };
        let ramp_gain = lerp.powf(self.config.ramp_exponent);

        let accel = ramp_gain * self.config.spring_constant * (target_pos - self.displacement);
        self.velocity = self.velocity * self.config.friction + accel * delta;
        // Damping the velocity after the spring acceleration keeps the
        // integration stable.
        self.velocity = self.velocity - ramp_gain * self.config.damping * self.velocity;
        self.displacement = self.displacement + self.velocity * delta;

        // Reached (or overshot back onto) the target while moving
        // non-positively: land exactly on it and return to rest.
        if target_pos - self.displacement > -self.config.snap_epsilon
            && self.velocity <= F::zero()
        {
            self.velocity = F::zero();
            self.displacement = target_pos;
            self.target = Target::Reached(target_pos);
            self.prev_time = None;
            observer.on_settle(target_pos);
        }

        observer.on_step(self.displacement, self.velocity);
        self.displacement != before
    }
}
