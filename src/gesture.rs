//! Pull-to-refresh gesture state machine driving an overscroll simulator.

use crate::config::OverscrollConfig;
use crate::float::Float;
use crate::simulator::Overscroll;

/// UI phase of the pull-to-refresh surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PullPhase {
    /// Not pulled far enough to trigger a refresh.
    Neutral,
    /// Pulled past the trigger offset; releasing starts a refresh.
    Pulled,
    /// A refresh is in flight.
    Loading,
}

/// Thresholds for classifying a pull gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PullConfig<F: Float> {
    /// Offset past which a drag counts as a refresh request. Default: 60.
    pub trigger_offset: F,
    /// Displacement the surface is pinned at while loading. Default: 150.
    pub loading_offset: F,
    /// Release velocities at or below this skip the loading-offset pin and
    /// let the fling carry the surface home. Default: -2.0.
    pub pin_velocity_threshold: F,
}

impl<F: Float> PullConfig<F> {
    /// Create a new config with default thresholds.
    pub fn new() -> Self {
        PullConfig {
            trigger_offset: F::from_f32(60.0),
            loading_offset: F::from_f32(150.0),
            pin_velocity_threshold: F::from_f32(-2.0),
        }
    }

    /// Set the trigger offset.
    pub fn with_trigger_offset(mut self, trigger_offset: F) -> Self {
        self.trigger_offset = trigger_offset;
        self
    }

    /// Set the loading offset.
    pub fn with_loading_offset(mut self, loading_offset: F) -> Self {
        self.loading_offset = loading_offset;
        self
    }

    /// Set the pin velocity threshold.
    pub fn with_pin_velocity_threshold(mut self, threshold: F) -> Self {
        self.pin_velocity_threshold = threshold;
        self
    }
}

impl<F: Float> Default for PullConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull-to-refresh controller: translates drag deltas and release
/// velocities into simulator commands, and classifies the surface phase.
///
/// The caller owns the platform side: it feeds touch/scroll deltas in,
/// invokes [`frame`] once per animation tick, paints the returned offset,
/// and calls [`complete_refresh`] when its refresh work finishes.
///
/// [`frame`]: PullToRefresh::frame
/// [`complete_refresh`]: PullToRefresh::complete_refresh
#[derive(Clone, Debug)]
pub struct PullToRefresh<F: Float> {
    overscroll: Overscroll<F>,
    config: PullConfig<F>,
    phase: PullPhase,
    drag_offset: F,
    dragging: bool,
}

impl<F: Float> PullToRefresh<F> {
    /// Create a controller with default thresholds and physics.
    pub fn new(max_offset: F) -> Self {
        Self::with_config(max_offset, PullConfig::new(), OverscrollConfig::new())
    }

    /// Create a controller with explicit thresholds and physics.
    pub fn with_config(
        max_offset: F,
        config: PullConfig<F>,
        physics: OverscrollConfig<F>,
    ) -> Self {
        PullToRefresh {
            overscroll: Overscroll::with_config(max_offset, physics),
            config,
            phase: PullPhase::Neutral,
            drag_offset: F::zero(),
            dragging: false,
        }
    }

    /// Start a drag at the surface's current offset.
    ///
    /// Pins the simulator to that offset so the displacement tracks the
    /// finger from here, interrupting any in-flight settle or fling.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.drag_offset = self.overscroll.offset();
        self.overscroll.set_offset(self.drag_offset);
    }

    /// Move the active drag by `delta` offset units.
    pub fn drag_by(&mut self, delta: F) {
        self.drag_offset = self.drag_offset + delta;
        self.overscroll.set_offset(self.drag_offset);
        self.classify();
    }

    /// End the drag with a release velocity in offset units per ms.
    ///
    /// A pull past the trigger enters `Loading` and springs to the loading
    /// offset, unless the release flings hard toward rest; anything else
    /// springs home. Either way the release velocity seeds the fling.
    pub fn end_drag(&mut self, velocity: F) {
        self.dragging = false;
        if self.phase == PullPhase::Pulled {
            self.phase = PullPhase::Loading;
            if velocity > self.config.pin_velocity_threshold {
                self.overscroll.set_target(self.config.loading_offset);
            }
            self.overscroll.set_velocity(velocity);
        } else {
            self.overscroll.set_target(F::zero());
            self.overscroll.set_velocity(velocity);
        }
    }

    /// Mark the refresh finished and spring home, unless a new drag is
    /// already in progress.
    pub fn complete_refresh(&mut self) {
        self.phase = PullPhase::Neutral;
        if !self.dragging {
            self.overscroll.set_target(F::zero());
        }
    }

    /// Advance one animation frame and return the offset to paint.
    ///
    /// Steps the simulator to `time_ms` and applies the friction curve to
    /// the rendered offset (the stored displacement stays unfrictioned).
    pub fn frame(&mut self, time_ms: F) -> F {
        self.overscroll.step(time_ms);
        if self.dragging {
            self.classify();
        }
        self.overscroll.add_friction(self.overscroll.offset())
    }

    /// Current surface phase.
    pub fn phase(&self) -> PullPhase {
        self.phase
    }

    /// Current (unfrictioned) displacement.
    pub fn offset(&self) -> F {
        self.overscroll.offset()
    }

    /// Whether the surface is displaced past its rest position.
    pub fn is_pulling(&self) -> bool {
        self.overscroll.offset() > F::zero()
    }

    /// The underlying simulator.
    pub fn overscroll(&self) -> &Overscroll<F> {
        &self.overscroll
    }

    /// The underlying simulator, mutably.
    pub fn overscroll_mut(&mut self) -> &mut Overscroll<F> {
        &mut self.overscroll
    }

    /// Neutral/Pulled classification; Loading is only left via
    /// [`PullToRefresh::complete_refresh`].
    fn classify(&mut self) {
        if self.phase == PullPhase::Loading {
            return;
        }
        self.phase = if self.overscroll.offset() > self.config.trigger_offset {
            PullPhase::Pulled
        } else {
            PullPhase::Neutral
        };
    }
}
