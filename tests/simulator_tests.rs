use overscroll::{Overscroll, OverscrollConfig, OverscrollError, StepObserver};

#[test]
fn at_rest_step_is_noop() {
    let mut sim: Overscroll<f32> = Overscroll::new(600.0);
    for t in [16.0, 32.0, 1000.0, 100_000.0] {
        assert!(!sim.step(t));
        assert_eq!(sim.offset(), 0.0);
    }
    assert!(sim.is_at_rest());
}

#[test]
fn settling_converges_within_bounded_steps() {
    let mut sim: Overscroll<f32> = Overscroll::new(600.0);
    sim.set_target(100.0);
    let mut converged_at = None;
    for i in 1..=200 {
        sim.step(i as f32 * 16.0);
        assert!(sim.offset() <= 100.5, "overshoot: {}", sim.offset());
        if converged_at.is_none() && (sim.offset() - 100.0).abs() < 1.0 {
            converged_at = Some(i);
        }
    }
    assert!(
        converged_at.is_some(),
        "did not settle near 100 in 200 steps (at {})",
        sim.offset()
    );
}

#[test]
fn set_offset_is_immediate_and_bypasses_physics() {
    let mut sim: Overscroll<f32> = Overscroll::new(600.0);
    sim.set_target(100.0);
    sim.step(16.0);
    sim.set_offset(42.0);
    assert_eq!(sim.offset(), 42.0);
    // Target and velocity are cleared, so the next step is a no-op.
    assert!(sim.is_at_rest());
    assert!(!sim.step(32.0));
    assert_eq!(sim.offset(), 42.0);
}

#[test]
fn set_offset_resets_the_time_sample() {
    let mut sim: Overscroll<f64> = Overscroll::new(600.0);
    sim.set_target(100.0);
    sim.step(16.0);
    sim.step(32.0);
    sim.set_offset(42.0);
    sim.set_velocity(1.0);
    // A kilosecond-late frame must integrate one nominal 16 ms step, not
    // the stale real delta.
    sim.step(1032.0);
    assert!(sim.offset() > 42.0);
    assert!(sim.offset() < 100.0, "stale delta used: {}", sim.offset());
}

#[test]
fn fling_ramp_softens_initial_kick() {
    let mut abrupt: Overscroll<f32> = Overscroll::new(600.0);
    abrupt.set_target(150.0);

    let mut ramped: Overscroll<f32> = Overscroll::new(600.0);
    ramped.set_target(150.0);
    ramped.set_velocity(0.0);

    // Identical starts; only the ramp differs. For the first 500 ms the
    // ramped spring must apply strictly weaker force.
    let mut t = 0.0;
    while t < 500.0 {
        t += 16.0;
        abrupt.step(t);
        ramped.step(t);
        assert!(ramped.offset() < abrupt.offset());
        assert!(ramped.offset() >= 0.0);
    }
    assert!(ramped.offset() > 0.0);
}

#[test]
fn queries_are_pure() {
    let mut sim: Overscroll<f32> = Overscroll::new(600.0);
    sim.set_target(100.0);
    sim.step(16.0);
    assert_eq!(sim.offset(), sim.offset());
    assert_eq!(sim.reached_target(), sim.reached_target());
    assert_eq!(sim.add_friction(30.0), sim.add_friction(30.0));
}

#[test]
fn fling_toward_target_snaps_exactly() {
    let mut sim: Overscroll<f64> = Overscroll::new(600.0);
    sim.set_target(150.0);
    sim.set_velocity(-3.0);
    let mut steps = 0;
    for i in 1..=50 {
        sim.step(i as f64 * 16.0);
        steps = i;
        if sim.reached_target() {
            break;
        }
    }
    assert!(sim.reached_target(), "no snap within {steps} steps");
    assert_eq!(sim.offset(), 150.0);
    assert!(sim.is_at_rest());
    assert!(!sim.step((steps + 1) as f64 * 16.0));
}

#[test]
fn fling_home_snaps_to_rest() {
    let mut sim: Overscroll<f64> = Overscroll::new(600.0);
    sim.set_offset(50.0);
    sim.set_velocity(-0.5);
    for i in 1..=50 {
        sim.step(i as f64 * 16.0);
        if sim.is_at_rest() {
            break;
        }
    }
    assert_eq!(sim.offset(), 0.0);
    assert!(sim.reached_target());
}

#[test]
fn reached_target_is_false_without_a_target() {
    let mut sim: Overscroll<f32> = Overscroll::new(600.0);
    assert!(!sim.reached_target());
    sim.set_offset(0.5);
    assert!(!sim.reached_target());
    // A new episode clears a previous reached marker.
    sim.set_target(150.0);
    sim.set_velocity(-3.0);
    for i in 1..=50 {
        sim.step(i as f32 * 16.0);
    }
    assert!(sim.reached_target());
    sim.set_velocity(2.0);
    assert!(!sim.reached_target());
}

#[test]
fn set_parameters_takes_effect_live() {
    let mut soft: Overscroll<f32> = Overscroll::new(600.0);
    soft.set_target(100.0);

    let mut stiff: Overscroll<f32> = Overscroll::new(600.0);
    stiff.set_parameters(0.003, 0.5);
    stiff.set_target(100.0);

    soft.step(16.0);
    stiff.step(16.0);
    assert!(stiff.offset() > soft.offset());
}

#[test]
fn try_new_validates_the_extent() {
    assert_eq!(
        Overscroll::<f32>::try_new(-1.0).unwrap_err(),
        OverscrollError::InvalidMaxOffset
    );
    assert_eq!(
        Overscroll::<f32>::try_new(f32::NAN).unwrap_err(),
        OverscrollError::InvalidMaxOffset
    );
    assert!(Overscroll::<f32>::try_new(600.0).is_ok());
}

#[test]
fn try_with_config_validates_time_fields() {
    let zero_dt: OverscrollConfig<f32> = OverscrollConfig::new().with_timestep_ms(0.0);
    assert_eq!(
        Overscroll::try_with_config(600.0, zero_dt).unwrap_err(),
        OverscrollError::InvalidTimestep
    );
    let zero_ramp: OverscrollConfig<f32> = OverscrollConfig::new().with_ramp_duration_ms(0.0);
    assert_eq!(
        Overscroll::try_with_config(600.0, zero_ramp).unwrap_err(),
        OverscrollError::InvalidRampDuration
    );
}

#[derive(Default)]
struct Recorder {
    steps: usize,
    settled_at: Option<f64>,
}

impl StepObserver<f64> for Recorder {
    fn on_step(&mut self, _displacement: f64, _velocity: f64) {
        self.steps += 1;
    }

    fn on_settle(&mut self, target: f64) {
        assert!(self.settled_at.is_none(), "settled twice");
        self.settled_at = Some(target);
    }
}

#[test]
fn observer_sees_steps_and_settle() {
    let mut sim: Overscroll<f64> = Overscroll::new(600.0);
    let mut recorder = Recorder::default();
    sim.set_target(150.0);
    sim.set_velocity(-3.0);
    for i in 1..=50 {
        sim.step_observed(i as f64 * 16.0, &mut recorder);
        if sim.is_at_rest() {
            break;
        }
    }
    assert!(recorder.steps > 0);
    assert_eq!(recorder.settled_at, Some(150.0));
}
