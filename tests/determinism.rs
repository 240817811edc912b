use overscroll::{Overscroll, PullToRefresh};

#[test]
fn fling_deterministic() {
    let results: Vec<Vec<f64>> = (0..10)
        .map(|_| {
            let mut sim: Overscroll<f64> = Overscroll::new(600.0);
            sim.set_target(150.0);
            sim.set_velocity(0.5);
            (1..=300).map(|i| {
                sim.step(i as f64 * 16.0);
                sim.offset()
            }).collect()
        })
        .collect();

    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}

#[test]
fn gesture_deterministic() {
    let results: Vec<Vec<f32>> = (0..5)
        .map(|_| {
            let mut p2r: PullToRefresh<f32> = PullToRefresh::new(600.0);
            p2r.begin_drag();
            p2r.drag_by(80.0);
            p2r.end_drag(0.5);
            (1..=300).map(|i| p2r.frame(i as f32 * 16.0)).collect()
        })
        .collect();

    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}
