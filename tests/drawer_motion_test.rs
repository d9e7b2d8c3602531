use cordplot::hardware::math::{point_to_cords, steps_to_mm};
use cordplot::motion::sim::{RecordingStepper, SimulatedClock};
use cordplot::preview::cord_drift;
use cordplot::preview::cords::Cords;
use cordplot::{Direction, Drawer, MachineGeometry, MonotonicClock};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn sim_drawer() -> Drawer<RecordingStepper, RecordingStepper, SimulatedClock> {
    Drawer::with_defaults(RecordingStepper::new(), RecordingStepper::new(), SimulatedClock::new(100))
}

fn signed(direction: Direction, steps: u32, scale: f64) -> f64 {
    match direction {
        Direction::Payout => steps_to_mm(steps, scale),
        Direction::Retract => -steps_to_mm(steps, scale),
    }
}

#[test]
fn random_moves_keep_cords_equal_to_distances() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut drawer = sim_drawer();
    let geometry = *drawer.geometry();

    for _ in 0..25 {
        let x = rng.random_range(-50.0..400.0);
        let y = rng.random_range(-50.0..450.0);
        drawer.moveto(x, y).unwrap();

        let (left, right) = point_to_cords(x, y, &geometry);
        assert_eq!(drawer.position(), (x, y));
        assert!((drawer.cord_lengths().0 - left).abs() < 1e-9);
        assert!((drawer.cord_lengths().1 - right).abs() < 1e-9);
    }
}

#[test]
fn step_delta_agrees_with_exact_length_within_one_step() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(42);
    let mut drawer = sim_drawer();
    let scale = drawer.geometry().scale();

    for _ in 0..25 {
        let (previous_left, previous_right) = drawer.cord_lengths();
        let plan = drawer.moveto(rng.random_range(0.0..300.0), rng.random_range(0.0..400.0)).unwrap();
        let (exact_left, exact_right) = drawer.cord_lengths();

        let incremental_left = previous_left + signed(plan.left.direction, plan.left.steps, scale);
        let incremental_right = previous_right + signed(plan.right.direction, plan.right.steps, scale);

        assert!((incremental_left - exact_left).abs() <= 1. / scale);
        assert!((incremental_right - exact_right).abs() <= 1. / scale);
    }
}

#[test]
fn motors_see_exactly_the_planned_steps() {
    let mut drawer = sim_drawer();
    let mut expected_left = 0_i64;
    let mut expected_right = 0_i64;

    for (x, y) in [(100., 100.), (250., 40.), (10., 380.), (0., 0.)] {
        let plan = drawer.moveto(x, y).unwrap();
        expected_left += signed(plan.left.direction, plan.left.steps, 1.) as i64;
        expected_right += signed(plan.right.direction, plan.right.steps, 1.) as i64;
    }

    assert_eq!(drawer.left().net_steps(), expected_left);
    assert_eq!(drawer.right().net_steps(), expected_right);
}

#[test]
fn exact_state_drifts_from_issued_steps() {
    // the drawer keeps the exact target after every move, so the physical, step-rounded
    // cord lengths wander away from it over a long sequence of moves
    let mut drawer = sim_drawer();
    let geometry = *drawer.geometry();
    let scale = geometry.scale();
    let mut cords = Cords::new_by_point(0., 0., geometry);

    let path: Vec<(f64, f64)> = (0..40).map(|i| {
        let t = i as f64 * 0.37;
        (150. + 90. * t.cos() + 0.013 * i as f64, 200. + 90. * t.sin())
    }).collect();

    for (x, y) in &path {
        let plan = drawer.moveto(*x, *y).unwrap();
        cords.move_by_steps((plan.left.direction, plan.left.steps), (plan.right.direction, plan.right.steps));
    }

    let (x, y) = *path.last().unwrap();
    assert_eq!(drawer.position(), (x, y));
    assert_eq!(drawer.quantized_cord_lengths(), cords.get_lengths());

    let (left_drift, right_drift) = cord_drift(&cords, x, y, &geometry);
    let bound = path.len() as f64 * 0.5 / scale;
    assert!(left_drift > 0. || right_drift > 0.);
    assert!(left_drift <= bound && right_drift <= bound);

    let (qx, qy) = drawer.quantized_position().unwrap();
    assert!((qx - x).abs() < 10. && (qy - y).abs() < 10.);
}

#[test]
fn raw_turn_runs_both_axes_in_parallel() {
    init_tracing();
    let mut drawer = Drawer::with_defaults(RecordingStepper::new(), RecordingStepper::new(), MonotonicClock::new());

    let report = drawer.turn(true, true, 100, 300, 1000, 1000);

    assert_eq!(drawer.left().step_count(), 100);
    assert_eq!(drawer.right().step_count(), 300);
    assert!(report.elapsed_micros >= 299_000);
    // bounded by the longer axis, within 10%
    assert!(report.elapsed_micros < 330_000, "turn took {}us", report.elapsed_micros);
    assert!(report.left_finished_at < report.right_finished_at);
}

#[test]
fn geometry_from_config_drives_the_drawer() {
    let geometry = MachineGeometry::from_json(r#"{"width": 800, "height": 700, "offset": 400, "scale": 10, "interval": 500}"#).unwrap();
    let mut drawer = Drawer::new(RecordingStepper::new(), RecordingStepper::new(), SimulatedClock::new(10), geometry);

    let (start_left, _) = point_to_cords(0., 0., &geometry);
    let (target_left, _) = point_to_cords(400., 100., &geometry);
    let plan = drawer.moveto(400., 100.).unwrap();

    assert_eq!(plan.left.interval, 500);
    assert_eq!(plan.left.steps, plan.right.steps);
    assert_eq!(plan.left.steps, ((start_left - target_left) * 10.).round() as u32);
    assert_eq!(plan.left.steps, 2062);
    assert_eq!(plan.left.direction, Direction::Retract);
    assert_eq!(drawer.left().step_count(), 2062);
}
