//! Proportional thermostat run: 200 steps, Kp = 20.4, heater effect 0.05,
//! cooling coefficient 0.02, ambient 20, setpoint 50.

use tc_controls::ProportionalController;
use tc_core::{Tolerances, nearly_equal};
use tc_sim::{NewtonCoolingPlant, SimOptions, ThermostatModel, TrajectorySummary, run_sim};

fn model(kp: f64) -> ThermostatModel {
    ThermostatModel::new(
        ProportionalController::new(50.0, kp).unwrap().into(),
        NewtonCoolingPlant::new(0.05, 0.02, 20.0).unwrap().into(),
    )
    .unwrap()
}

fn opts() -> SimOptions {
    SimOptions {
        steps: 200,
        initial_temperature: 20.0,
    }
}

#[test]
fn trajectory_has_one_sample_per_step() {
    let record = run_sim(&model(20.4), &opts()).unwrap();
    assert_eq!(record.trajectory.len(), 200);
    assert_eq!(record.initial.temperature, 20.0);
}

#[test]
fn first_step_matches_hand_calculation() {
    let record = run_sim(&model(20.4), &opts()).unwrap();
    let first = record.trajectory.samples()[0];
    assert!(nearly_equal(first, 49.988, Tolerances::loose()), "{first}");
}

#[test]
fn settles_near_the_analytic_equilibrium() {
    let m = model(20.4);
    let record = run_sim(&m, &opts()).unwrap();
    let t_star = m.equilibrium().unwrap();
    let last = record.trajectory.last().unwrap();
    assert!((last - t_star).abs() < 1e-9, "last={last} t*={t_star}");
}

#[test]
fn never_reaches_setpoint() {
    // Proportional-only control leaves a steady-state offset below 50
    let record = run_sim(&model(20.4), &opts()).unwrap();
    let summary = TrajectorySummary::from_record(&record).unwrap();
    assert_eq!(summary.first_crossing, None);
    assert!(summary.max < 50.0);
}

#[test]
fn approach_is_not_monotone() {
    let record = run_sim(&model(20.4), &opts()).unwrap();
    let s = record.trajectory.samples();
    // 49.988 -> ~49.4002 -> ~49.4118: the loop overshoots then rebounds
    assert!(s[1] < s[0]);
    assert!(s[2] > s[1]);
    // Oscillation stays in a small band once past the first step
    for &t in &s[1..] {
        assert!((49.3..50.0).contains(&t), "{t}");
    }
}

#[test]
fn console_port_gain_also_settles() {
    let m = model(21.00001);
    let record = run_sim(&m, &opts()).unwrap();
    let last = record.trajectory.last().unwrap();
    assert!((last - m.equilibrium().unwrap()).abs() < 1e-9);
}

#[test]
fn pathological_gain_diverges_without_guarding() {
    let record = run_sim(&model(1.0e3), &opts()).unwrap();
    assert_eq!(record.trajectory.len(), 200);
    let last = record.trajectory.last().unwrap();
    assert!(!last.is_finite() || last.abs() > 1e100);
}

#[test]
fn diverged_run_is_summarized_without_fake_chatter() {
    let opts = SimOptions {
        steps: 400,
        initial_temperature: 20.0,
    };
    let record = run_sim(&model(1.0e3), &opts).unwrap();
    let summary = TrajectorySummary::from_record(&record).unwrap();

    let non_finite = record
        .trajectory
        .samples()
        .iter()
        .filter(|t| !t.is_finite())
        .count();
    assert!(non_finite > 0);
    assert!(summary.diverged());
    assert_eq!(summary.non_finite_samples, non_finite);
    assert!(summary.final_temperature.is_nan());
    // Only the finite prefix can contribute reversals
    let finite_windows = record.trajectory.len() - non_finite - 1;
    assert!(summary.reversals <= finite_windows);
}

#[test]
fn rerun_is_bit_identical() {
    let a = run_sim(&model(20.4), &opts()).unwrap();
    let b = run_sim(&model(20.4), &opts()).unwrap();
    assert!(
        a.trajectory
            .samples()
            .iter()
            .zip(b.trajectory.samples())
            .all(|(x, y)| x.to_bits() == y.to_bits())
    );
}
