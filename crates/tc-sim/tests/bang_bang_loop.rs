//! Bang-bang thermostat run: 100 steps, +5 heating, -2 cooling, setpoint 50.

use tc_controls::BangBangController;
use tc_sim::{SimOptions, SwitchedPlant, ThermostatModel, TrajectorySummary, run_sim};

fn model() -> ThermostatModel {
    ThermostatModel::new(
        BangBangController::new(50.0).unwrap().into(),
        SwitchedPlant::new(5.0, 2.0).unwrap().into(),
    )
    .unwrap()
}

fn opts() -> SimOptions {
    SimOptions {
        steps: 100,
        initial_temperature: 20.0,
    }
}

#[test]
fn trajectory_has_one_sample_per_step() {
    let record = run_sim(&model(), &opts()).unwrap();
    assert_eq!(record.trajectory.len(), 100);
}

#[test]
fn heats_in_fixed_increments_until_setpoint() {
    let record = run_sim(&model(), &opts()).unwrap();
    let samples = record.trajectory.samples();
    assert_eq!(&samples[..6], &[25.0, 30.0, 35.0, 40.0, 45.0, 50.0]);
}

#[test]
fn chatters_in_a_seven_step_cycle_after_crossing() {
    let record = run_sim(&model(), &opts()).unwrap();
    let samples = record.trajectory.samples();
    let cycle = [48.0, 53.0, 51.0, 49.0, 54.0, 52.0, 50.0];
    for (k, &t) in samples[6..].iter().enumerate() {
        assert_eq!(t, cycle[k % cycle.len()], "sample {}", k + 6);
    }
}

#[test]
fn every_step_follows_the_switch_rule() {
    let record = run_sim(&model(), &opts()).unwrap();
    let mut prev = record.initial.temperature;
    for (_, t) in record.trajectory.iter() {
        let expected = if prev < 50.0 { prev + 5.0 } else { prev - 2.0 };
        assert_eq!(t, expected);
        prev = t;
    }
}

#[test]
fn rerun_is_bit_identical() {
    let a = run_sim(&model(), &opts()).unwrap();
    let b = run_sim(&model(), &opts()).unwrap();
    let bits_a: Vec<u64> = a.trajectory.samples().iter().map(|t| t.to_bits()).collect();
    let bits_b: Vec<u64> = b.trajectory.samples().iter().map(|t| t.to_bits()).collect();
    assert_eq!(bits_a, bits_b);
}

#[test]
fn summary_reports_chatter_band() {
    let record = run_sim(&model(), &opts()).unwrap();
    let summary = TrajectorySummary::from_record(&record).unwrap();
    assert_eq!(summary.first_crossing, Some(5));
    assert_eq!(summary.min, 25.0);
    assert_eq!(summary.max, 54.0);
    assert_eq!(summary.peak_overshoot, 4.0);
    assert!(summary.reversals > 20);
}
