//! Simulation driver and result recording.

use serde::Serialize;
use tc_core::ensure_finite;

use crate::error::{SimError, SimResult};
use crate::model::ThermostatModel;
use crate::state::{SimulationState, Trajectory};

/// Options for simulation runs.
#[derive(Clone, Debug, PartialEq)]
pub struct SimOptions {
    /// Number of control steps to apply (also the trajectory length)
    pub steps: usize,
    /// Temperature at step 0
    pub initial_temperature: f64,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            steps: 100,
            initial_temperature: 20.0,
        }
    }
}

/// Record of a completed simulation run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimRecord {
    /// State before the first step
    pub initial: SimulationState,
    /// State after the last step
    pub last: SimulationState,
    /// One temperature per step
    pub trajectory: Trajectory,
    /// Setpoint the controller tracked
    pub setpoint: f64,
}

/// Run the thermostat loop for exactly `opts.steps` steps.
///
/// There is no early exit and no convergence check. Non-finite temperatures
/// produced by unstable gains are recorded as-is.
pub fn run_sim(model: &ThermostatModel, opts: &SimOptions) -> SimResult<SimRecord> {
    if opts.steps == 0 {
        return Err(SimError::InvalidArg {
            what: "steps must be positive",
        });
    }
    ensure_finite(opts.initial_temperature, "initial_temperature must be finite")?;

    tracing::debug!(
        controller = %model.controller.kind(),
        plant = %model.plant.kind(),
        steps = opts.steps,
        initial = opts.initial_temperature,
        setpoint = model.setpoint(),
        "starting thermostat run"
    );

    let initial = SimulationState::initial(opts.initial_temperature);
    let mut state = initial;
    let mut trajectory = Trajectory::with_capacity(opts.steps);

    for _ in 0..opts.steps {
        state = model.step(&state)?;
        trajectory.push(state.temperature);
    }

    tracing::debug!(
        steps = state.step_index,
        final_temperature = state.temperature,
        "thermostat run complete"
    );

    Ok(SimRecord {
        initial,
        last: state,
        trajectory,
        setpoint: model.setpoint(),
    })
}
