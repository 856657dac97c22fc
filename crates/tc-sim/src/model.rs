//! Thermostat model: a controller paired with a plant it can drive.

use serde::{Deserialize, Serialize};
use tc_controls::Controller;

use crate::error::{SimError, SimResult};
use crate::plant::Plant;
use crate::state::SimulationState;

/// Closed thermostat loop.
///
/// Construction checks that the controller's command type matches the
/// plant, so [`ThermostatModel::step`] only fails if the fields were
/// mutated into a mismatched pair afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermostatModel {
    pub controller: Controller,
    pub plant: Plant,
}

impl ThermostatModel {
    pub fn new(controller: Controller, plant: Plant) -> SimResult<Self> {
        if !plant.accepts(controller.kind()) {
            return Err(SimError::ActuatorMismatch {
                controller: controller.kind(),
                plant: plant.kind(),
            });
        }
        Ok(Self { controller, plant })
    }

    pub fn setpoint(&self) -> f64 {
        self.controller.setpoint()
    }

    /// Apply one control step and return the next state.
    pub fn step(&self, state: &SimulationState) -> SimResult<SimulationState> {
        let command = self.controller.command(state.temperature);
        let temperature = self.plant.respond(command, state.temperature)?;
        tracing::trace!(
            step = state.step_index,
            from = state.temperature,
            to = temperature,
            ?command,
            "thermostat step"
        );
        Ok(SimulationState {
            temperature,
            step_index: state.step_index + 1,
        })
    }

    /// Fixed point of the proportional loop, if one exists.
    ///
    /// With gain `kp`, heater effect `h`, cooling coefficient `c`, ambient
    /// `a` and setpoint `sp`, one step is affine in the temperature and its
    /// fixed point is
    ///
    /// ```text
    /// T* = [(1 - c) * kp * h * sp + c * a] / [1 - (1 - c) * (1 - kp * h)]
    /// ```
    ///
    /// `T*` sits below the setpoint whenever the ambient does: proportional
    /// control alone leaves a steady-state offset. Returns `None` for the
    /// bang-bang loop, which has no fixed point, and for a zero denominator.
    pub fn equilibrium(&self) -> Option<f64> {
        match (&self.controller, &self.plant) {
            (Controller::Proportional(c), Plant::NewtonCooling(p)) => {
                let gain = c.kp * p.heater_effect;
                let keep = 1.0 - p.cooling_coefficient;
                let denom = 1.0 - keep * (1.0 - gain);
                if denom == 0.0 {
                    return None;
                }
                Some((keep * gain * c.setpoint + p.cooling_coefficient * p.ambient) / denom)
            }
            _ => None,
        }
    }

    /// Per-step contraction factor of the error around the fixed point.
    ///
    /// The loop converges when its magnitude is below one. A negative value
    /// means the temperature alternates sides of the fixed point each step.
    pub fn error_multiplier(&self) -> Option<f64> {
        match (&self.controller, &self.plant) {
            (Controller::Proportional(c), Plant::NewtonCooling(p)) => {
                Some((1.0 - p.cooling_coefficient) * (1.0 - c.kp * p.heater_effect))
            }
            _ => None,
        }
    }
}
