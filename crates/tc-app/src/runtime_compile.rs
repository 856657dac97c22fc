//! Compile scenario definitions into runtime thermostat models.

use tc_controls::{BangBangController, Controller, ProportionalController};
use tc_project::{LoopDef, ScenarioDef};
use tc_sim::{NewtonCoolingPlant, Plant, SimOptions, SwitchedPlant, ThermostatModel};

use crate::error::{AppError, AppResult};

/// Build the controller/plant pair and run options for a scenario.
pub fn compile_scenario(scenario: &ScenarioDef) -> AppResult<(ThermostatModel, SimOptions)> {
    let (controller, plant): (Controller, Plant) = match &scenario.loop_kind {
        LoopDef::BangBang {
            heat_rate,
            cool_rate,
        } => (
            BangBangController::new(scenario.setpoint)?.into(),
            SwitchedPlant::new(*heat_rate, *cool_rate)
                .map_err(|e| AppError::Compile(e.to_string()))?
                .into(),
        ),
        LoopDef::Proportional {
            kp,
            heater_effect,
            cooling_coefficient,
        } => (
            ProportionalController::new(scenario.setpoint, *kp)?.into(),
            NewtonCoolingPlant::new(
                *heater_effect,
                *cooling_coefficient,
                scenario.ambient_temperature,
            )
            .map_err(|e| AppError::Compile(e.to_string()))?
            .into(),
        ),
    };

    let model =
        ThermostatModel::new(controller, plant).map_err(|e| AppError::Compile(e.to_string()))?;
    let opts = SimOptions {
        steps: scenario.steps,
        initial_temperature: scenario.initial_temperature,
    };

    tracing::debug!(
        scenario = %scenario.name,
        loop_type = scenario.loop_kind.type_name(),
        steps = opts.steps,
        "compiled scenario"
    );

    Ok((model, opts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_controls::ControllerKind;
    use tc_project::presets;
    use tc_sim::PlantKind;

    #[test]
    fn compiles_bang_bang() {
        let (model, opts) = compile_scenario(&presets::bang_bang()).unwrap();
        assert_eq!(model.controller.kind(), ControllerKind::BangBang);
        assert_eq!(model.plant.kind(), PlantKind::Switched);
        assert_eq!(opts.steps, 100);
        assert_eq!(opts.initial_temperature, 20.0);
    }

    #[test]
    fn compiles_proportional_with_ambient() {
        let mut scenario = presets::proportional();
        scenario.ambient_temperature = 15.0;
        let (model, opts) = compile_scenario(&scenario).unwrap();
        assert_eq!(opts.steps, 200);
        match &model.plant {
            Plant::NewtonCooling(p) => assert_eq!(p.ambient, 15.0),
            other => panic!("unexpected plant {other:?}"),
        }
    }

    #[test]
    fn non_finite_parameter_fails_compile() {
        let mut scenario = presets::bang_bang();
        scenario.setpoint = f64::NAN;
        assert!(matches!(
            compile_scenario(&scenario),
            Err(AppError::Compile(_))
        ));
    }
}
