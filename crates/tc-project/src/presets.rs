//! Built-in scenarios.

use crate::schema::{LoopDef, ScenarioDef};
use crate::validate::LATEST_VERSION;
use crate::{ProjectError, ProjectResult};

pub const PRESET_NAMES: [&str; 3] = ["bang-bang", "proportional", "proportional-c"];

/// Look up a built-in scenario by name.
pub fn preset(name: &str) -> ProjectResult<ScenarioDef> {
    match name {
        "bang-bang" => Ok(bang_bang()),
        "proportional" => Ok(proportional()),
        "proportional-c" => Ok(proportional_console()),
        _ => Err(ProjectError::UnknownPreset {
            name: name.to_string(),
        }),
    }
}

/// On/off heater: +5 per step below 50, -2 per step otherwise, 100 steps.
pub fn bang_bang() -> ScenarioDef {
    ScenarioDef {
        version: LATEST_VERSION,
        name: "bang-bang".to_string(),
        steps: 100,
        initial_temperature: 20.0,
        ambient_temperature: 20.0,
        setpoint: 50.0,
        loop_kind: LoopDef::BangBang {
            heat_rate: 5.0,
            cool_rate: 2.0,
        },
        labels: None,
    }
}

/// Proportional heater with Newton cooling, Kp = 20.4, 200 steps.
pub fn proportional() -> ScenarioDef {
    ScenarioDef {
        version: LATEST_VERSION,
        name: "proportional".to_string(),
        steps: 200,
        initial_temperature: 20.0,
        ambient_temperature: 20.0,
        setpoint: 50.0,
        loop_kind: LoopDef::Proportional {
            kp: 20.4,
            heater_effect: 0.05,
            cooling_coefficient: 0.02,
        },
        labels: None,
    }
}

/// Same plant as [`proportional`] with the console-trace gain Kp = 21.00001.
pub fn proportional_console() -> ScenarioDef {
    ScenarioDef {
        name: "proportional-c".to_string(),
        loop_kind: LoopDef::Proportional {
            kp: 21.00001,
            heater_effect: 0.05,
            cooling_coefficient: 0.02,
        },
        ..proportional()
    }
}
