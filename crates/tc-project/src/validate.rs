//! Scenario validation logic.

use crate::schema::{LoopDef, ScenarioDef};

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &ScenarioDef) -> Result<(), ValidationError> {
    if scenario.version == 0 || scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    if scenario.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            value: format!("{:?}", scenario.name),
            reason: "must not be empty".to_string(),
        });
    }

    if scenario.steps == 0 {
        return Err(ValidationError::InvalidValue {
            field: "steps".to_string(),
            value: "0".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    check_finite("initial_temperature", scenario.initial_temperature)?;
    check_finite("ambient_temperature", scenario.ambient_temperature)?;
    check_finite("setpoint", scenario.setpoint)?;

    match &scenario.loop_kind {
        LoopDef::BangBang {
            heat_rate,
            cool_rate,
        } => {
            check_finite("loop.heat_rate", *heat_rate)?;
            check_finite("loop.cool_rate", *cool_rate)?;
        }
        LoopDef::Proportional {
            kp,
            heater_effect,
            cooling_coefficient,
        } => {
            check_finite("loop.kp", *kp)?;
            check_finite("loop.heater_effect", *heater_effect)?;
            check_finite("loop.cooling_coefficient", *cooling_coefficient)?;
        }
    }

    if let Some(labels) = &scenario.labels {
        for (field, value) in [
            ("labels.series", &labels.series),
            ("labels.reference", &labels.reference),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: field.to_string(),
                    value: format!("{:?}", value),
                    reason: "must not be empty".to_string(),
                });
            }
        }
    }

    Ok(())
}

fn check_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    tc_core::ensure_finite(value, "scenario value").map_err(|_| {
        ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be finite".to_string(),
        }
    })?;
    Ok(())
}
