//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

/// One thermostat run: initial conditions, controller and plant parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioDef {
    pub version: u32,
    pub name: String,
    pub steps: usize,
    pub initial_temperature: f64,
    pub ambient_temperature: f64,
    pub setpoint: f64,
    #[serde(rename = "loop")]
    pub loop_kind: LoopDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<LabelsDef>,
}

impl ScenarioDef {
    /// Labels from the file, or the defaults for the loop kind.
    pub fn effective_labels(&self) -> LabelsDef {
        self.labels
            .clone()
            .unwrap_or_else(|| self.loop_kind.default_labels())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum LoopDef {
    BangBang {
        heat_rate: f64,
        cool_rate: f64,
    },
    Proportional {
        kp: f64,
        heater_effect: f64,
        cooling_coefficient: f64,
    },
}

impl LoopDef {
    pub fn default_labels(&self) -> LabelsDef {
        match self {
            LoopDef::BangBang { .. } => LabelsDef {
                series: "Temperature".to_string(),
                reference: "Setpoint".to_string(),
            },
            LoopDef::Proportional { .. } => LabelsDef {
                series: "Temperature (P-control)".to_string(),
                reference: "Setpoint".to_string(),
            },
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            LoopDef::BangBang { .. } => "BangBang",
            LoopDef::Proportional { .. } => "Proportional",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelsDef {
    pub series: String,
    pub reference: String,
}
