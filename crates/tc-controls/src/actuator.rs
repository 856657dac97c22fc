//! Actuator command types.
//!
//! The heater is driven either by a binary switch (bang-bang) or by a
//! continuous power level (proportional). The power level is not clamped:
//! a negative value asks the plant to remove heat.

use serde::{Deserialize, Serialize};

use crate::controller::ControllerKind;

/// Binary heater state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaterState {
    On,
    Off,
}

/// Command produced by a controller for one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActuatorCommand {
    /// On/off heater switch.
    Switch(HeaterState),
    /// Continuous heater power (arbitrary units, unclamped).
    Power(f64),
}

impl ActuatorCommand {
    /// Get the switch state, if this is a switch command.
    pub fn as_switch(&self) -> Option<HeaterState> {
        match self {
            Self::Switch(state) => Some(*state),
            Self::Power(_) => None,
        }
    }

    /// Get the power level, if this is a power command.
    pub fn as_power(&self) -> Option<f64> {
        match self {
            Self::Switch(_) => None,
            Self::Power(p) => Some(*p),
        }
    }

    /// Kind of controller that emits this command.
    pub fn controller_kind(&self) -> ControllerKind {
        match self {
            Self::Switch(_) => ControllerKind::BangBang,
            Self::Power(_) => ControllerKind::Proportional,
        }
    }
}
