//! Controller implementations.
//!
//! Provides the two thermostat strategies:
//! - **Bang-bang**: binary threshold at the setpoint, no hysteresis
//! - **Proportional**: `kp * (setpoint - temperature)`, no saturation
//!
//! Both are pure: the output depends only on the current temperature and the
//! fixed configuration.

use crate::actuator::{ActuatorCommand, HeaterState};
use crate::error::ControlResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use tc_core::ensure_finite;

/// Bang-bang (on/off) controller configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BangBangController {
    /// Target temperature.
    pub setpoint: f64,
}

impl BangBangController {
    /// Create a new bang-bang controller.
    pub fn new(setpoint: f64) -> ControlResult<Self> {
        let setpoint = ensure_finite(setpoint, "setpoint must be finite")?;
        Ok(Self { setpoint })
    }

    /// Heater is on strictly below the setpoint and off at or above it.
    pub fn command(&self, temperature: f64) -> HeaterState {
        if temperature < self.setpoint {
            HeaterState::On
        } else {
            HeaterState::Off
        }
    }
}

/// Proportional controller configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProportionalController {
    /// Target temperature.
    pub setpoint: f64,
    /// Proportional gain.
    pub kp: f64,
}

impl ProportionalController {
    /// Create a new proportional controller.
    ///
    /// # Arguments
    ///
    /// * `setpoint` - Target temperature
    /// * `kp` - Proportional gain (any finite value, including zero or negative)
    pub fn new(setpoint: f64, kp: f64) -> ControlResult<Self> {
        let setpoint = ensure_finite(setpoint, "setpoint must be finite")?;
        let kp = ensure_finite(kp, "kp must be finite")?;
        Ok(Self { setpoint, kp })
    }

    /// Error: positive when the temperature is below the setpoint.
    pub fn error(&self, temperature: f64) -> f64 {
        self.setpoint - temperature
    }

    /// Heater power. May be negative when above the setpoint.
    pub fn command(&self, temperature: f64) -> f64 {
        self.kp * self.error(temperature)
    }
}

/// Discriminant of [`Controller`], used for labels and pairing checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControllerKind {
    BangBang,
    Proportional,
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BangBang => write!(f, "bang-bang"),
            Self::Proportional => write!(f, "proportional"),
        }
    }
}

/// Any thermostat controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Controller {
    BangBang(BangBangController),
    Proportional(ProportionalController),
}

impl Controller {
    pub fn kind(&self) -> ControllerKind {
        match self {
            Self::BangBang(_) => ControllerKind::BangBang,
            Self::Proportional(_) => ControllerKind::Proportional,
        }
    }

    pub fn setpoint(&self) -> f64 {
        match self {
            Self::BangBang(c) => c.setpoint,
            Self::Proportional(c) => c.setpoint,
        }
    }

    /// Compute the actuator command for the current temperature.
    pub fn command(&self, temperature: f64) -> ActuatorCommand {
        match self {
            Self::BangBang(c) => ActuatorCommand::Switch(c.command(temperature)),
            Self::Proportional(c) => ActuatorCommand::Power(c.command(temperature)),
        }
    }
}

impl From<BangBangController> for Controller {
    fn from(c: BangBangController) -> Self {
        Self::BangBang(c)
    }
}

impl From<ProportionalController> for Controller {
    fn from(c: ProportionalController) -> Self {
        Self::Proportional(c)
    }
}
