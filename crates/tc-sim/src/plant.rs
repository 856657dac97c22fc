//! First-order thermal plant models.
//!
//! Each plant maps (actuator command, current temperature) to the temperature
//! one step later. Arithmetic is unguarded: temperatures may leave any
//! physical range and pathological gains may overflow to infinity.

use serde::{Deserialize, Serialize};
use std::fmt;
use tc_controls::{ActuatorCommand, ControllerKind, HeaterState};
use tc_core::ensure_finite;

use crate::error::{SimError, SimResult};

/// Heater that adds a fixed increment when on and loses a fixed decrement when off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchedPlant {
    /// Temperature gained per step with the heater on.
    pub heat_rate: f64,
    /// Temperature lost per step with the heater off.
    pub cool_rate: f64,
}

impl SwitchedPlant {
    pub fn new(heat_rate: f64, cool_rate: f64) -> SimResult<Self> {
        let heat_rate = ensure_finite(heat_rate, "heat_rate must be finite")?;
        let cool_rate = ensure_finite(cool_rate, "cool_rate must be finite")?;
        Ok(Self {
            heat_rate,
            cool_rate,
        })
    }

    pub fn next_temperature(&self, heater: HeaterState, temperature: f64) -> f64 {
        match heater {
            HeaterState::On => temperature + self.heat_rate,
            HeaterState::Off => temperature - self.cool_rate,
        }
    }
}

/// Proportional heater with Newton-style loss toward ambient.
///
/// One step applies heating first, then cooling on the heated temperature:
///
/// ```text
/// t' = t + power * heater_effect
/// t'' = t' - cooling_coefficient * (t' - ambient)
/// ```
///
/// Negative power cools the plant; there is no saturation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewtonCoolingPlant {
    /// Temperature change per unit of heater power per step.
    pub heater_effect: f64,
    /// Fraction of the excess over ambient lost per step.
    pub cooling_coefficient: f64,
    /// Ambient temperature.
    pub ambient: f64,
}

impl NewtonCoolingPlant {
    pub fn new(heater_effect: f64, cooling_coefficient: f64, ambient: f64) -> SimResult<Self> {
        let heater_effect = ensure_finite(heater_effect, "heater_effect must be finite")?;
        let cooling_coefficient =
            ensure_finite(cooling_coefficient, "cooling_coefficient must be finite")?;
        let ambient = ensure_finite(ambient, "ambient must be finite")?;
        Ok(Self {
            heater_effect,
            cooling_coefficient,
            ambient,
        })
    }

    pub fn next_temperature(&self, power: f64, temperature: f64) -> f64 {
        let mut t = temperature;
        t += power * self.heater_effect;
        t -= self.cooling_coefficient * (t - self.ambient);
        t
    }
}

/// Discriminant of [`Plant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlantKind {
    Switched,
    NewtonCooling,
}

impl fmt::Display for PlantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Switched => write!(f, "switched"),
            Self::NewtonCooling => write!(f, "newton-cooling"),
        }
    }
}

/// Any thermal plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Plant {
    Switched(SwitchedPlant),
    NewtonCooling(NewtonCoolingPlant),
}

impl Plant {
    pub fn kind(&self) -> PlantKind {
        match self {
            Self::Switched(_) => PlantKind::Switched,
            Self::NewtonCooling(_) => PlantKind::NewtonCooling,
        }
    }

    /// Whether commands from this controller kind can drive the plant.
    pub fn accepts(&self, controller: ControllerKind) -> bool {
        matches!(
            (self, controller),
            (Self::Switched(_), ControllerKind::BangBang)
                | (Self::NewtonCooling(_), ControllerKind::Proportional)
        )
    }

    /// Advance the temperature by one step under the given command.
    pub fn respond(&self, command: ActuatorCommand, temperature: f64) -> SimResult<f64> {
        let next = match self {
            Self::Switched(p) => command
                .as_switch()
                .map(|heater| p.next_temperature(heater, temperature)),
            Self::NewtonCooling(p) => command
                .as_power()
                .map(|power| p.next_temperature(power, temperature)),
        };
        next.ok_or_else(|| SimError::ActuatorMismatch {
            controller: command.controller_kind(),
            plant: self.kind(),
        })
    }
}

impl From<SwitchedPlant> for Plant {
    fn from(p: SwitchedPlant) -> Self {
        Self::Switched(p)
    }
}

impl From<NewtonCoolingPlant> for Plant {
    fn from(p: NewtonCoolingPlant) -> Self {
        Self::NewtonCooling(p)
    }
}
