//! Thermostat controllers for thermocontrol.
//!
//! A controller reads the current temperature and a fixed setpoint and
//! produces an actuator command for the plant. Two strategies exist:
//!
//! - **Bang-bang**: heater fully on below the setpoint, fully off otherwise
//! - **Proportional**: heater power linear in the setpoint error
//!
//! Both are pure functions of the instantaneous temperature. Neither keeps
//! internal state between steps, clamps its output, or applies a deadband.

pub mod actuator;
pub mod controller;
pub mod error;

pub use actuator::{ActuatorCommand, HeaterState};
pub use controller::{BangBangController, Controller, ControllerKind, ProportionalController};
pub use error::{ControlError, ControlResult};
