//! Error types for simulation operations.

use tc_controls::ControllerKind;
use thiserror::Error;

use crate::plant::PlantKind;

/// Errors encountered while building or running a thermostat simulation.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Actuator mismatch: {controller} controller cannot drive a {plant} plant")]
    ActuatorMismatch {
        controller: ControllerKind,
        plant: PlantKind,
    },

    #[error("Render failed: {message}")]
    Render { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;

impl From<tc_core::TcError> for SimError {
    fn from(e: tc_core::TcError) -> Self {
        match e {
            tc_core::TcError::NonFinite { what, .. } => SimError::InvalidArg { what },
        }
    }
}
