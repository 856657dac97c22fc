//! Error types for control system operations.

use thiserror::Error;

/// Result type for control system operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors that can occur in control system operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// Invalid argument provided to a controller constructor.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl From<tc_core::TcError> for ControlError {
    fn from(e: tc_core::TcError) -> Self {
        match e {
            tc_core::TcError::NonFinite { what, .. } => ControlError::InvalidArg { what },
        }
    }
}
