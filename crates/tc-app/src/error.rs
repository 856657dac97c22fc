//! Error types for the tc-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: tc_project::ProjectError,
    },

    #[error("Runtime compilation failed: {0}")]
    Compile(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tc-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<tc_project::ProjectError> for AppError {
    fn from(err: tc_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<tc_project::ValidationError> for AppError {
    fn from(err: tc_project::ValidationError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<tc_controls::ControlError> for AppError {
    fn from(err: tc_controls::ControlError) -> Self {
        AppError::Compile(err.to_string())
    }
}

impl From<tc_sim::SimError> for AppError {
    fn from(err: tc_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}
