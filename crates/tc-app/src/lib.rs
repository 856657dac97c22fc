//! Shared application service layer for thermocontrol.
//!
//! Turns scenario definitions into runnable thermostat models, runs them and
//! summarizes the results. Front ends call into this crate rather than
//! wiring the simulation crates together themselves.

pub mod error;
pub mod project_service;
pub mod run_service;
pub mod runtime_compile;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use project_service::{PresetSummary, export_preset, list_presets, load_preset, load_scenario};
pub use run_service::{RunResponse, run_scenario};
pub use runtime_compile::compile_scenario;
