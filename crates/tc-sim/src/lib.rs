//! Discrete-time thermostat simulation for thermocontrol.
//!
//! Provides:
//! - First-order thermal plant models (switched heater, Newton cooling)
//! - A thermostat model pairing a controller with a compatible plant
//! - A fixed-length simulation driver producing an append-only trajectory
//! - The render-sink contract used to hand trajectories to a chart or report
//! - Trajectory summaries (extrema, overshoot, chatter)

pub mod error;
pub mod model;
pub mod plant;
pub mod render;
pub mod sim;
pub mod state;
pub mod summary;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use model::ThermostatModel;
pub use plant::{NewtonCoolingPlant, Plant, PlantKind, SwitchedPlant};
pub use render::{SeriesLabels, TrajectorySink};
pub use sim::{SimOptions, SimRecord, run_sim};
pub use state::{SimulationState, Trajectory};
pub use summary::TrajectorySummary;
