//! Render-sink contract.
//!
//! A finished trajectory is handed to a sink together with the setpoint,
//! which the sink draws as a horizontal reference line. What the sink does
//! with it (chart, table, file) is outside the simulation core.

use serde::{Deserialize, Serialize};

use crate::error::SimResult;
use crate::state::Trajectory;

/// Legend labels for a rendered run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesLabels {
    pub series_label: String,
    pub reference_label: String,
}

impl SeriesLabels {
    pub fn new(series_label: impl Into<String>, reference_label: impl Into<String>) -> Self {
        Self {
            series_label: series_label.into(),
            reference_label: reference_label.into(),
        }
    }
}

impl Default for SeriesLabels {
    fn default() -> Self {
        Self::new("Temperature", "Setpoint")
    }
}

/// Consumer of a completed trajectory.
pub trait TrajectorySink {
    /// Render `series` with a horizontal reference line at `reference_line`.
    fn render(
        &mut self,
        series: &Trajectory,
        reference_line: f64,
        labels: &SeriesLabels,
    ) -> SimResult<()>;
}
