//! Run execution service.

use serde::Serialize;
use tc_project::ScenarioDef;
use tc_sim::{SeriesLabels, SimRecord, TrajectorySummary, run_sim};

use crate::error::{AppError, AppResult};
use crate::runtime_compile::compile_scenario;

/// Outcome of a completed scenario run.
#[derive(Debug, Clone, Serialize)]
pub struct RunResponse {
    pub scenario_name: String,
    pub record: SimRecord,
    pub labels: SeriesLabels,
    pub summary: TrajectorySummary,
    /// Analytic fixed point, for loops that have one.
    pub equilibrium: Option<f64>,
    /// Per-step error contraction around the fixed point.
    pub error_multiplier: Option<f64>,
}

/// Validate, compile and run a scenario.
pub fn run_scenario(scenario: &ScenarioDef) -> AppResult<RunResponse> {
    tc_project::validate_scenario(scenario)?;
    let (model, opts) = compile_scenario(scenario)?;

    let record = run_sim(&model, &opts)?;
    let summary = TrajectorySummary::from_record(&record)
        .ok_or_else(|| AppError::InvalidInput("Run produced no samples".to_string()))?;

    let labels = scenario.effective_labels();
    tracing::info!(
        scenario = %scenario.name,
        samples = summary.samples,
        final_temperature = summary.final_temperature,
        "run finished"
    );

    Ok(RunResponse {
        scenario_name: scenario.name.clone(),
        equilibrium: model.equilibrium(),
        error_multiplier: model.error_multiplier(),
        record,
        labels: SeriesLabels::new(labels.series, labels.reference),
        summary,
    })
}
