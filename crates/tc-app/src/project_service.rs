//! Scenario loading and preset management.

use std::path::Path;

use tc_project::{PRESET_NAMES, ScenarioDef};

use crate::error::{AppError, AppResult};

/// Summary information about a built-in scenario.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PresetSummary {
    pub name: String,
    pub loop_type: &'static str,
    pub steps: usize,
    pub setpoint: f64,
}

/// Load a scenario file. `.json` files are read as JSON, everything else as YAML.
pub fn load_scenario(path: &Path) -> AppResult<ScenarioDef> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let loaded = if is_json {
        tc_project::load_json(path)
    } else {
        tc_project::load_yaml(path)
    };

    loaded.map_err(|source| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Look up a built-in scenario by name.
pub fn load_preset(name: &str) -> AppResult<ScenarioDef> {
    Ok(tc_project::preset(name)?)
}

/// List all built-in scenarios.
pub fn list_presets() -> Vec<PresetSummary> {
    PRESET_NAMES
        .iter()
        .filter_map(|name| tc_project::preset(name).ok())
        .map(|s| PresetSummary {
            loop_type: s.loop_kind.type_name(),
            steps: s.steps,
            setpoint: s.setpoint,
            name: s.name,
        })
        .collect()
}

/// Write a built-in scenario to a YAML file for editing.
pub fn export_preset(name: &str, path: &Path) -> AppResult<()> {
    let scenario = load_preset(name)?;
    tc_project::save_yaml(path, &scenario)?;
    tracing::info!(preset = name, path = %path.display(), "exported preset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all_presets() {
        let presets = list_presets();
        assert_eq!(presets.len(), PRESET_NAMES.len());
        assert_eq!(presets[0].name, "bang-bang");
        assert_eq!(presets[0].loop_type, "BangBang");
        assert_eq!(presets[1].steps, 200);
    }

    #[test]
    fn unknown_preset_is_project_error() {
        assert!(matches!(load_preset("nope"), Err(AppError::Project(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = Path::new("/definitely/not/here.yaml");
        let err = load_scenario(path).unwrap_err();
        assert!(err.to_string().contains("here.yaml"));
    }
}
