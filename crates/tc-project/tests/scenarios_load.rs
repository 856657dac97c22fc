use std::path::PathBuf;
use tc_project::{LoopDef, load_json, load_yaml, presets};

fn scenarios_dir() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // go to crates
    dir.pop(); // go to repo root
    dir.push("scenarios");
    dir
}

#[test]
fn bundled_yaml_matches_preset() {
    let loaded = load_yaml(&scenarios_dir().join("bang_bang.yaml")).unwrap();
    assert_eq!(loaded, presets::bang_bang());
}

#[test]
fn bundled_proportional_yaml_carries_labels() {
    let loaded = load_yaml(&scenarios_dir().join("proportional.yaml")).unwrap();
    assert_eq!(loaded.steps, 200);
    assert_eq!(loaded.loop_kind, presets::proportional().loop_kind);
    assert_eq!(
        loaded.effective_labels(),
        presets::proportional().effective_labels()
    );
}

#[test]
fn bundled_json_loads() {
    let loaded = load_json(&scenarios_dir().join("proportional_gentle.json")).unwrap();
    assert!(matches!(loaded.loop_kind, LoopDef::Proportional { kp, .. } if kp == 5.0));
    assert!(loaded.labels.is_none());
}

#[test]
fn malformed_yaml_is_an_error() {
    let path = std::env::temp_dir().join("tc_project_malformed.yaml");
    std::fs::write(&path, "version: 1\nname: broken\nloop:\n  type: Integral\n").unwrap();
    assert!(load_yaml(&path).is_err());
}
