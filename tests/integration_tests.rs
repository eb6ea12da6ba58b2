use group_check::domain::ports::{ConfigProvider, GroupSource};
use group_check::utils::validation::Validate;
use group_check::{report, CheckEngine, CheckError, CliConfig, FileSource};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_roster(dir: &Path, name: &str, json: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, json).unwrap();
    path.to_str().unwrap().to_string()
}

fn config_for(previous: String, proposed: String) -> CliConfig {
    CliConfig {
        previous_groups: previous,
        proposed_groups: proposed,
        json: false,
        verbose: false,
    }
}

#[test]
fn test_end_to_end_with_conflicts_and_missing() {
    let temp_dir = TempDir::new().unwrap();
    let previous = write_roster(
        temp_dir.path(),
        "previous.json",
        r#"[["Alice", "Bob", "Charlie"], ["David", "Eve"]]"#,
    );
    let proposed = write_roster(
        temp_dir.path(),
        "proposed.json",
        r#"[["Alice", "Bob", "Frank"], ["David", "Grace"]]"#,
    );

    let engine = CheckEngine::new(FileSource, config_for(previous, proposed));
    let result = engine.run().unwrap();

    assert!(result.has_conflicts);
    assert_eq!(result.num_conflicts, 1);
    assert_eq!(result.conflicts[0].group_index, 0);
    assert_eq!(result.conflicts[0].conflicts[0].students, ["Alice", "Bob"]);

    assert!(result.has_missing);
    assert_eq!(result.missing_students, vec!["Charlie", "Eve"]);
    assert_eq!(result.num_missing, 2);
}

#[test]
fn test_end_to_end_clean_proposal() {
    let temp_dir = TempDir::new().unwrap();
    let previous = write_roster(
        temp_dir.path(),
        "previous.json",
        r#"[["Alice", "Bob"], ["Charlie", "David"]]"#,
    );
    let proposed = write_roster(
        temp_dir.path(),
        "proposed.json",
        r#"[["Alice", "Charlie"], ["Bob", "David"]]"#,
    );

    let engine = CheckEngine::new(FileSource, config_for(previous, proposed));
    let result = engine.run().unwrap();

    assert!(!result.has_conflicts);
    assert!(!result.has_missing);
    assert!(result.conflicts.is_empty());
    assert!(result.missing_students.is_empty());
}

#[test]
fn test_load_valid_file_preserves_rosters() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_roster(
        temp_dir.path(),
        "groups.json",
        r#"[["Alice", "Bob", "Charlie"], ["David", "Eve", "Frank"]]"#,
    );

    let groups = FileSource.load_groups(&path).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0], vec!["Alice", "Bob", "Charlie"]);
    assert_eq!(groups[1], vec!["David", "Eve", "Frank"]);
}

#[test]
fn test_load_nonexistent_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nonexistent.json");

    let err = FileSource
        .load_groups(path.to_str().unwrap())
        .unwrap_err();
    assert!(matches!(err, CheckError::FileNotFound { .. }));
}

#[test]
fn test_load_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_roster(temp_dir.path(), "empty.json", "   \n");

    let err = FileSource.load_groups(&path).unwrap_err();
    assert!(matches!(err, CheckError::EmptyFile { .. }));
}

#[test]
fn test_load_invalid_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_roster(temp_dir.path(), "invalid.json", "{ invalid json }");

    let err = FileSource.load_groups(&path).unwrap_err();
    assert!(matches!(err, CheckError::JsonError { .. }));
}

#[test]
fn test_load_wrong_structure() {
    let temp_dir = TempDir::new().unwrap();

    let not_a_list = write_roster(
        temp_dir.path(),
        "object.json",
        r#"{"groups": [["Alice", "Bob"]]}"#,
    );
    assert!(matches!(
        FileSource.load_groups(&not_a_list).unwrap_err(),
        CheckError::InvalidFormat { .. }
    ));

    let group_not_a_list = write_roster(
        temp_dir.path(),
        "string_group.json",
        r#"[["Alice", "Bob"], "Invalid Group"]"#,
    );
    assert!(matches!(
        FileSource.load_groups(&group_not_a_list).unwrap_err(),
        CheckError::InvalidFormat { .. }
    ));

    let numeric_members = write_roster(
        temp_dir.path(),
        "numbers.json",
        r#"[["Alice", "Bob"], [1, 2, 3]]"#,
    );
    assert!(matches!(
        FileSource.load_groups(&numeric_members).unwrap_err(),
        CheckError::InvalidFormat { .. }
    ));
}

#[test]
fn test_engine_propagates_load_errors() {
    let temp_dir = TempDir::new().unwrap();
    let previous = write_roster(temp_dir.path(), "previous.json", r#"[["Alice", "Bob"]]"#);
    let missing = temp_dir
        .path()
        .join("missing.json")
        .to_str()
        .unwrap()
        .to_string();

    let engine = CheckEngine::new(FileSource, config_for(previous, missing));
    assert!(matches!(
        engine.run(),
        Err(CheckError::FileNotFound { .. })
    ));
}

#[test]
fn test_json_output_matches_result_contract() {
    let temp_dir = TempDir::new().unwrap();
    let previous = write_roster(temp_dir.path(), "previous.json", r#"[["Alice", "Bob"]]"#);
    let proposed = write_roster(
        temp_dir.path(),
        "proposed.json",
        r#"[["Bob", "Alice", "Carol"]]"#,
    );

    let engine = CheckEngine::new(FileSource, config_for(previous, proposed));
    let result = engine.run().unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&report::render_json(&result).unwrap()).unwrap();

    assert_eq!(value["has_conflicts"], true);
    assert_eq!(value["num_conflicts"], 1);
    assert_eq!(value["conflicts"][0]["group_index"], 0);
    assert_eq!(
        value["conflicts"][0]["group_members"],
        serde_json::json!(["Bob", "Alice", "Carol"])
    );
    assert_eq!(
        value["conflicts"][0]["conflicts"][0]["students"],
        serde_json::json!(["Bob", "Alice"])
    );
    assert_eq!(
        value["conflicts"][0]["conflicts"][0]["pair"],
        serde_json::json!(["Alice", "Bob"])
    );
    assert_eq!(value["has_missing"], false);
}

#[test]
fn test_config_provider_and_validation() {
    let config = config_for("previous.json".to_string(), "proposed.json".to_string());
    assert_eq!(config.previous_path(), "previous.json");
    assert_eq!(config.proposed_path(), "proposed.json");
    assert!(!config.json_output());
    assert!(config.validate().is_ok());

    let bad = config_for(String::new(), "proposed.json".to_string());
    assert!(bad.validate().is_err());
}
