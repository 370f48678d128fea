//! Integration tests for the command layer.

use std::fs;

use rxb_builder::PatternBuilder;
use rxb_cli::commands::{check_inputs, date_rows, describe_pattern, load_recipe, read_input};
use rxb_dates::DateExtractor;

fn write_recipe(dir: &tempfile::TempDir, builder: &PatternBuilder) -> std::path::PathBuf {
    let path = dir.path().join("recipe.json");
    fs::write(&path, builder.to_json().unwrap()).unwrap();
    path
}

#[test]
fn load_recipe_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut builder = PatternBuilder::new();
    builder
        .starts_with("id-")
        .numbers()
        .ends_with("")
        .case_sensitive(false);
    let path = write_recipe(&dir, &builder);

    let loaded = load_recipe(&path).unwrap();
    let report = describe_pattern(&loaded);

    assert_eq!(report.pattern, r"^id-\d+$");
    assert_eq!(report.flags, "i");
    assert_eq!(report.steps, 1);
}

#[test]
fn load_recipe_reports_missing_and_malformed_files() {
    let dir = tempfile::tempdir().unwrap();

    let missing = load_recipe(&dir.path().join("absent.json")).unwrap_err();
    assert!(format!("{missing:#}").contains("read recipe"));

    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"startsWith":"a"}"#).unwrap();
    let malformed = load_recipe(&path).unwrap_err();
    assert!(format!("{malformed:#}").contains("decode recipe"));
}

#[test]
fn check_inputs_reports_each_input() {
    let mut builder = PatternBuilder::new();
    builder.then("v").numbers();
    let inputs = vec!["release v12".to_string(), "no version".to_string()];

    let outcomes = check_inputs(&builder, &inputs).unwrap();

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].is_match());
    assert_eq!(outcomes[0].matched.as_deref(), Some("v12"));
    assert!(!outcomes[1].is_match());
}

#[test]
fn check_inputs_fails_on_bad_pattern() {
    let mut builder = PatternBuilder::new();
    builder.then("[unclosed");
    assert!(check_inputs(&builder, &["x".to_string()]).is_err());
}

#[test]
fn date_rows_mark_invalid_dates() {
    let rows = date_rows(
        "ok 10 08 28 08-10-4, bad 1999-13-01 00:00:00",
        DateExtractor::default(),
    );

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].raw, "10 08 28 08-10-4");
    assert_eq!(rows[0].normalized, "2010-08-28T08:10:04.000Z");
    assert_eq!(
        rows[0].timestamp.as_deref(),
        Some("2010-08-28T08:10:04.000Z")
    );
    assert!(!rows[1].is_valid());
    assert_eq!(rows[1].normalized, "1999-13-01T00:00:00.000Z");
}

#[test]
fn date_rows_serialize_as_json() {
    let rows = date_rows("1999-8-28T10:20:4.20Z", DateExtractor::default());
    let value = serde_json::to_value(&rows).unwrap();
    assert_eq!(value[0]["raw"], "1999-8-28T10:20:4.20Z");
    assert_eq!(value[0]["timestamp"], "1999-08-28T10:20:04.020Z");
}

#[test]
fn read_input_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, "hello").unwrap();
    assert_eq!(read_input(Some(&path)).unwrap(), "hello");
    assert!(read_input(Some(&dir.path().join("absent.txt"))).is_err());
}
