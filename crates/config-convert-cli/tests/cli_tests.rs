//! Integration tests for the `config-convert` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to run the actual binary over
//! fixture files, then re-parse what it wrote with each format's own crate.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures")).join(name)
}

/// Helper: a scratch path unique to one test, removed before use.
fn scratch(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "config-convert-test-{}-{name}",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

fn convert(input: &PathBuf, input_format: &str, output: &PathBuf, output_format: &str) -> Command {
    let mut cmd = Command::cargo_bin("config-convert").unwrap();
    cmd.arg(input)
        .arg(output)
        .args(["--input_format", input_format, "--output_format", output_format]);
    cmd
}

fn read_json(path: &PathBuf) -> serde_json::Value {
    let text = std::fs::read_to_string(path).expect("output file must exist");
    serde_json::from_str(&text).expect("output must be valid JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// Successful conversions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn json_to_yaml_example() {
    let input = scratch("example.json");
    let output = scratch("example.yaml");
    std::fs::write(&input, r#"{"a": 1, "b": [1,2,3]}"#).unwrap();

    convert(&input, "json", &output, "yaml")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = std::fs::read_to_string(&output).unwrap();
    let actual: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
    let expected: serde_yaml::Value = serde_yaml::from_str("{a: 1, b: [1, 2, 3]}").unwrap();
    assert_eq!(actual, expected);

    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);
}

#[test]
fn yaml_to_json_matches_fixture() {
    let output = scratch("from-yaml.json");

    convert(&fixture("sample.yaml"), "yaml", &output, "json")
        .assert()
        .success();

    assert_eq!(read_json(&output), read_json(&fixture("sample.json")));
    let _ = std::fs::remove_file(&output);
}

#[test]
fn toml_to_json_matches_fixture() {
    let output = scratch("from-toml.json");

    convert(&fixture("sample.toml"), "toml", &output, "json")
        .assert()
        .success();

    assert_eq!(read_json(&output), read_json(&fixture("sample.json")));
    let _ = std::fs::remove_file(&output);
}

#[test]
fn json_to_toml_matches_fixture() {
    let output = scratch("from-json.toml");

    convert(&fixture("sample.json"), "json", &output, "toml")
        .assert()
        .success();

    let actual: toml::Table = toml::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let expected: toml::Table =
        toml::from_str(&std::fs::read_to_string(fixture("sample.toml")).unwrap()).unwrap();
    assert_eq!(actual, expected);
    let _ = std::fs::remove_file(&output);
}

#[test]
fn json_output_uses_two_space_indent() {
    let output = scratch("indent.json");

    convert(&fixture("sample.yaml"), "yaml", &output, "json")
        .assert()
        .success();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("\n  \"name\": \"service\""), "got:\n{text}");
    assert!(text.contains("\n    \"host\": \"127.0.0.1\""), "got:\n{text}");
    let _ = std::fs::remove_file(&output);
}

#[test]
fn success_is_logged_at_info() {
    let output = scratch("logged.yaml");

    convert(&fixture("sample.json"), "json", &output, "yaml")
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO"))
        .stderr(predicate::str::contains("Successfully converted"))
        .stderr(predicate::str::contains("(json) to"));
    let _ = std::fs::remove_file(&output);
}

#[test]
fn same_format_warns_but_converts() {
    let output = scratch("same.yaml");

    convert(&fixture("sample.yaml"), "yaml", &output, "yaml")
        .assert()
        .success()
        .stderr(predicate::str::contains("WARN"))
        .stderr(predicate::str::contains("No conversion will occur"));

    let original: serde_yaml::Value =
        serde_yaml::from_str(&std::fs::read_to_string(fixture("sample.yaml")).unwrap()).unwrap();
    let rewritten: serde_yaml::Value =
        serde_yaml::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(original, rewritten);
    let _ = std::fs::remove_file(&output);
}

#[test]
fn same_file_rewritten_in_place() {
    let path = scratch("in-place.yaml");
    std::fs::copy(fixture("sample.yaml"), &path).unwrap();

    convert(&path, "yaml", &path, "yaml")
        .assert()
        .success()
        .stderr(predicate::str::contains("WARN"))
        .stderr(predicate::str::contains("No conversion will occur"));

    let original: serde_yaml::Value =
        serde_yaml::from_str(&std::fs::read_to_string(fixture("sample.yaml")).unwrap()).unwrap();
    let rewritten: serde_yaml::Value =
        serde_yaml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(original, rewritten);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn different_formats_do_not_warn() {
    let output = scratch("nowarn.toml");

    convert(&fixture("sample.yaml"), "yaml", &output, "toml")
        .assert()
        .success()
        .stderr(predicate::str::contains("No conversion will occur").not());
    let _ = std::fs::remove_file(&output);
}

#[test]
fn kebab_case_flags_are_accepted() {
    let output = scratch("kebab.json");

    Command::cargo_bin("config-convert")
        .unwrap()
        .arg(fixture("sample.toml"))
        .arg(&output)
        .args(["--input-format", "toml", "--output-format", "json"])
        .assert()
        .success();
    let _ = std::fs::remove_file(&output);
}

#[test]
fn top_level_list_converts_to_yaml() {
    let output = scratch("list.yaml");

    convert(&fixture("list.json"), "json", &output, "yaml")
        .assert()
        .success();

    let text = std::fs::read_to_string(&output).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
    assert_eq!(value, serde_yaml::from_str::<serde_yaml::Value>("[1, 2, 3]").unwrap());
    let _ = std::fs::remove_file(&output);
}

// ─────────────────────────────────────────────────────────────────────────────
// Failures
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn missing_input_exits_one() {
    let output = scratch("never.json");

    convert(&fixture("does-not-exist.yaml"), "yaml", &output, "json")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ERROR"))
        .stderr(predicate::str::contains("Input file not found"))
        .stderr(predicate::str::contains("does-not-exist.yaml"));

    assert!(!output.exists(), "no output should be written");
}

#[test]
fn invalid_input_exits_one() {
    let output = scratch("invalid.yaml");

    convert(&fixture("invalid.json"), "json", &output, "yaml")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error parsing JSON file"))
        .stderr(predicate::str::contains("line 2"));

    assert!(!output.exists(), "no output should be written");
}

#[test]
fn wrong_declared_format_is_a_parse_error() {
    let output = scratch("wrong.json");

    convert(&fixture("sample.yaml"), "toml", &output, "json")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error parsing TOML file"));
}

#[test]
fn top_level_list_to_toml_exits_one() {
    let output = scratch("list.toml");

    convert(&fixture("list.json"), "json", &output, "toml")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error writing TOML file"))
        .stderr(predicate::str::contains("document root must be a table"));

    assert!(!output.exists(), "encode failures must not create the output");
}

#[test]
fn unwritable_output_exits_one() {
    let output = std::env::temp_dir()
        .join(format!("config-convert-missing-dir-{}", std::process::id()))
        .join("out.json");

    convert(&fixture("sample.yaml"), "yaml", &output, "json")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to write output file"));
}

#[test]
fn unknown_format_is_rejected_by_clap() {
    let output = scratch("xml.out");

    convert(&fixture("sample.yaml"), "xml", &output, "json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("possible values"));
}

#[test]
fn format_flags_are_required() {
    Command::cargo_bin("config-convert")
        .unwrap()
        .arg(fixture("sample.yaml"))
        .arg(scratch("unused.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--input_format"));
}

#[test]
fn help_lists_formats() {
    Command::cargo_bin("config-convert")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("yaml"))
        .stdout(predicate::str::contains("toml"));
}
