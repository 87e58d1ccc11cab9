//! Integration tests for the tagalign CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const NEW_YORK: &str = r#"{"tokens": ["I", "love", "New", "York"], "entities": [{"start_offset": 7, "end_offset": 14, "label": "LOC"}, {"start_offset": 7, "end_offset": 9, "label": "LOC"}]}"#;
const PARIS: &str = r#"{"text": "Paris", "tokens": ["Paris"], "entities": [{"start_offset": 0, "end_offset": 4, "label": "LOC"}]}"#;
const MISALIGNED: &str = r#"{"tokens": ["Paris"], "entities": [{"start_offset": 1, "end_offset": 4, "label": "LOC"}]}"#;

fn tagalign() -> Command {
    Command::cargo_bin("tagalign").unwrap()
}

fn write_input(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, lines.join("\n") + "\n").unwrap();
    path
}

#[test]
fn test_convert_iob2_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "docs.jsonl", &[NEW_YORK, PARIS]);

    tagalign()
        .arg("convert")
        .arg("-i")
        .arg(&input)
        .arg("--quiet")
        .assert()
        .success()
        .stdout("I\tO\nlove\tO\nNew\tB-LOC\nYork\tI-LOC\n\nParis\tB-LOC\n");
}

#[test]
fn test_convert_bilou_to_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "docs.jsonl", &[NEW_YORK, PARIS]);
    let output = dir.path().join("out.bilou");

    tagalign()
        .args(["convert", "-f", "bilou", "-q", "-o"])
        .arg(&output)
        .arg("-i")
        .arg(&input)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("New\tB-LOC\nYork\tL-LOC"));
    assert!(written.contains("Paris\tU-LOC"));
}

#[test]
fn test_convert_jsonl_raw_view() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "docs.jsonl", &[PARIS]);

    let assert = tagalign()
        .args(["convert", "-f", "jsonl", "--view", "raw", "-q", "-i"])
        .arg(&input)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim_end()).unwrap();
    assert_eq!(value["text"], serde_json::json!(["P", "a", "r", "i", "s"]));
    assert_eq!(value["tags"][0]["end_offset"], 4);
}

#[test]
fn test_convert_glob_pattern() {
    let dir = TempDir::new().unwrap();
    write_input(&dir, "a.jsonl", &[PARIS]);
    write_input(&dir, "b.jsonl", &[PARIS]);
    let pattern = dir.path().join("*.jsonl");

    tagalign()
        .args(["convert", "-q", "-i"])
        .arg(pattern.to_str().unwrap())
        .assert()
        .success()
        .stdout("Paris\tB-LOC\n\nParis\tB-LOC\n");
}

#[test]
fn test_convert_overlap_without_filter_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "docs.jsonl", &[NEW_YORK]);

    tagalign()
        .args(["convert", "--filter", "none", "-q", "-i"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("docs.jsonl:1"))
        .stderr(predicate::str::contains("overlapping spans"));
}

#[test]
fn test_convert_skip_invalid() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "docs.jsonl", &[MISALIGNED, PARIS]);

    tagalign()
        .args(["convert", "--skip-invalid", "-q", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout("Paris\tB-LOC\n");
}

#[test]
fn test_convert_malformed_json_reports_line() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "docs.jsonl", &[PARIS, "{not json"]);

    tagalign()
        .args(["convert", "-q", "-i"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("docs.jsonl:2"));
}

#[test]
fn test_convert_with_config_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "docs.jsonl", &[PARIS, PARIS]);
    let config = dir.path().join("tagalign.toml");
    fs::write(
        &config,
        "[conversion]\nformat = \"bilou\"\n\n[output]\ndocument_separator = \"\\n---\\n\"\n",
    )
    .unwrap();

    tagalign()
        .args(["convert", "-q", "-c"])
        .arg(&config)
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout("Paris\tU-LOC\n---\nParis\tU-LOC\n");
}

#[test]
fn test_convert_missing_file() {
    tagalign()
        .args(["convert", "-q", "-i", "/nonexistent/docs.jsonl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_convert_unknown_format() {
    tagalign()
        .args(["convert", "-f", "conll", "-i", "docs.jsonl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("conll"));
}

#[test]
fn test_validate_clean_input() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "docs.jsonl", &[NEW_YORK, PARIS]);

    tagalign()
        .args(["validate", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked 2 record(s) in 1 file(s): 0 problem(s)"));
}

#[test]
fn test_validate_reports_problems() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "docs.jsonl", &[PARIS, MISALIGNED, NEW_YORK]);

    tagalign()
        .args(["validate", "--filter", "none", "-i"])
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains("docs.jsonl:2: entity LOC[1, 4] does not align"))
        .stdout(predicate::str::contains("docs.jsonl:3: entities"))
        .stderr(predicate::str::contains("Validation failed: 2 problem(s) found"));
}

#[test]
fn test_list_formats() {
    tagalign()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jsonl"))
        .stdout(predicate::str::contains("iob2"))
        .stdout(predicate::str::contains("bilou"));
}

#[test]
fn test_list_views() {
    tagalign()
        .args(["list", "views"])
        .assert()
        .success()
        .stdout(predicate::str::contains("raw"))
        .stdout(predicate::str::contains("token"));
}

#[test]
fn test_generate_config_round_trip() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("tagalign.toml");

    tagalign()
        .args(["generate-config", "-o"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration written"));

    let input = write_input(&dir, "docs.jsonl", &[PARIS]);
    tagalign()
        .args(["convert", "-q", "-c"])
        .arg(&config)
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout("Paris\tB-LOC\n");
}

#[test]
fn test_help_and_version() {
    tagalign()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("validate"));

    tagalign()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tagalign"));
}
