//! Pipeline Tests
//!
//! End-to-end runs over files on disk:
//! - summary and valid-records files are written
//! - fatal input errors stop the run before any output is written
//! - legacy single-byte input is read through the fallback encoding

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use recval::cli::{self, Cli, Settings, SummaryTarget};
use recval::report::SummaryFormat;
use recval::schema::WorldviewSuffixes;
use serde_json::{json, Value};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn valid_doc() -> Value {
    json!({
        "email": "a@b.co",
        "height": 1.8,
        "snils": "12345678901",
        "passport_series": "12 34",
        "occupation": "Инженер",
        "age": 30,
        "academic_degree": "Магистр",
        "worldview": "буддизм",
        "address": "Ленина 5"
    })
}

fn batch() -> Value {
    let mut young = valid_doc();
    young["age"] = json!(15);
    let mut islam = valid_doc();
    islam["worldview"] = json!("ислам");
    let mut missing = valid_doc();
    missing.as_object_mut().unwrap().remove("email");
    json!([valid_doc(), young, islam, missing])
}

fn write_input(dir: &Path, content: &[u8]) -> PathBuf {
    let path = dir.join("19.txt");
    fs::write(&path, content).unwrap();
    path
}

fn settings(tmp: &TempDir) -> Settings {
    let input = write_input(tmp.path(), batch().to_string().as_bytes());
    Settings::new(input, tmp.path()).unwrap()
}

// =============================================================================
// Successful Runs
// =============================================================================

/// A run writes the summary and the valid records.
#[test]
fn test_run_writes_reports() {
    let tmp = TempDir::new().unwrap();
    let settings = settings(&tmp);

    let report = cli::execute(&settings).unwrap();
    assert_eq!(report.total(), 4);
    assert_eq!(report.valid().len(), 1);

    let summary = fs::read_to_string(tmp.path().join("result.txt")).unwrap();
    assert!(summary.starts_with("Invalid records: 3\n"));
    assert!(summary.contains("age\t1\n"));
    assert!(summary.contains("worldview\t1\n"));
    assert!(summary.contains("<missing-field>\t1\n"));

    let valid = fs::read_to_string(tmp.path().join("correct_data.txt")).unwrap();
    assert!(valid.starts_with("Record 1\n"));
    assert!(valid.contains("\"occupation\": \"Инженер\""));
    assert!(!valid.contains("Record 2"));
}

/// Extended worldview suffixes accept "-ам".
#[test]
fn test_extended_worldview() {
    let tmp = TempDir::new().unwrap();
    let mut settings = settings(&tmp);
    settings.worldview = WorldviewSuffixes::Extended;

    let report = cli::execute(&settings).unwrap();
    assert_eq!(report.valid().len(), 2);
}

/// JSON summary and rejection diagnostics.
#[test]
fn test_json_summary_and_rejections() {
    let tmp = TempDir::new().unwrap();
    let mut settings = settings(&tmp);
    settings.summary_format = SummaryFormat::Json;
    settings.invalid_records_file = Some(tmp.path().join("rejected.jsonl"));

    cli::execute(&settings).unwrap();

    let summary: Value =
        serde_json::from_str(&fs::read_to_string(tmp.path().join("result.txt")).unwrap()).unwrap();
    assert_eq!(summary["total"], 4);
    assert_eq!(summary["total_invalid"], 3);
    assert_eq!(summary["fields"]["age"], 1);

    let rejected = fs::read_to_string(tmp.path().join("rejected.jsonl")).unwrap();
    let lines: Vec<Value> = rejected
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["index"], 1);
    assert_eq!(lines[0]["violation"], "age");
    assert_eq!(lines[0]["failing_fields"], json!(["age"]));
    assert_eq!(lines[2]["violation"], "<missing-field>");
}

/// Console target writes no summary file.
#[test]
fn test_console_summary() {
    let tmp = TempDir::new().unwrap();
    let mut settings = settings(&tmp);
    settings.summary_target = SummaryTarget::Console;

    cli::execute(&settings).unwrap();
    assert!(!tmp.path().join("result.txt").exists());
    assert!(tmp.path().join("correct_data.txt").exists());
}

/// Empty batch still produces a full summary.
#[test]
fn test_empty_batch() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(tmp.path(), b"[]");
    let settings = Settings::new(input, tmp.path()).unwrap();

    cli::execute(&settings).unwrap();
    let summary = fs::read_to_string(tmp.path().join("result.txt")).unwrap();
    assert_eq!(summary.lines().count(), 10);
    assert_eq!(fs::read_to_string(tmp.path().join("correct_data.txt")).unwrap(), "");
}

/// Legacy windows-1251 input is read through the fallback encoding.
#[test]
fn test_windows_1251_fallback() {
    let tmp = TempDir::new().unwrap();
    let text = batch().to_string();
    let (bytes, _, _) = encoding_rs::WINDOWS_1251.encode(&text);
    let input = write_input(tmp.path(), &bytes);

    let mut settings = Settings::new(input, tmp.path()).unwrap();
    assert_eq!(
        cli::execute(&settings).unwrap_err().code(),
        "RECVAL_INPUT_UNREADABLE"
    );

    settings.fallback_encoding = Some(encoding_rs::WINDOWS_1251);
    let report = cli::execute(&settings).unwrap();
    assert_eq!(report.valid()[0].get(recval::schema::Field::Occupation), "Инженер");
}

/// Arguments are resolved the same way the binary resolves them.
#[test]
fn test_run_with_parsed_arguments() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(tmp.path(), batch().to_string().as_bytes());
    let output = tmp.path().join("summary.txt");
    let config = tmp.path().join("recval.json");
    fs::write(
        &config,
        json!({ "valid_records_file": tmp.path().join("ok.txt") }).to_string(),
    )
    .unwrap();

    let args: Vec<OsString> = vec![
        "recval".into(),
        "--input-file".into(),
        input.into_os_string(),
        "--output-file".into(),
        output.clone().into_os_string(),
        "--config".into(),
        config.into_os_string(),
    ];
    let parsed = Cli::try_parse_from(args).unwrap();

    let report = cli::run_with(&parsed).unwrap();
    assert_eq!(report.valid().len(), 1);
    assert!(output.exists());
    assert!(tmp.path().join("ok.txt").exists());
}

// =============================================================================
// Fatal Errors
// =============================================================================

/// Missing input aborts before any output.
#[test]
fn test_missing_input_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let settings = Settings::new(tmp.path().join("absent.txt"), tmp.path()).unwrap();

    let err = cli::execute(&settings).unwrap_err();
    assert_eq!(err.code(), "RECVAL_INPUT_NOT_FOUND");
    assert!(!tmp.path().join("result.txt").exists());
    assert!(!tmp.path().join("correct_data.txt").exists());
}

/// Non-JSON input aborts before any output.
#[test]
fn test_malformed_input_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(tmp.path(), b"[{\"email\": ");
    let settings = Settings::new(input, tmp.path()).unwrap();

    let err = cli::execute(&settings).unwrap_err();
    assert_eq!(err.code(), "RECVAL_INPUT_MALFORMED");
    assert!(!tmp.path().join("result.txt").exists());
}

/// Unwritable output is reported.
#[test]
fn test_output_write_failure() {
    let tmp = TempDir::new().unwrap();
    let mut settings = settings(&tmp);
    settings.valid_records_file = tmp.path().join("no_such_dir").join("ok.txt");

    let err = cli::execute(&settings).unwrap_err();
    assert_eq!(err.code(), "RECVAL_OUTPUT_WRITE_FAILURE");
}
