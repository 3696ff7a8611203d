use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(deprecated)]
fn get_logstat_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("logstat")
}

fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join(filename)
}

#[test]
fn test_help() {
    let mut cmd = Command::new(get_logstat_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("--report"))
        .stdout(predicate::str::contains("--date"));
}

#[test]
fn test_average_report_prints_table() {
    let mut cmd = Command::new(get_logstat_bin());
    cmd.arg("--file")
        .arg(fixture_path("access.log"))
        .arg("--report")
        .arg("average");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("handler"))
        .stdout(predicate::str::contains("avg_response_time"))
        .stdout(predicate::str::contains("/api/context/..."))
        .stdout(predicate::str::contains("0.028"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_single_record_file() {
    let temp_dir = TempDir::new().unwrap();
    let log = temp_dir.path().join("test.log");
    fs::write(
        &log,
        "{\"@timestamp\": \"2025-06-22T13:57:34+00:00\", \"status\": 200, \"url\": \"/api/specializations/...\", \"request_method\": \"GET\", \"response_time\": 0.044, \"http_user_agent\": \"...\"}\n",
    )
    .unwrap();

    let mut cmd = Command::new(get_logstat_bin());
    cmd.arg("-f").arg(&log).arg("-r").arg("average");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("/api/specializations/..."))
        .stdout(predicate::str::contains("0.044"));
}

#[test]
fn test_json_output() {
    let mut cmd = Command::new(get_logstat_bin());
    cmd.arg("-f")
        .arg(fixture_path("access.log"))
        .arg("-r")
        .arg("average")
        .arg("--format")
        .arg("json");

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["report"], "average");
    assert_eq!(json["rows"][0]["rank"], 0);
    assert_eq!(json["rows"][0]["endpoint"], "/api/context/...");
    assert_eq!(json["rows"][0]["total"], 3);
    assert_eq!(json["rows"][0]["avg_response_time"], 0.028);
}

#[test]
fn test_table_output_is_csv() {
    let mut cmd = Command::new(get_logstat_bin());
    cmd.arg("-f")
        .arg(fixture_path("access.log"))
        .arg("-r")
        .arg("average")
        .arg("--date")
        .arg("2025-06-22")
        .arg("--format")
        .arg("table");

    cmd.assert().success().stdout(
        "rank,handler,total,avg_response_time\n\
         0,/api/context/...,2,0.022\n\
         1,/api/homeworks/...,1,0.060\n",
    );
}

#[test]
fn test_multiple_files_are_combined() {
    let mut cmd = Command::new(get_logstat_bin());
    cmd.arg("-f")
        .arg(fixture_path("access.log"))
        .arg(fixture_path("broken.log"))
        .arg("-r")
        .arg("average");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("/api/context/..."))
        .stdout(predicate::str::contains("/api/specializations/..."));
}

#[test]
fn test_malformed_lines_are_reported_and_skipped() {
    let mut cmd = Command::new(get_logstat_bin());
    cmd.arg("-f")
        .arg(fixture_path("broken.log"))
        .arg("-r")
        .arg("average");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("/api/specializations/..."))
        .stdout(predicate::str::contains("0.045"))
        .stderr(predicate::str::contains("invalid JSON object"))
        .stderr(predicate::str::contains("broken.log:2"))
        .stderr(predicate::str::contains("missing field 'url'"));
}

#[test]
fn test_missing_file_is_reported_and_others_processed() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("non_existent.log");

    let mut cmd = Command::new(get_logstat_bin());
    cmd.arg("-f")
        .arg(&missing)
        .arg(fixture_path("access.log"))
        .arg("-r")
        .arg("average");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("/api/context/..."))
        .stderr(predicate::str::contains("Failed to process"))
        .stderr(predicate::str::contains("non_existent.log"));
}

#[test]
fn test_unknown_report_type_fails_fast() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("never_opened.log");

    let mut cmd = Command::new(get_logstat_bin());
    cmd.arg("-f").arg(&missing).arg("-r").arg("bogus");

    // The file is never opened, so no per-file diagnostic appears
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown report type: 'bogus'"))
        .stderr(predicate::str::contains("never_opened.log").not())
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_invalid_date_fails_fast() {
    let mut cmd = Command::new(get_logstat_bin());
    cmd.arg("-f")
        .arg(fixture_path("access.log"))
        .arg("-r")
        .arg("average")
        .arg("-d")
        .arg("2025-22-06");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format: '2025-22-06'"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_user_agent_report_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("never_opened.log");

    let mut cmd = Command::new(get_logstat_bin());
    cmd.arg("-f")
        .arg(&missing)
        .arg(fixture_path("broken.log"))
        .arg("-r")
        .arg("user_agent");

    // Fails before ingestion, so no per-file or per-line diagnostics
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not implemented yet"))
        .stderr(predicate::str::contains("never_opened.log").not())
        .stderr(predicate::str::contains("invalid JSON object").not())
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_file_argument_is_required() {
    let mut cmd = Command::new(get_logstat_bin());
    cmd.arg("-r").arg("average");

    cmd.assert().failure().stderr(predicate::str::contains("--file"));
}
