//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a temporary snapshot
//! file, so nothing touches the user's configured data directory.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(snapshot: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "stride-cli", "--quiet", "--"])
        .args(["--snapshot", snapshot.to_str().unwrap()])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn snapshot_init_then_stats_today() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("snapshot.json");

    let (_, stderr, code) = run_cli(&snapshot, &["snapshot", "init"]);
    assert_eq!(code, 0, "snapshot init failed: {stderr}");
    assert!(snapshot.exists());

    let (stdout, stderr, code) = run_cli(&snapshot, &["stats", "today"]);
    assert_eq!(code, 0, "stats today failed: {stderr}");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed.get("completion_rate").is_some());
    assert!(parsed.get("current_streak").is_some());
}

#[test]
fn snapshot_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("snapshot.json");

    let (_, _, code) = run_cli(&snapshot, &["snapshot", "init"]);
    assert_eq!(code, 0);

    let (_, stderr, code) = run_cli(&snapshot, &["snapshot", "init"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("already exists"));

    let (_, _, code) = run_cli(&snapshot, &["snapshot", "init", "--force"]);
    assert_eq!(code, 0);
}

#[test]
fn stats_week_has_seven_entries() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("snapshot.json");
    run_cli(&snapshot, &["snapshot", "init"]);

    let (stdout, stderr, code) = run_cli(&snapshot, &["stats", "week"]);
    assert_eq!(code, 0, "stats week failed: {stderr}");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(7));
}

#[test]
fn task_due_lists_daily_tasks() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("snapshot.json");
    run_cli(&snapshot, &["snapshot", "init"]);

    // The starter snapshot has daily tasks beginning today.
    let (stdout, stderr, code) = run_cli(&snapshot, &["task", "due"]);
    assert_eq!(code, 0, "task due failed: {stderr}");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let due = parsed.as_array().expect("array of tasks");
    assert!(!due.is_empty());
}

#[test]
fn snapshot_validate_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("snapshot.json");
    run_cli(&snapshot, &["snapshot", "init"]);

    let (stdout, stderr, code) = run_cli(&snapshot, &["snapshot", "validate"]);
    assert_eq!(code, 0, "snapshot validate failed: {stderr}");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["goals"], 2);
    assert_eq!(parsed["tasks"], 3);
    assert_eq!(parsed["completions"], 0);
}

#[test]
fn missing_snapshot_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("nope.json");

    let (_, stderr, code) = run_cli(&snapshot, &["stats", "today"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
}

#[test]
fn malformed_month_argument_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("snapshot.json");
    run_cli(&snapshot, &["snapshot", "init"]);

    let (_, stderr, code) = run_cli(&snapshot, &["stats", "month", "--month", "June"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
}

#[test]
fn malformed_date_argument_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("snapshot.json");
    run_cli(&snapshot, &["snapshot", "init"]);

    let (_, _, code) = run_cli(&snapshot, &["task", "due", "--date", "2024-02-30"]);
    assert_eq!(code, 1);
}
