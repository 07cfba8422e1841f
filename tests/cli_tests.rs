//! CLI tests for the study-buddy binary.
//!
//! - TC-C-001: plan command output (text and JSON)
//! - TC-C-002: start with a rest recommendation
//! - TC-C-003: start aborted at the first prompt
//! - TC-C-004: interactive prompts and cancellation
//! - TC-C-005: history listing
//! - TC-C-006: configuration errors

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn study_buddy(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("study-buddy").unwrap();
    cmd.arg("--data-dir").arg(data_dir).env_remove("RUST_LOG");
    cmd
}

fn read_history(data_dir: &Path) -> serde_json::Value {
    let content = fs::read_to_string(data_dir.join("history.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

// ============================================================================
// TC-C-001: Plan Command
// ============================================================================

#[test]
fn tc_c_001_plan_text() {
    let dir = tempfile::tempdir().unwrap();
    study_buddy(dir.path())
        .args(["plan", "--energy", "Focused", "--minutes", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deep study"))
        .stdout(predicate::str::contains("Cycles: 2"));
}

#[test]
fn tc_c_001_plan_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = study_buddy(dir.path())
        .args(["plan", "-e", "tired", "-m", "19", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["description"], "Light review");
    assert_eq!(plan["workMinutes"], 10);
    assert_eq!(plan["breakMinutes"], 2);
    assert_eq!(plan["cycles"], 1);
}

#[test]
fn tc_c_001_plan_degrades_on_bad_input() {
    let dir = tempfile::tempdir().unwrap();
    study_buddy(dir.path())
        .args(["plan", "--energy", "gibberish", "--minutes", "-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Standard check-in"));
}

#[test]
fn tc_c_001_plan_fractional_minutes_use_default() {
    let dir = tempfile::tempdir().unwrap();
    study_buddy(dir.path())
        .args(["plan", "-e", "focused", "-m", "2.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Standard check-in"));
}

// ============================================================================
// TC-C-002: Rest Recommendation
// ============================================================================

#[test]
fn tc_c_002_exhausted_logs_skip() {
    let dir = tempfile::tempdir().unwrap();
    study_buddy(dir.path())
        .args(["start", "--energy", "exhausted", "--minutes", "60", "--subject", "Chemistry"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nap time"))
        .stdout(predicate::str::contains("No timer started"));

    let history = read_history(dir.path());
    assert_eq!(history.as_array().unwrap().len(), 1);
    assert_eq!(history[0]["outcome"], "no_op_skipped");
    assert_eq!(history[0]["subject"], "Chemistry");
    assert_eq!(history[0]["energy"], "exhausted");
}

// ============================================================================
// TC-C-003: Abort
// ============================================================================

#[test]
fn tc_c_003_quit_at_first_prompt() {
    let dir = tempfile::tempdir().unwrap();
    study_buddy(dir.path())
        .args(["start", "--energy", "focused", "--minutes", "45", "--yes"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic study"))
        .stdout(predicate::str::contains("Session stopped"))
        .stdout(predicate::str::contains("remaining").not());

    let history = read_history(dir.path());
    assert_eq!(history[0]["outcome"], "aborted_by_operator");
}

#[test]
fn tc_c_003_end_of_input_at_prompt_quits() {
    let dir = tempfile::tempdir().unwrap();
    study_buddy(dir.path())
        .args(["start", "--energy", "overwhelmed", "--minutes", "30", "--yes"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session stopped"));
}

// ============================================================================
// TC-C-004: Interactive Prompts
// ============================================================================

#[test]
fn tc_c_004_prompts_reask_then_quit() {
    let dir = tempfile::tempdir().unwrap();
    study_buddy(dir.path())
        .arg("start")
        .write_stdin("sleepy\ntired\nzero\n0\n15\nyes\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("'sleepy' is not valid"))
        .stdout(predicate::str::contains("'zero' is not valid"))
        .stdout(predicate::str::contains("Light review"))
        .stdout(predicate::str::contains("Session stopped"));

    let history = read_history(dir.path());
    assert_eq!(history[0]["plan"]["description"], "Light review");
}

#[test]
fn tc_c_004_unrecognized_energy_flag_warns() {
    let dir = tempfile::tempdir().unwrap();
    study_buddy(dir.path())
        .args(["start", "--energy", "sleepy", "--minutes", "30", "--yes"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Standard check-in"))
        .stderr(predicate::str::contains("energy state not recognized"));

    let history = read_history(dir.path());
    assert_eq!(history[0]["energy"], "unknown");
}

#[test]
fn tc_c_004_declining_confirmation_logs_nothing() {
    let dir = tempfile::tempdir().unwrap();
    study_buddy(dir.path())
        .args(["start", "--energy", "focused", "--minutes", "120"])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("no session started"));

    assert!(!dir.path().join("history.json").exists());
}

#[test]
fn tc_c_004_config_can_skip_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"confirm_before_start": false}"#,
    )
    .unwrap();

    study_buddy(dir.path())
        .args(["start", "--energy", "focused", "--minutes", "120"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Start this session?").not())
        .stdout(predicate::str::contains("Session stopped"));
}

// ============================================================================
// TC-C-005: History
// ============================================================================

#[test]
fn tc_c_005_history_empty() {
    let dir = tempfile::tempdir().unwrap();
    study_buddy(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No study sessions logged yet"));
}

#[test]
fn tc_c_005_history_lists_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    for subject in ["Algebra", "Biology", "Chemistry", "Drama"] {
        study_buddy(dir.path())
            .args(["start", "-e", "exhausted", "-m", "10", "-s", subject])
            .write_stdin("")
            .assert()
            .success();
    }

    let output = study_buddy(dir.path()).arg("history").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("Last 3 study sessions"));
    assert!(!stdout.contains("Algebra"));
    let drama = stdout.find("Drama").unwrap();
    let biology = stdout.find("Biology").unwrap();
    assert!(drama < biology);

    study_buddy(dir.path())
        .args(["history", "--limit", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Algebra"));
}

// ============================================================================
// TC-C-006: Configuration Errors
// ============================================================================

#[test]
fn tc_c_006_malformed_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.json"), "{ nope").unwrap();

    study_buddy(dir.path())
        .arg("history")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config file"));
}

#[test]
fn tc_c_006_completions() {
    let dir = tempfile::tempdir().unwrap();
    study_buddy(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("study-buddy"));
}
