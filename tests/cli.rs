//! End-to-end tests for the swot binary.
//!
//! Each test points the binary at a throwaway directory via `SWOT_DIR` so
//! nothing touches the real `~/.swot/`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn swot(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("swot").unwrap();
    cmd.env("SWOT_DIR", dir.path());
    cmd
}

#[test]
fn add_log_show_round_trip() {
    let dir = TempDir::new().unwrap();

    swot(&dir)
        .args(["module", "add", "algebra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added"));
    swot(&dir).args(["log", "algebra", "1.0"]).assert().success();
    swot(&dir).args(["log", "algebra", "1.5"]).assert().success();

    swot(&dir)
        .args(["show", "algebra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("02H:30M:00S"));
}

#[test]
fn overall_total_spans_modules() {
    let dir = TempDir::new().unwrap();

    swot(&dir).args(["module", "add", "A"]).assert().success();
    swot(&dir).args(["module", "add", "B"]).assert().success();
    swot(&dir).args(["log", "A", "1.0"]).assert().success();
    swot(&dir).args(["log", "B", "0.5"]).assert().success();

    swot(&dir)
        .args(["show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("01H:30M:00S"));
}

#[test]
fn show_unknown_module_reports_no_data() {
    let dir = TempDir::new().unwrap();

    swot(&dir)
        .args(["show", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data for module: nope"));
}

#[test]
fn log_to_unknown_module_fails() {
    let dir = TempDir::new().unwrap();

    swot(&dir)
        .args(["log", "nope", "1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown module"));

    // Nothing was created as a side effect.
    swot(&dir)
        .args(["show", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data for module: nope"));
}

#[test]
fn negative_hours_are_rejected() {
    let dir = TempDir::new().unwrap();
    swot(&dir)
        .args(["module", "add", "algebra"])
        .assert()
        .success();

    swot(&dir)
        .args(["log", "algebra", "-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn non_numeric_hours_are_rejected() {
    let dir = TempDir::new().unwrap();
    swot(&dir)
        .args(["module", "add", "algebra"])
        .assert()
        .success();

    swot(&dir)
        .args(["log", "algebra", "ninety"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn remove_matches_case_insensitively_and_reports_match() {
    let dir = TempDir::new().unwrap();
    swot(&dir)
        .args(["module", "add", "Algebra"])
        .assert()
        .success();

    swot(&dir)
        .args(["module", "remove", "ALGEBRA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'Algebra' removed"));

    swot(&dir)
        .args(["show", "Algebra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data for module"));
}

#[test]
fn remove_miss_is_an_error() {
    let dir = TempDir::new().unwrap();

    swot(&dir)
        .args(["module", "remove", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no module matching"));
}

#[test]
fn exact_remove_miss_is_a_silent_noop() {
    let dir = TempDir::new().unwrap();

    swot(&dir)
        .args(["module", "remove", "nope", "--exact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing removed"));
}

#[test]
fn undo_drains_then_noops() {
    let dir = TempDir::new().unwrap();
    swot(&dir)
        .args(["module", "add", "algebra"])
        .assert()
        .success();
    swot(&dir).args(["log", "algebra", "1.0"]).assert().success();

    swot(&dir)
        .args(["undo", "algebra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed last session"));

    swot(&dir)
        .args(["undo", "algebra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to remove"));
}

#[test]
fn corrupt_data_file_surfaces_an_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("study.json"), "not json at all").unwrap();

    swot(&dir)
        .args(["show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));
}

#[test]
fn data_survives_across_invocations() {
    let dir = TempDir::new().unwrap();
    swot(&dir)
        .args(["module", "add", "history"])
        .assert()
        .success();
    swot(&dir).args(["log", "history", "2.0"]).assert().success();

    // A fresh process reads the same file.
    swot(&dir)
        .args(["module", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("history"))
        .stdout(predicate::str::contains("02H:00M:00S"));
}

#[test]
fn json_output_shape() {
    let dir = TempDir::new().unwrap();
    swot(&dir)
        .args(["module", "add", "algebra"])
        .assert()
        .success();
    swot(&dir).args(["log", "algebra", "1.5"]).assert().success();

    swot(&dir)
        .args(["show", "algebra", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalSeconds\": 5400"))
        .stdout(predicate::str::contains("\"formatted\": \"01H:30M:00S\""));
}

#[test]
fn config_default_output_is_honored() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.yaml"),
        "general:\n  default_output: json\n",
    )
    .unwrap();

    swot(&dir)
        .args(["show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalSeconds\""));
}

#[test]
fn completions_emit_a_script() {
    let dir = TempDir::new().unwrap();

    swot(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("swot"));
}
