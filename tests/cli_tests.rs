//! CLI integration tests.

mod support;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use support::write_file;
use tempfile::tempdir;

fn oddsline() -> Command {
    cargo_bin_cmd!("oddsline")
}

#[test]
fn test_help() {
    oddsline()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("oddsline"))
        .stdout(predicate::str::contains("draftkings"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_draftkings_help_mentions_poll() {
    oddsline()
        .args(["draftkings", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--poll"));
}

#[test]
fn test_version() {
    oddsline()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("oddsline"));
}

#[test]
fn test_unknown_command_fails() {
    oddsline().arg("fanduel").assert().failure();
}

#[test]
fn test_config_show_defaults() {
    oddsline()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("eventgroups/42648"))
        .stdout(predicate::str::contains("interval_secs = 5"));
}

#[test]
fn test_config_validate_rejects_bad_file() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "bad.toml", "[poll]\ninterval_secs = 0\n");

    oddsline()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("interval_secs"));
}

#[test]
fn test_config_validate_json_output() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "good.toml", "[output]\nsport = \"basketball\"\n");

    oddsline()
        .args(["--json", "config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type":"success""#));
}

#[test]
fn test_draftkings_unreachable_feed_skips_cycle() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("draftkings.csv");
    let toml = format!(
        "[feed]\nurl = \"http://127.0.0.1:9/\"\ntimeout_secs = 1\n\n[output]\npath = {:?}\n",
        output.display().to_string()
    );
    let path = write_file(dir.path(), "oddsline.toml", &toml);

    oddsline()
        .args(["--color", "never", "draftkings", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Cycle skipped"));

    assert!(!output.exists());
}
