//! Smoke tests for top-level CLI behavior

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_features_command() {
    Command::cargo_bin("growthbook")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("features"));
}

#[test]
fn test_generate_types_help_lists_flags() {
    Command::cargo_bin("growthbook")
        .unwrap()
        .args(["features", "generate-types", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--apiBaseUrl"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--profile"));
}

#[test]
fn test_no_subcommand_prints_hint() {
    Command::cargo_bin("growthbook")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("growthbook --help"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    Command::cargo_bin("growthbook")
        .unwrap()
        .args(["features", "generate-types", "--bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bogus"));
}
