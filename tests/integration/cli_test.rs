//! Integration tests for the podview CLI.

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::{temp_transcript, SAMPLE_TRANSCRIPT};

fn podview() -> Command {
    Command::cargo_bin("podview").expect("binary builds")
}

#[test]
fn info_summarizes_transcript() {
    let (_dir, path) = temp_transcript(SAMPLE_TRANSCRIPT);

    podview()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("turns:    2"))
        .stdout(predicate::str::contains("segments: 3"))
        .stdout(predicate::str::contains("Hi there"));
}

#[test]
fn info_rejects_missing_file() {
    podview()
        .arg("info")
        .arg("/nonexistent/transcript.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load transcript"));
}

#[test]
fn info_rejects_malformed_transcript() {
    let (_dir, path) = temp_transcript("not json at all");

    podview().arg("info").arg(&path).assert().failure();
}

#[test]
fn help_lists_subcommands() {
    podview()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_flag_works() {
    podview()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("podview"));
}

#[test]
fn completions_generate_for_bash() {
    podview()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("podview"));
}

#[test]
fn config_path_prints_a_path() {
    podview()
        .arg("config")
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn missing_subcommand_shows_usage() {
    podview()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
