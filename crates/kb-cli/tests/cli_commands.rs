//! Integration tests for the `knobel` CLI binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn knobel() -> Command {
    Command::cargo_bin("knobel").unwrap()
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_prints_values_and_total() {
    knobel()
        .args(["roll", "-n", "3", "-s", "d6", "--seed", "7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Rolled 3d6: [").and(predicate::str::contains("] = ")),
        );
}

#[test]
fn roll_is_deterministic_with_a_seed() {
    let first = knobel()
        .args(["roll", "-n", "5", "-s", "20", "--seed", "42"])
        .output()
        .unwrap();
    let second = knobel()
        .args(["roll", "-n", "5", "-s", "20", "--seed", "42"])
        .output()
        .unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn roll_clamps_out_of_range_requests() {
    knobel()
        .args(["roll", "-n", "50", "-s", "5000", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolled 10d100: ["));
}

#[test]
fn roll_rejects_malformed_die_tags() {
    knobel()
        .args(["roll", "-s", "coin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a sides count or die tag"));
}

// ---------------------------------------------------------------------------
// sentence
// ---------------------------------------------------------------------------

#[test]
fn sentence_prints_one_line_per_count() {
    let output = knobel()
        .args(["sentence", "--count", "3", "--seed", "11"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert!(line.ends_with('.'), "no trailing period: {line}");
    }
}

#[test]
fn sentence_uses_custom_tables() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tables.json");
    fs::write(
        &path,
        r#"{
            "subjects": ["The crash test dummy"],
            "verbs": ["inspected"],
            "objects": ["the bumper"],
            "adverbs": ["thoroughly"],
            "prepositions": ["behind"],
            "conjunctions": ["and"],
            "nouns": ["garage"],
            "adjectives": ["dented"]
        }"#,
    )
    .unwrap();

    knobel()
        .args(["sentence", "--seed", "3"])
        .arg("--tables")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("The crash test dummy inspected"));
}

#[test]
fn sentence_rejects_empty_custom_tables() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tables.json");
    fs::write(
        &path,
        r#"{
            "subjects": [],
            "verbs": ["inspected"],
            "objects": ["the bumper"],
            "adverbs": ["thoroughly"],
            "prepositions": ["behind"],
            "conjunctions": ["and"],
            "nouns": ["garage"],
            "adjectives": ["dented"]
        }"#,
    )
    .unwrap();

    knobel()
        .args(["sentence"])
        .arg("--tables")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("word table 'subjects' is empty"));
}

// ---------------------------------------------------------------------------
// shake
// ---------------------------------------------------------------------------

#[test]
fn shake_replays_a_sample_log() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("samples.json");
    // One quiet sample, one jolt, one debounced echo 5 ms later.
    fs::write(
        &path,
        r#"[
            { "x": 0.0, "y": 0.0, "z": 0.0, "timestamp_ms": 0 },
            { "x": 20.0, "y": 0.0, "z": 0.0, "timestamp_ms": 20 },
            { "x": 40.0, "y": 0.0, "z": 0.0, "timestamp_ms": 25 }
        ]"#,
    )
    .unwrap();

    knobel()
        .arg("shake")
        .arg(&path)
        .args(["--seed", "5"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Shake! 1d20: [")
                .and(predicate::str::contains("Replayed 3 samples, 1 shakes")),
        );
}

#[test]
fn shake_rejects_missing_log() {
    knobel()
        .args(["shake", "no-such-file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn shake_rejects_malformed_log() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("samples.json");
    fs::write(&path, "{ not a log").unwrap();

    knobel()
        .arg("shake")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid sample log"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_rolls_and_quits() {
    knobel()
        .args(["play", "--seed", "9"])
        .write_stdin("dice 2\nsides d6\nroll\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("2d6: [")
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_reports_unknown_commands() {
    knobel()
        .args(["play"])
        .write_stdin("dance\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command"));
}

#[test]
fn play_exits_on_eof() {
    knobel().args(["play"]).write_stdin("roll\n").assert().success();
}
