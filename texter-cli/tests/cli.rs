//! End-to-end tests of the texter binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn texter() -> Command {
    Command::cargo_bin("texter").expect("binary builds")
}

#[test]
fn missing_input_prints_usage_and_exits_cleanly() {
    texter()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: texter <inputfile>"));
}

#[test]
fn declining_everything_writes_an_identical_copy() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("app.rb");
    let source = "puts 'hello'\nputs \"bye #{name}\"\n";
    fs::write(&input, source).unwrap();

    texter()
        .arg(&input)
        .write_stdin("n\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mark this string translatable?"));

    let output = dir.path().join("app.rb.texter.rb");
    assert_eq!(fs::read_to_string(output).unwrap(), source);
}

#[test]
fn closed_stdin_defaults_to_pass_through() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("app.rb");
    let source = "x = 'a'\n";
    fs::write(&input, source).unwrap();

    texter().arg(&input).write_stdin("").assert().success();

    let output = dir.path().join("app.rb.texter.rb");
    assert_eq!(fs::read_to_string(output).unwrap(), source);
}

#[test]
fn marking_rewrites_into_the_explicit_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("app.rb");
    let output = dir.path().join("marked.rb");
    fs::write(&input, "puts \"hello\"\n").unwrap();

    texter()
        .arg(&input)
        .arg(&output)
        .write_stdin("y\n")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "puts _(\"hello\")\n"
    );
}

#[test]
fn unreadable_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    texter()
        .arg(dir.path().join("missing.rb"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read"));
}

#[test]
fn parse_failure_reports_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.rb");
    fs::write(&input, "x = \"unterminated\n").unwrap();

    texter()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse error"));

    assert!(!dir.path().join("bad.rb.texter.rb").exists());
}
