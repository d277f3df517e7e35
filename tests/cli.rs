use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn treefind() -> Command {
    Command::cargo_bin("treefind").expect("binary should build")
}

#[test]
fn prints_matches_one_per_line() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("file1"), vec![b'x'; 10]).unwrap();
    fs::write(dir.path().join("file2"), vec![b'y'; 20]).unwrap();

    let expected = format!("{}\n", dir.path().join("file2").display());
    treefind()
        .arg(dir.path())
        .args(["-size", "+15"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn no_matches_is_success() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a"), "a").unwrap();

    treefind()
        .arg(dir.path())
        .args(["-name", "b"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn exec_reports_status_after_matches() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("only"), "a").unwrap();

    let expected = format!("{}\nexited, status = 0\n", dir.path().join("only").display());
    treefind()
        .arg(dir.path())
        .args(["-exec", "/bin/true"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn malformed_size_fails_before_walking() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a"), "a").unwrap();

    treefind()
        .arg(dir.path())
        .args(["-size", "x5"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Wrong usage of \"size\" option"))
        .stderr(predicate::str::contains("see help"));
}

#[test]
fn unknown_option_fails() {
    treefind()
        .args([".", "-type", "f"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn missing_root_fails() {
    treefind()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing search path"))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn help_succeeds() {
    treefind()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("-nlinks"));
}

#[test]
fn unreadable_root_is_logged_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    treefind()
        .arg(dir.path().join("missing"))
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("no such file or directory"));
}
