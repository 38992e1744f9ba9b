//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_root_help() {
    Command::cargo_bin("shelf")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book catalog browser"));
}

#[test]
fn test_list_help() {
    Command::cargo_bin("shelf")
        .unwrap()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--title"))
        .stdout(predicate::str::contains("--pages"));
}

#[test]
fn test_show_help() {
    Command::cargo_bin("shelf")
        .unwrap()
        .args(["show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book id"));
}

#[test]
fn test_browse_help() {
    Command::cargo_bin("shelf")
        .unwrap()
        .args(["browse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--theme"))
        .stdout(predicate::str::contains("--open"));
}

#[test]
fn test_missing_subcommand_fails() {
    Command::cargo_bin("shelf").unwrap().assert().failure();
}
