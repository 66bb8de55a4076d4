//! Basic CLI tests for lv
//!
//! Tests for command-line argument parsing, help output, version display,
//! and error handling for invalid inputs.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lv() -> Command {
    cargo_bin_cmd!("lv")
}

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    lv().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("lv"))
        .stdout(predicate::str::contains("--view"));
}

#[test]
fn help_short_flag_shows_usage() {
    lv().arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn version_flag_shows_version() {
    lv().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_short_flag_shows_version() {
    lv().arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Invalid Options (Exit Code 3)
// =============================================================================

#[test]
fn unknown_option_returns_exit_code_3() {
    lv().arg("--unknown-option")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn nonexistent_path_returns_exit_code_3() {
    lv().arg("/nonexistent/path/that/does/not/exist")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Not a folder"));
}

#[test]
fn file_path_returns_exit_code_3() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("stone.png");
    std::fs::write(&file, b"png").unwrap();

    lv().arg(&file).assert().code(3);
}

#[test]
fn two_paths_return_exit_code_3() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    lv().arg(a.path()).arg(b.path()).assert().code(3);
}

#[test]
fn log_file_without_path_returns_exit_code_3() {
    lv().arg("--log-file")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--log-file"));
}

// =============================================================================
// Valid Paths
// =============================================================================

#[test]
fn temp_directory_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    // --help keeps the TUI from starting
    lv().arg(temp_dir.path()).arg("--help").assert().success();
}
