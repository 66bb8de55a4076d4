//! E2E tests for view and library options

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn lv() -> Command {
    cargo_bin_cmd!("lv")
}

#[test]
fn view_types_are_accepted() {
    for view in ["list16", "grid32", "grid48", "grid64"] {
        lv().args(["--view", view, "--help"]).assert().success();
    }
}

#[test]
fn invalid_view_returns_exit_code_3() {
    lv().args(["--view", "huge"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn view_without_value_returns_exit_code_3() {
    lv().arg("--view").assert().code(3);
}

#[test]
fn library_flags_are_accepted() {
    lv().args(["--hidden", "--no-watch", "--help"])
        .assert()
        .success();
    lv().args(["-a", "--help"]).assert().success();
}

#[test]
fn help_documents_config_files() {
    lv().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains("theme.toml"));
}
