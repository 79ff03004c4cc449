// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for help, version and shell completion output.

#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use yare::parameterized;

fn dt() -> Command {
    let mut cmd = cargo_bin_cmd!("dailytodo");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn no_arguments_shows_usage_and_fails() {
    dt().assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn help_lists_commands_and_quickstart() {
    dt().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completion"))
        .stdout(predicate::str::contains("Get started:"));
}

#[parameterized(
    report = { "report" },
    config = { "config" },
    completion = { "completion" },
)]
fn subcommand_help(name: &str) {
    dt().args([name, "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn report_help_hides_now_and_shows_examples() {
    dt().args(["report", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--email"))
        .stdout(predicate::str::contains("--input"))
        .stdout(predicate::str::contains("Examples:"))
        .stdout(predicate::str::contains("--now").not());
}

#[test]
fn version_flag_prints_version() {
    dt().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_generates_script(shell: &str) {
    dt().args(["completion", shell])
        .assert()
        .success()
        .stdout(predicate::str::contains("dailytodo"));
}

#[test]
fn unknown_shell_is_rejected() {
    dt().args(["completion", "tcsh"])
        .assert()
        .failure();
}
