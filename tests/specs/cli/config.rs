// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `dailytodo config`.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn dt(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("dailytodo");
    cmd.env_remove("DAILYTODO_CONFIG")
        .env("NO_COLOR", "1")
        .current_dir(temp.path());
    cmd
}

#[test]
fn init_writes_template_to_config_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf/config.toml");

    dt(&temp)
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote config to"));

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("[jira]"));
    assert!(text.contains("[smtp]"));
    assert!(text.contains("[report]"));
}

#[test]
fn init_honors_env_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("env.toml");

    dt(&temp)
        .env("DAILYTODO_CONFIG", &path)
        .args(["config", "init"])
        .assert()
        .success();

    assert!(path.exists());
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "# keep me\n").unwrap();

    dt(&temp)
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# keep me\n");

    dt(&temp)
        .arg("--config")
        .arg(&path)
        .args(["config", "init", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("[jira]"));
}

#[test]
fn show_redacts_token_and_password() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[jira]
url = "https://example.atlassian.net"
user = "me@example.com"
token = "very-secret-token"

[smtp]
server = "smtp.example.com"
username = "me"
password = "hunter2"
from_name = "Daily Todo"
from_address = "todo@example.com"
"#,
    )
    .unwrap();

    dt(&temp)
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("me@example.com"))
        .stdout(predicate::str::contains("very-secret-token").not())
        .stdout(predicate::str::contains("hunter2").not())
        .stdout(predicate::str::contains("port = 587"));
}

#[test]
fn show_with_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    dt(&temp)
        .args(["--config", "nope.toml", "config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"))
        .stderr(predicate::str::contains("dailytodo config init"));
}

#[test]
fn invalid_toml_is_reported() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[jira\n").unwrap();

    dt(&temp)
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}
