// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `dailytodo report`.
//!
//! Issues come from JSON Lines fixtures and the clock is pinned with the
//! hidden `--now` flag, so bucket membership is deterministic.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use yare::parameterized;

// =============================================================================
// Helpers
// =============================================================================

/// Tuesday of ISO week 1, 2024.
const NOW: &str = "2024-01-02T09:00:00";

struct Workspace {
    temp: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.toml"), "").unwrap();
        Workspace { temp }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.temp.path().join(name)
    }

    fn write_issues(&self, lines: &[String]) -> PathBuf {
        let path = self.path("issues.jsonl");
        fs::write(&path, lines.join("\n")).unwrap();
        path
    }

    fn dt(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("dailytodo");
        cmd.env("DAILYTODO_CONFIG", self.path("config.toml"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .current_dir(self.temp.path());
        cmd
    }

    fn report(&self, issues: &[String]) -> Command {
        let input = self.write_issues(issues);
        let mut cmd = self.dt();
        cmd.arg("report")
            .arg("--input")
            .arg(input)
            .arg("--now")
            .arg(NOW);
        cmd
    }
}

fn issue(key: &str, summary: &str, due: Option<&str>, status: (u64, &str), priority: u64) -> String {
    let mut value = serde_json::json!({
        "key": key,
        "summary": summary,
        "status": {"id": status.0, "name": status.1},
        "priority": {"id": priority, "name": format!("P{priority}")},
        "assignee": {"display_name": "Ada", "email": "ada@example.com"},
    });
    if let Some(due) = due {
        value["due_date"] = serde_json::Value::String(due.to_string());
    }
    value.to_string()
}

const OPEN: (u64, &str) = (1, "Open");
const IN_REVIEW: (u64, &str) = (3, "In Review");

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

fn json_of(cmd: &mut Command) -> serde_json::Value {
    serde_json::from_str(&stdout_of(cmd.arg("--format").arg("json"))).unwrap()
}

fn keys(value: &serde_json::Value, bucket: &str) -> Vec<String> {
    value[bucket]
        .as_array()
        .unwrap_or_else(|| panic!("missing bucket {bucket}"))
        .iter()
        .map(|issue| issue["key"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn in_review_past_due_issue_goes_to_in_review() {
    let ws = Workspace::new();
    let value = json_of(&mut ws.report(&[
        issue("A", "Past due task", Some("2024-01-01"), OPEN, 2),
        issue("B", "Being reviewed", None, IN_REVIEW, 3),
    ]));

    assert_eq!(keys(&value, "Past Due"), vec!["A"]);
    assert_eq!(keys(&value, "In Review"), vec!["B"]);
    assert!(keys(&value, "Today").is_empty());
    assert!(keys(&value, "No Due Date").is_empty());
}

#[parameterized(
    yesterday = { "2024-01-01", "Past Due" },
    earlier_today = { "2024-01-02T08:00:00", "Past Due" },
    later_today = { "2024-01-02T17:00:00", "Today" },
    date_only_today = { "2024-01-02", "Today" },
    friday = { "2024-01-05", "This Week" },
    sunday = { "2024-01-07", "This Week" },
    next_monday = { "2024-01-08", "This Month" },
    end_of_month = { "2024-01-31", "This Month" },
    next_month = { "2024-02-01", "Future" },
    next_year = { "2025-01-02", "Future" },
)]
fn due_date_bucket(due: &str, bucket: &str) {
    let ws = Workspace::new();
    let value = json_of(&mut ws.report(&[issue("X-1", "Task", Some(due), OPEN, 3)]));
    assert_eq!(keys(&value, bucket), vec!["X-1"]);
}

#[test]
fn all_seven_buckets_always_present_in_json() {
    let ws = Workspace::new();
    let value = json_of(&mut ws.report(&[issue("X-1", "Task", None, OPEN, 3)]));
    let object = value.as_object().unwrap();
    let headings: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(headings.len(), 7);
    for heading in [
        "Past Due",
        "Today",
        "This Week",
        "This Month",
        "Future",
        "No Due Date",
        "In Review",
    ] {
        assert!(object.contains_key(heading), "missing {heading}");
    }
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn within_bucket_order_is_due_then_priority_then_status_then_summary() {
    let ws = Workspace::new();
    let value = json_of(&mut ws.report(&[
        issue("S-B", "Bravo", Some("2024-02-10"), OPEN, 3),
        issue("S-A", "Alpha", Some("2024-02-10"), OPEN, 3),
        issue("S-ST", "Zulu", Some("2024-02-10"), (2, "In Progress"), 3),
        issue("S-HI", "Zulu", Some("2024-02-10"), (2, "In Progress"), 1),
        issue("S-EARLY", "Zulu", Some("2024-02-05"), (9, "Blocked"), 5),
    ]));

    assert_eq!(
        keys(&value, "Future"),
        vec!["S-EARLY", "S-HI", "S-A", "S-B", "S-ST"]
    );
}

// =============================================================================
// Output and side file
// =============================================================================

#[test]
fn text_output_lists_non_empty_buckets() {
    let ws = Workspace::new();
    ws.report(&[
        issue("A", "Past due task", Some("2024-01-01"), OPEN, 2),
        issue("B", "Being reviewed", None, IN_REVIEW, 3),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Past Due (1)"))
    .stdout(predicate::str::contains("- A: Past due task [P2, Open, due 2024-01-01]"))
    .stdout(predicate::str::contains("In Review (1)"))
    .stdout(predicate::str::contains("Today").not());
}

#[test]
fn html_side_file_is_written_to_out() {
    let ws = Workspace::new();
    let out = ws.path("reports/today.html");
    ws.report(&[issue("A", "Past due task", Some("2024-01-01"), OPEN, 2)])
        .arg("--out")
        .arg(&out)
        .arg("--format")
        .arg("none")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("Past Due"));
    assert!(html.contains("Past due task"));
}

#[test]
fn html_side_file_defaults_to_out_html() {
    let ws = Workspace::new();
    ws.report(&[issue("A", "Task", None, OPEN, 2)])
        .assert()
        .success();
    assert!(ws.path("out.html").exists());
}

#[test]
fn empty_input_still_writes_side_file() {
    let ws = Workspace::new();
    ws.report(&[])
        .assert()
        .success()
        .stdout(predicate::str::contains("No open issues."));
    assert!(ws.path("out.html").exists());
}

#[test]
fn empty_input_with_email_sends_nothing() {
    let ws = Workspace::new();
    // The relay is unreachable; an attempted send would fail the run.
    fs::write(
        ws.path("config.toml"),
        r#"
[smtp]
server = "127.0.0.1"
port = 1
tls = false
username = "u"
password = "p"
from_name = "Daily Todo"
from_address = "todo@example.com"
"#,
    )
    .unwrap();

    ws.report(&[]).arg("--email").assert().success();
    assert!(ws.path("out.html").exists());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn invalid_due_date_fails_with_key() {
    let ws = Workspace::new();
    ws.report(&[issue("BAD-1", "Task", Some("soon"), OPEN, 3)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("BAD-1"))
        .stderr(predicate::str::contains("soon"));
    assert!(!ws.path("out.html").exists());
}

#[test]
fn malformed_jsonl_reports_line_number() {
    let ws = Workspace::new();
    ws.report(&[issue("A", "Task", None, OPEN, 3), "{not json".to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn missing_jira_config_without_input_fails() {
    let ws = Workspace::new();
    ws.dt()
        .arg("report")
        .assert()
        .failure()
        .stderr(predicate::str::contains("[jira]"));
}

#[test]
fn email_without_smtp_config_fails() {
    let ws = Workspace::new();
    ws.report(&[issue("A", "Task", None, OPEN, 3)])
        .arg("--email")
        .assert()
        .failure()
        .stderr(predicate::str::contains("[smtp]"));
}

#[test]
fn invalid_now_is_rejected() {
    let ws = Workspace::new();
    ws.dt()
        .args(["report", "--now", "noon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid timestamp"));
}
