// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text rendering of a report.
//!
//! The same text is printed to stdout and used as the plain part of the
//! email, so it carries no terminal colors.

use chrono::{NaiveDateTime, NaiveTime, Timelike};

use dt_core::{Issue, Report};

/// Shown instead of bucket sections when there is nothing to do.
pub const EMPTY_REPORT: &str = "No open issues.";

/// Format a due date for humans.
///
/// Date-only due dates are normalized to the last instant of their day;
/// those print as a bare date. Anything else includes the time of day.
pub fn format_due(due: NaiveDateTime) -> String {
    if is_end_of_day(due.time()) {
        due.format("%Y-%m-%d").to_string()
    } else {
        due.format("%Y-%m-%d %H:%M").to_string()
    }
}

fn is_end_of_day(time: NaiveTime) -> bool {
    time.hour() == 23
        && time.minute() == 59
        && time.second() == 59
        && time.nanosecond() == 999_999_000
}

/// Format one issue as a list line.
///
/// ```text
/// - OPS-12: Rotate certificates [High, In Progress, due 2024-01-05]
/// ```
pub fn format_issue_line(issue: &Issue) -> String {
    let due = issue
        .due
        .map(|due| format!(", due {}", format_due(due)))
        .unwrap_or_default();
    format!(
        "- {}: {} [{}, {}{}]",
        issue.key, issue.summary, issue.priority, issue.status, due
    )
}

/// Format the whole report: one section per non-empty bucket, in bucket order.
pub fn format_report(report: &Report) -> String {
    if report.is_empty() {
        return format!("{}\n", EMPTY_REPORT);
    }

    let mut sections = Vec::new();
    for (bucket, issues) in report.buckets.non_empty() {
        let mut lines = vec![format!("{} ({})", bucket, issues.len())];
        lines.extend(issues.iter().map(format_issue_line));
        sections.push(lines.join("\n"));
    }

    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
