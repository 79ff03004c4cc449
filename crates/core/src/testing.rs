// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

//! Fixtures shared by the unit tests in this crate.

use chrono::{NaiveDate, NaiveDateTime};

use crate::issue::{Assignee, Issue, Priority, RawIssue, Status};

/// Build a timestamp from calendar parts.
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

/// Builder for normalized issues.
pub struct IssueBuilder {
    issue: Issue,
}

impl IssueBuilder {
    pub fn new(key: &str) -> Self {
        IssueBuilder {
            issue: Issue {
                key: key.to_string(),
                summary: key.to_string(),
                status: Status::new(1, "Open"),
                priority: Priority::new(3, "Medium"),
                due: None,
                assignee: None,
            },
        }
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.issue.summary = summary.to_string();
        self
    }

    pub fn status(mut self, id: u64, name: &str) -> Self {
        self.issue.status = Status::new(id, name);
        self
    }

    pub fn priority(mut self, id: u64) -> Self {
        self.issue.priority = Priority::new(id, format!("P{id}"));
        self
    }

    pub fn due(mut self, due: NaiveDateTime) -> Self {
        self.issue.due = Some(due);
        self
    }

    pub fn assignee(mut self, name: &str, email: &str) -> Self {
        self.issue.assignee = Some(Assignee::new(name, Some(email.to_string())));
        self
    }

    pub fn build(self) -> Issue {
        self.issue
    }
}

/// Raw issue with the given due-date text, status and priority.
pub fn raw(key: &str, due: Option<&str>, status: &str, priority: u64) -> RawIssue {
    RawIssue {
        key: key.to_string(),
        summary: key.to_string(),
        status: Status::new(1, status),
        priority: Priority::new(priority, format!("P{priority}")),
        due_date: due.map(String::from),
        assignee: Some(Assignee::new("U", Some("u@example.com".to_string()))),
    }
}

/// Keys of the given issues, in order.
pub fn keys(issues: &[Issue]) -> Vec<&str> {
    issues.iter().map(|issue| issue.key.as_str()).collect()
}
