// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue records as delivered by a tracker and after normalization.
//!
//! [`RawIssue`] carries the due date as text, exactly as the tracker sent it.
//! [`Issue`] is the normalized form consumed by ordering and classification.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Ordinal status identifier assigned by the tracker.
    pub id: u64,
    /// Human-readable status name.
    pub name: String,
}

impl Status {
    /// Status name that routes an issue to the In Review bucket.
    pub const IN_REVIEW: &'static str = "In Review";

    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Status {
            id,
            name: name.into(),
        }
    }

    /// Returns true if the issue is waiting on review.
    pub fn is_in_review(&self) -> bool {
        self.name == Self::IN_REVIEW
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Priority of an issue. Lower ids sort first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priority {
    pub id: u64,
    pub name: String,
}

impl Priority {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Priority {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The person an issue is assigned to, and the recipient of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub display_name: String,
    /// Trackers may hide addresses; delivery needs one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Assignee {
    pub fn new(display_name: impl Into<String>, email: Option<String>) -> Self {
        Assignee {
            display_name: display_name.into(),
            email,
        }
    }
}

impl fmt::Display for Assignee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.email {
            Some(email) => write!(f, "{} <{}>", self.display_name, email),
            None => write!(f, "{}", self.display_name),
        }
    }
}

/// An issue as fetched, before its due date has been parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawIssue {
    /// Tracker key, e.g. `OPS-12`.
    pub key: String,
    pub summary: String,
    pub status: Status,
    pub priority: Priority,
    /// Date (`2024-01-31`) or date-time text; `None` when no due date is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Assignee>,
}

/// A normalized issue.
///
/// `due` is either absent or a concrete local timestamp. Due dates given
/// without a time of day have already been moved to the end of that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub key: String,
    pub summary: String,
    pub status: Status,
    pub priority: Priority,
    pub due: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Assignee>,
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
