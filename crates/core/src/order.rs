// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report ordering.
//!
//! Issues are ordered with repeated stable sorts, least significant key
//! first: summary, status id, priority id, due date. Because each pass is
//! stable, the effective order is due date, then priority, then status,
//! then summary.

use chrono::NaiveDateTime;

use crate::issue::Issue;

/// Sort key for a due date.
///
/// `Unset` orders before every `Dated` value, so undated issues cluster at
/// the front of the ordered list. The key exists only while sorting; issues
/// keep `Option<NaiveDateTime>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DueKey {
    Unset,
    Dated(NaiveDateTime),
}

impl From<Option<NaiveDateTime>> for DueKey {
    fn from(due: Option<NaiveDateTime>) -> Self {
        match due {
            Some(dt) => DueKey::Dated(dt),
            None => DueKey::Unset,
        }
    }
}

impl Issue {
    /// Due date as an ordering key.
    pub fn due_key(&self) -> DueKey {
        DueKey::from(self.due)
    }
}

/// Order issues in place for the report.
pub fn order(issues: &mut [Issue]) {
    issues.sort_by(|a, b| a.summary.cmp(&b.summary));
    issues.sort_by_key(|issue| issue.status.id);
    issues.sort_by_key(|issue| issue.priority.id);
    issues.sort_by_key(Issue::due_key);
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
