// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The classification pipeline.
//!
//! raw issues → [`normalize`](crate::normalize) → [`order`](crate::order)
//! → [`partition`](crate::classify::partition) → [`Report`]

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::bucket::BucketMap;
use crate::classify::partition;
use crate::clock::Clock;
use crate::error::Result;
use crate::issue::{Assignee, RawIssue};
use crate::normalize::normalize_all;
use crate::order::order;

/// A finished daily report, ready to render and deliver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Instant the buckets were evaluated against.
    pub generated_at: NaiveDateTime,
    /// Assignee of the first issue in report order; `None` when there are no issues.
    pub recipient: Option<Assignee>,
    pub buckets: BucketMap,
}

impl Report {
    /// Build a report from raw issues, evaluated at the clock's current time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDueDate`](crate::Error::InvalidDueDate) for
    /// malformed due dates and [`Error::Unclassified`](crate::Error::Unclassified)
    /// if any issue is left without a bucket.
    pub fn build(raw: Vec<RawIssue>, clock: &dyn Clock) -> Result<Self> {
        let now = clock.now();

        let mut issues = normalize_all(raw)?;
        order(&mut issues);
        let recipient = issues.first().and_then(|issue| issue.assignee.clone());
        let buckets = partition(issues, now)?;

        Ok(Report {
            generated_at: now,
            recipient,
            buckets,
        })
    }

    /// Total number of issues in the report.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The recipient to deliver to, if delivery was requested and there is
    /// anything to deliver.
    pub fn delivery_target(&self, requested: bool) -> Option<&Assignee> {
        if !requested || self.is_empty() {
            return None;
        }
        self.recipient.as_ref()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
