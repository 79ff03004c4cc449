// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bucket classification.
//!
//! Each issue is routed by the first matching rule, evaluated against the
//! current instant `now` and the calendar date `today = now.date()`:
//!
//! 1. status is "In Review" → [`Bucket::InReview`]
//! 2. no due date → [`Bucket::NoDueDate`]
//! 3. due strictly before now → [`Bucket::PastDue`]
//! 4. due on today's date → [`Bucket::Today`]
//! 5. due in today's ISO week → [`Bucket::ThisWeek`]
//! 6. due in today's month → [`Bucket::ThisMonth`]
//! 7. due after now → [`Bucket::Future`]
//!
//! Rule 3 is a strict comparison: an issue due at exactly `now` is not past
//! due and lands in Today.

use chrono::{Datelike, NaiveDateTime};

use crate::bucket::{Bucket, BucketMap};
use crate::error::{Error, Result};
use crate::issue::Issue;

/// Route one issue to its bucket, or `None` if no rule matches.
pub fn classify(issue: &Issue, now: NaiveDateTime) -> Option<Bucket> {
    if issue.status.is_in_review() {
        return Some(Bucket::InReview);
    }
    let Some(due) = issue.due else {
        return Some(Bucket::NoDueDate);
    };

    let today = now.date();
    let due_date = due.date();

    if due < now {
        Some(Bucket::PastDue)
    } else if due_date == today {
        Some(Bucket::Today)
    } else if due_date.iso_week() == today.iso_week() {
        Some(Bucket::ThisWeek)
    } else if due_date.year() == today.year() && due_date.month() == today.month() {
        Some(Bucket::ThisMonth)
    } else if due > now {
        Some(Bucket::Future)
    } else {
        None
    }
}

/// Partition ordered issues into buckets using the given router.
///
/// Issues are appended in arrival order, so each bucket keeps the relative
/// order of `issues`. Issues the router rejects are collected and reported
/// by [`ensure_complete`].
pub fn partition_with<F>(issues: Vec<Issue>, mut route: F) -> Result<BucketMap>
where
    F: FnMut(&Issue) -> Option<Bucket>,
{
    let mut buckets = BucketMap::new();
    let mut leftover = Vec::new();

    for issue in issues {
        match route(&issue) {
            Some(bucket) => buckets.push(bucket, issue),
            None => leftover.push(issue),
        }
    }

    ensure_complete(&leftover)?;
    Ok(buckets)
}

/// Partition ordered issues by the classification rules at `now`.
pub fn partition(issues: Vec<Issue>, now: NaiveDateTime) -> Result<BucketMap> {
    partition_with(issues, |issue| classify(issue, now))
}

/// Fail if any issue was left without a bucket.
///
/// # Errors
///
/// Returns [`Error::Unclassified`] listing the keys of the leftover issues.
pub fn ensure_complete(leftover: &[Issue]) -> Result<()> {
    if leftover.is_empty() {
        return Ok(());
    }
    Err(Error::Unclassified {
        keys: leftover.iter().map(|issue| issue.key.clone()).collect(),
    })
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
