// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Due-date normalization.
//!
//! Trackers send due dates either as a bare date (`2024-01-31`) or as a
//! date-time. A bare date means "due by the end of that day", so any due
//! timestamp at exactly midnight is moved to 23:59:59.999999 of the same date.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Timelike};

use crate::error::{Error, Result};
use crate::issue::{Issue, RawIssue};

/// Naive date-time layouts accepted, tried in order.
/// `%.f` also matches an absent fractional part.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Offset-carrying layout used by Jira (`2024-01-31T17:00:00.000+0000`).
const OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse date or date-time text into a local timestamp.
///
/// Offsets are converted to local time. A bare date yields midnight; the
/// end-of-day correction is applied separately by [`end_of_day_if_midnight`].
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_str(text, OFFSET_FORMAT) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Returns true if the timestamp has no time-of-day component.
pub fn is_midnight(dt: NaiveDateTime) -> bool {
    dt.num_seconds_from_midnight() == 0 && dt.nanosecond() == 0
}

/// Move a midnight timestamp to the last microsecond of the same day.
/// Any other timestamp is returned unchanged.
pub fn end_of_day_if_midnight(dt: NaiveDateTime) -> NaiveDateTime {
    if !is_midnight(dt) {
        return dt;
    }
    // 23:59:59.999999 is valid on every calendar date
    dt.date().and_hms_micro_opt(23, 59, 59, 999_999).unwrap_or(dt)
}

/// Parse a raw due date for the given issue key.
///
/// # Errors
///
/// Returns [`Error::InvalidDueDate`] when the text is not a recognized date
/// or date-time.
pub fn parse_due_date(key: &str, text: &str) -> Result<NaiveDateTime> {
    let parsed = parse_timestamp(text).ok_or_else(|| Error::InvalidDueDate {
        key: key.to_string(),
        value: text.to_string(),
    })?;
    Ok(end_of_day_if_midnight(parsed))
}

/// Normalize a raw issue.
pub fn normalize(raw: RawIssue) -> Result<Issue> {
    let due = match raw.due_date.as_deref() {
        Some(text) => Some(parse_due_date(&raw.key, text)?),
        None => None,
    };

    Ok(Issue {
        key: raw.key,
        summary: raw.summary,
        status: raw.status,
        priority: raw.priority,
        due,
        assignee: raw.assignee,
    })
}

/// Normalize every raw issue, stopping at the first malformed due date.
pub fn normalize_all(raw: Vec<RawIssue>) -> Result<Vec<Issue>> {
    raw.into_iter().map(normalize).collect()
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
