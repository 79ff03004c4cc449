// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report categories and the ordered bucket map.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::issue::Issue;

/// Urgency category of an issue in the daily report.
///
/// Declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bucket {
    #[serde(rename = "Past Due")]
    PastDue,
    #[serde(rename = "Today")]
    Today,
    #[serde(rename = "This Week")]
    ThisWeek,
    #[serde(rename = "This Month")]
    ThisMonth,
    #[serde(rename = "Future")]
    Future,
    #[serde(rename = "No Due Date")]
    NoDueDate,
    #[serde(rename = "In Review")]
    InReview,
}

impl Bucket {
    /// Every bucket, in report order.
    pub const ALL: [Bucket; 7] = [
        Bucket::PastDue,
        Bucket::Today,
        Bucket::ThisWeek,
        Bucket::ThisMonth,
        Bucket::Future,
        Bucket::NoDueDate,
        Bucket::InReview,
    ];

    /// Returns the heading used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::PastDue => "Past Due",
            Bucket::Today => "Today",
            Bucket::ThisWeek => "This Week",
            Bucket::ThisMonth => "This Month",
            Bucket::Future => "Future",
            Bucket::NoDueDate => "No Due Date",
            Bucket::InReview => "In Review",
        }
    }

    /// Returns a lowercase identifier suitable for HTML ids and CSS classes.
    pub fn slug(&self) -> &'static str {
        match self {
            Bucket::PastDue => "past-due",
            Bucket::Today => "today",
            Bucket::ThisWeek => "this-week",
            Bucket::ThisMonth => "this-month",
            Bucket::Future => "future",
            Bucket::NoDueDate => "no-due-date",
            Bucket::InReview => "in-review",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Issues grouped by bucket.
///
/// All seven buckets are always present. Within a bucket, issues keep the
/// order in which they were pushed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BucketMap {
    buckets: [Vec<Issue>; 7],
}

impl BucketMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an issue to the end of a bucket.
    pub(crate) fn push(&mut self, bucket: Bucket, issue: Issue) {
        self.buckets[bucket.index()].push(issue);
    }

    /// Issues in one bucket, in report order.
    pub fn get(&self, bucket: Bucket) -> &[Issue] {
        &self.buckets[bucket.index()]
    }

    /// Iterate over every bucket in report order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Bucket, &[Issue])> {
        Bucket::ALL
            .into_iter()
            .map(move |bucket| (bucket, self.get(bucket)))
    }

    /// Iterate over buckets that hold at least one issue.
    pub fn non_empty(&self) -> impl Iterator<Item = (Bucket, &[Issue])> {
        self.iter().filter(|(_, issues)| !issues.is_empty())
    }

    /// Total number of issues across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find the bucket holding the issue with the given key.
    pub fn bucket_of(&self, key: &str) -> Option<Bucket> {
        self.iter()
            .find(|(_, issues)| issues.iter().any(|issue| issue.key == key))
            .map(|(bucket, _)| bucket)
    }
}

/// Serializes as a map keyed by bucket heading, in report order.
impl Serialize for BucketMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Bucket::ALL.len()))?;
        for (bucket, issues) in self.iter() {
            map.serialize_entry(bucket.as_str(), issues)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "bucket_tests.rs"]
mod tests;
