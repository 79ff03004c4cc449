// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Where raw issues come from.

pub mod jira;

use std::path::PathBuf;

use dt_core::RawIssue;

use crate::error::Result;

pub use jira::JiraClient;

/// A provider of raw issue records.
pub trait IssueSource {
    /// Fetch every issue the report should cover. Order is not significant.
    fn fetch(&self) -> Result<Vec<RawIssue>>;
}

/// Issues read from a JSON Lines file, one raw issue per line.
pub struct JsonlSource {
    path: PathBuf,
}

impl JsonlSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonlSource { path: path.into() }
    }
}

impl IssueSource for JsonlSource {
    fn fetch(&self) -> Result<Vec<RawIssue>> {
        let issues = dt_core::jsonl::read_all(&self.path)?;
        tracing::info!(path = %self.path.display(), count = issues.len(), "read issues from file");
        Ok(issues)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
