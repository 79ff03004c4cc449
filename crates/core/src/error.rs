// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for dt-core operations.

use thiserror::Error;

/// All possible errors that can occur in dt-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid due date on {key}: '{value}'\n  hint: expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS")]
    InvalidDueDate { key: String, value: String },

    #[error(
        "{} issue(s) matched no bucket: {}\n  hint: the status or due date is not covered by any report category",
        keys.len(),
        keys.join(", ")
    )]
    Unclassified { keys: Vec<String> },

    #[error("line {line}: {source}")]
    ParseLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for dt-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
