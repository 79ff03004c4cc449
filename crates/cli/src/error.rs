// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur in the dailytodo CLI.
///
/// Collaborator failures (HTTP, SMTP, templates) keep their own variants so
/// the underlying error reaches the user unmodified.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config file not found: {}\n  hint: run 'dailytodo config init' to create one", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("config already exists at {}\n  hint: pass --force to overwrite it", .0.display())]
    ConfigExists(PathBuf),

    #[error("config error: {0}")]
    Config(String),

    #[error("missing [{section}] section in config\n  hint: {hint}")]
    MissingSection {
        section: &'static str,
        hint: &'static str,
    },

    #[error("no config directory could be determined\n  hint: pass --config or set DAILYTODO_CONFIG")]
    NoConfigDir,

    #[error("jira request failed with status {status}: {body}")]
    JiraApi { status: u16, body: String },

    #[error("unexpected jira response: {0}")]
    UnexpectedResponse(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build email: {0}")]
    Mail(#[from] lettre::error::Error),

    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("cannot email report to {0}: no email address on the assignee")]
    MissingRecipientAddress(String),

    #[error(transparent)]
    Core(#[from] dt_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for dailytodo operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
