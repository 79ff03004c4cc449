// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration management.
//!
//! Configuration is stored in a TOML file with three sections:
//! - `[jira]`: tracker URL, credentials and the JQL query selecting issues
//! - `[smtp]`: relay and sender used when the report is emailed
//! - `[report]`: side-file location and optional template override
//!
//! The file is located by `--config`, then `$DAILYTODO_CONFIG`, then
//! `<config dir>/dailytodo/config.toml`.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "DAILYTODO_CONFIG";

const APP_DIR_NAME: &str = "dailytodo";
const CONFIG_FILE_NAME: &str = "config.toml";
const REDACTED: &str = "********";

/// Commented starting point written by `dailytodo config init`.
pub const CONFIG_TEMPLATE: &str = r#"# dailytodo configuration

[jira]
url = "https://example.atlassian.net"
user = "me@example.com"
# API token from https://id.atlassian.com/manage-profile/security/api-tokens
token = ""
# Issues to report on
jql = "assignee = currentUser() AND statusCategory != Done"
# page_size = 50

[smtp]
server = "smtp.gmail.com"
# port = 587
# tls = true
username = ""
password = ""
from_name = "Daily Todo"
from_address = "todo@example.com"
# subject = "Daily Todo"

[report]
# output = "out.html"
# template = "/path/to/report.html.tera"
"#;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Jira connection (required unless issues come from `--input`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jira: Option<JiraConfig>,
    /// SMTP delivery (required only with `--email`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smtp: Option<SmtpConfig>,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Jira connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JiraConfig {
    /// Base URL of the Jira site, e.g. `https://example.atlassian.net`.
    pub url: String,
    /// Account used for basic auth.
    pub user: String,
    /// API token (or password on self-hosted servers).
    pub token: String,
    /// Query selecting the issues to report on.
    #[serde(default = "default_jql")]
    pub jql: String,
    /// Issues requested per search call.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl JiraConfig {
    /// Link to an issue in the Jira web UI.
    pub fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{}", self.url.trim_end_matches('/'), key)
    }
}

fn default_jql() -> String {
    "assignee = currentUser() AND statusCategory != Done".to_string()
}

fn default_page_size() -> u32 {
    50
}

/// SMTP delivery settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmtpConfig {
    pub server: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    /// Use STARTTLS. Disabling sends credentials in the clear.
    #[serde(default = "default_tls")]
    pub tls: bool,
    pub username: String,
    pub password: String,
    pub from_name: String,
    pub from_address: String,
    #[serde(default = "default_subject")]
    pub subject: String,
}

fn default_smtp_port() -> u16 {
    587
}

fn default_tls() -> bool {
    true
}

fn default_subject() -> String {
    "Daily Todo".to_string()
}

/// Report output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path of the rendered HTML side file.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Tera template replacing the built-in HTML layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            output: default_output(),
            template: None,
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("out.html")
}

impl Config {
    /// Loads configuration from the given file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::ConfigNotFound(path.to_path_buf()),
            _ => Error::Config(format!("failed to read {}: {}", path.display(), e)),
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("failed to parse config: {}", e)))
    }

    /// Resolve and load the configuration.
    ///
    /// An explicit path (flag or environment) must exist. The default
    /// location is optional: when it is missing an empty config is used, so
    /// runs that need neither Jira nor SMTP work without a file.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let explicit = explicit
            .map(Path::to_path_buf)
            .or_else(|| env_config_path(std::env::var_os(CONFIG_ENV)));
        if let Some(path) = explicit {
            let config = Self::load(&path)?;
            return Ok((config, Some(path)));
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                let config = Self::load(&path)?;
                Ok((config, Some(path)))
            }
            _ => Ok((Config::default(), None)),
        }
    }

    /// Jira settings, or an error naming the missing section.
    pub fn jira(&self) -> Result<&JiraConfig> {
        self.jira.as_ref().ok_or(Error::MissingSection {
            section: "jira",
            hint: "configure Jira or read issues from a file with --input",
        })
    }

    /// SMTP settings, or an error naming the missing section.
    pub fn smtp(&self) -> Result<&SmtpConfig> {
        self.smtp.as_ref().ok_or(Error::MissingSection {
            section: "smtp",
            hint: "configure SMTP delivery or run without --email",
        })
    }

    /// Copy of the config with credentials masked, for display.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if let Some(jira) = config.jira.as_mut() {
            mask(&mut jira.token);
        }
        if let Some(smtp) = config.smtp.as_mut() {
            mask(&mut smtp.password);
        }
        config
    }

    /// Serializes the config as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))
    }
}

fn mask(secret: &mut String) {
    if !secret.is_empty() {
        *secret = REDACTED.to_string();
    }
}

fn env_config_path(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Default config location under the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Write the commented template config to `path`.
pub fn write_template(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::ConfigExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, CONFIG_TEMPLATE)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
