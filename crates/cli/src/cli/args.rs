// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Arguments for the `report` command.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Args;

use super::OutputFormat;

/// Options controlling where issues come from and where the report goes.
#[derive(Args, Clone, Debug, Default)]
pub struct ReportArgs {
    /// Email the HTML report to the assignee of the first issue
    #[arg(long)]
    pub email: bool,

    /// Read issues from a JSONL file instead of Jira
    #[arg(long, short = 'i', value_name = "file")]
    pub input: Option<PathBuf>,

    /// Where to write the HTML report (default from config, else out.html)
    #[arg(long, value_name = "path")]
    pub out: Option<PathBuf>,

    /// Format of the report printed to stdout
    #[arg(long, short = 'f', value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Classify as if the current local time were this instant
    #[arg(long, hide = true, value_name = "timestamp", value_parser = parse_now)]
    pub now: Option<NaiveDateTime>,
}

fn parse_now(s: &str) -> Result<NaiveDateTime, String> {
    dt_core::normalize::parse_timestamp(s)
        .ok_or_else(|| format!("invalid timestamp '{s}', expected YYYY-MM-DD[THH:MM:SS]"))
}
