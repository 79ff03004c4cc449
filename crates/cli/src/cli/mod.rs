// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::ReportArgs;

/// Output format for the report printed to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    /// Print nothing
    None,
}

#[derive(Parser)]
#[command(name = "dailytodo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Group your open Jira issues into a daily todo report")]
#[command(
    long_about = "Group your open Jira issues into a daily todo report.\n\n\
    Issues are sorted and bucketed into In Review, Past Due, Today, This Week, \
    This Month, Future and No Due Date, rendered as HTML and optionally emailed."
)]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the config file
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the daily report, write the HTML and optionally email it
    #[command(after_help = help::report_examples())]
    Report(ReportArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a starter config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Print the active config with secrets redacted
    Show,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
