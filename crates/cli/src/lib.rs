// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! dtrs - the library behind the `dailytodo` CLI.
//!
//! Wires the classification core in `dt-core` to its collaborators:
//!
//! - [`source`] - where issues come from (Jira search API or a JSONL file)
//! - [`render`] - HTML via tera, plus a plain-text alternative
//! - [`mail`] - SMTP delivery via lettre
//! - [`config`] - TOML configuration
//!
//! ```rust,ignore
//! use clap::Parser;
//!
//! let cli = dtrs::Cli::parse_from(["dailytodo", "report", "--input", "issues.jsonl"]);
//! dtrs::run(cli)?;
//! ```

mod cli;
mod colors;
mod commands;
mod display;
mod help;
pub mod logging;
pub mod timings;

pub mod config;
pub mod error;
pub mod mail;
pub mod render;
pub mod source;

pub use cli::{Cli, Command, ConfigCommand, OutputFormat, ReportArgs};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line. This is the main entry point for library
/// users and keeps commands testable without spawning a process.
pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Report(args) => commands::report::run(args, config_path),
        Command::Config(cmd) => commands::config::run(cmd, config_path),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "dailytodo", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
