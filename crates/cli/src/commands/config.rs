// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::ConfigCommand;
use crate::config::{default_config_path, write_template, Config, CONFIG_ENV};
use crate::error::{Error, Result};

/// Execute a config subcommand.
pub fn run(cmd: ConfigCommand, config_path: Option<&Path>) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match cmd {
        ConfigCommand::Init { force } => {
            let path = init_target(config_path)?;
            run_init(&path, force, &mut stdout)
        }
        ConfigCommand::Show => {
            let (config, used) = Config::resolve(config_path)?;
            run_show(&config, used.as_deref(), &mut stdout)
        }
    }
}

/// Where `config init` writes: the explicit path, else the default location.
fn init_target(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_config_path().ok_or(Error::NoConfigDir)
}

pub(crate) fn run_init(path: &Path, force: bool, out: &mut impl Write) -> Result<()> {
    write_template(path, force)?;
    tracing::info!(path = %path.display(), "wrote config template");
    writeln!(out, "Wrote config to {}", path.display())?;
    writeln!(out, "Fill in the [jira] and [smtp] credentials before running a report.")?;
    Ok(())
}

pub(crate) fn run_show(config: &Config, path: Option<&Path>, out: &mut impl Write) -> Result<()> {
    match path {
        Some(path) => writeln!(out, "# {}", path.display())?,
        None => writeln!(out, "# no config file found, showing defaults")?,
    }
    write!(out, "{}", config.redacted().to_toml()?)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
