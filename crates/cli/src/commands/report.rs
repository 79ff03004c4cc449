// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use dt_core::{Assignee, Clock, FixedClock, Report, SystemClock};

use crate::cli::{OutputFormat, ReportArgs};
use crate::config::Config;
use crate::error::Result;
use crate::mail::{Deliver, SmtpMailer};
use crate::render::{Rendered, Renderer};
use crate::source::{IssueSource, JiraClient, JsonlSource};

/// Everything a report run produced.
#[derive(Debug)]
pub struct ReportOutcome {
    pub report: Report,
    pub rendered: Rendered,
    /// Where the HTML side file was written.
    pub out_path: PathBuf,
    /// Who the report was emailed to, if anyone.
    pub delivered_to: Option<Assignee>,
}

pub fn run(args: ReportArgs, config_path: Option<&Path>) -> Result<()> {
    let (config, used) = Config::resolve(config_path)?;
    if let Some(path) = &used {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    // Collaborators are resolved before anything is fetched.
    let source: Box<dyn IssueSource> = match &args.input {
        Some(path) => Box::new(JsonlSource::new(path)),
        None => Box::new(JiraClient::new(config.jira()?.clone())?),
    };
    let clock: Box<dyn Clock> = match args.now {
        Some(now) => Box::new(FixedClock(now)),
        None => Box::new(SystemClock),
    };
    let mailer = if args.email {
        Some(SmtpMailer::new(config.smtp()?.clone()))
    } else {
        None
    };
    let renderer = Renderer::new(
        config.report.template.as_deref(),
        config.jira.as_ref().map(|jira| jira.url.as_str()),
    )?;
    let out_path = args
        .out
        .clone()
        .unwrap_or_else(|| config.report.output.clone());

    let outcome = run_impl(
        source.as_ref(),
        clock.as_ref(),
        &renderer,
        mailer.as_ref().map(|mailer| mailer as &dyn Deliver),
        &out_path,
    )?;
    tracing::debug!(
        path = %outcome.out_path.display(),
        emailed = outcome.delivered_to.is_some(),
        "report complete"
    );

    print_outcome(&outcome, args.format, &mut std::io::stdout().lock())
}

/// Fetch, classify, render, write the side file, then deliver.
///
/// The HTML file is written before delivery is attempted, so it exists even
/// when sending fails.
pub(crate) fn run_impl(
    source: &dyn IssueSource,
    clock: &dyn Clock,
    renderer: &Renderer,
    mailer: Option<&dyn Deliver>,
    out_path: &Path,
) -> Result<ReportOutcome> {
    let raw = crate::time_phase!("source::fetch", { source.fetch()? });
    let report = crate::time_phase!("report::build", { Report::build(raw, clock)? });
    for (bucket, issues) in report.buckets.iter() {
        tracing::debug!(bucket = %bucket, count = issues.len(), "classified");
    }

    let rendered = crate::time_phase!("report::render", { renderer.render(&report)? });
    write_side_file(out_path, &rendered.html)?;
    tracing::info!(path = %out_path.display(), issues = report.len(), "wrote report");

    let delivered_to = match mailer {
        Some(mailer) => deliver(&report, &rendered, mailer)?,
        None => None,
    };

    Ok(ReportOutcome {
        report,
        rendered,
        out_path: out_path.to_path_buf(),
        delivered_to,
    })
}

fn write_side_file(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, html)?;
    Ok(())
}

/// Email the report to its recipient. Nothing is sent for an empty report
/// or when the first issue is unassigned.
fn deliver(
    report: &Report,
    rendered: &Rendered,
    mailer: &dyn Deliver,
) -> Result<Option<Assignee>> {
    if report.is_empty() {
        tracing::info!("no issues, skipping email");
        return Ok(None);
    }
    let Some(to) = report.delivery_target(true) else {
        tracing::warn!("first issue has no assignee, skipping email");
        return Ok(None);
    };

    crate::time_phase!("mail::deliver", { mailer.deliver(to, rendered)? });
    Ok(Some(to.clone()))
}

/// Print the run result to stdout in the requested format.
pub(crate) fn print_outcome(
    outcome: &ReportOutcome,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            write!(out, "{}", outcome.rendered.text)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &outcome.report.buckets)?;
            writeln!(out)?;
        }
        OutputFormat::None => {}
    }
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
