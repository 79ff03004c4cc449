// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML rendering with tera.
//!
//! The built-in layout is compiled into the binary. A config can point at
//! a replacement template; it receives the same context.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};

use dt_core::{Issue, Report};

use crate::display::{format_due, format_report};
use crate::error::Result;

const TEMPLATE_NAME: &str = "report.html";
const DEFAULT_TEMPLATE: &str = include_str!("../templates/report.html.tera");
const TITLE: &str = "Daily Todo";

/// A report rendered for delivery: HTML body plus plain-text alternative.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub html: String,
    pub text: String,
}

#[derive(Serialize)]
struct ReportView<'a> {
    title: &'a str,
    generated_at: String,
    recipient: Option<&'a str>,
    total: usize,
    sections: Vec<SectionView<'a>>,
}

#[derive(Serialize)]
struct SectionView<'a> {
    heading: &'static str,
    slug: &'static str,
    issues: Vec<IssueView<'a>>,
}

#[derive(Serialize)]
struct IssueView<'a> {
    key: &'a str,
    url: Option<String>,
    summary: &'a str,
    status: &'a str,
    priority: &'a str,
    due: Option<String>,
}

/// Renders reports to HTML and text.
pub struct Renderer {
    tera: Tera,
    browse_base: Option<String>,
}

impl Renderer {
    /// Create a renderer.
    ///
    /// `template` replaces the built-in layout. `browse_base` is the Jira
    /// site URL used to link issue keys; without it keys are plain text.
    pub fn new(template: Option<&Path>, browse_base: Option<&str>) -> Result<Self> {
        let source = match template {
            Some(path) => {
                tracing::debug!(path = %path.display(), "using template override");
                fs::read_to_string(path)?
            }
            None => DEFAULT_TEMPLATE.to_string(),
        };

        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, &source)?;

        Ok(Renderer {
            tera,
            browse_base: browse_base.map(|url| url.trim_end_matches('/').to_string()),
        })
    }

    fn issue_url(&self, key: &str) -> Option<String> {
        self.browse_base
            .as_ref()
            .map(|base| format!("{}/browse/{}", base, key))
    }

    fn issue_view<'a>(&self, issue: &'a Issue) -> IssueView<'a> {
        IssueView {
            key: &issue.key,
            url: self.issue_url(&issue.key),
            summary: &issue.summary,
            status: &issue.status.name,
            priority: &issue.priority.name,
            due: issue.due.map(format_due),
        }
    }

    /// Render the HTML body. Empty buckets are left out.
    pub fn html(&self, report: &Report) -> Result<String> {
        let view = ReportView {
            title: TITLE,
            generated_at: report.generated_at.format("%A %Y-%m-%d %H:%M").to_string(),
            recipient: report
                .recipient
                .as_ref()
                .map(|assignee| assignee.display_name.as_str()),
            total: report.len(),
            sections: report
                .buckets
                .non_empty()
                .map(|(bucket, issues)| SectionView {
                    heading: bucket.as_str(),
                    slug: bucket.slug(),
                    issues: issues.iter().map(|issue| self.issue_view(issue)).collect(),
                })
                .collect(),
        };

        let context = Context::from_serialize(&view)?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }

    /// Render both the HTML body and the plain-text alternative.
    pub fn render(&self, report: &Report) -> Result<Rendered> {
        Ok(Rendered {
            html: self.html(report)?,
            text: format_report(report),
        })
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
