// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Jira REST search client.
//!
//! Issues are fetched with `GET /rest/api/2/search`, one page at a time,
//! until the reported `total` has been collected.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use dt_core::{Assignee, Priority, RawIssue, Status};

use super::IssueSource;
use crate::config::JiraConfig;
use crate::error::{Error, Result};

const SEARCH_PATH: &str = "/rest/api/2/search";
const SEARCH_FIELDS: &str = "summary,status,priority,duedate,assignee";

/// One page of `/search` results.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub start_at: u32,
    #[serde(default)]
    pub max_results: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub issues: Vec<JiraIssue>,
}

#[derive(Debug, Deserialize)]
pub struct JiraIssue {
    pub key: String,
    pub fields: JiraFields,
}

#[derive(Debug, Deserialize)]
pub struct JiraFields {
    pub summary: String,
    pub status: JiraNamed,
    pub priority: JiraNamed,
    #[serde(default)]
    pub duedate: Option<String>,
    #[serde(default)]
    pub assignee: Option<JiraUser>,
}

/// Status and priority objects; Jira sends their ids as strings.
#[derive(Debug, Deserialize)]
pub struct JiraNamed {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
    pub display_name: String,
    #[serde(default)]
    pub email_address: Option<String>,
}

/// Blocking client for one Jira site.
pub struct JiraClient {
    http: Client,
    config: JiraConfig,
}

impl JiraClient {
    pub fn new(config: JiraConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("dailytodo ", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(JiraClient { http, config })
    }

    fn search_url(&self) -> String {
        format!("{}{}", self.config.url.trim_end_matches('/'), SEARCH_PATH)
    }

    fn search_page(&self, start_at: u32) -> Result<SearchPage> {
        tracing::debug!(start_at, "requesting jira search page");
        let start_at = start_at.to_string();
        let max_results = self.config.page_size.to_string();
        let response = self
            .http
            .get(self.search_url())
            .basic_auth(&self.config.user, Some(&self.config.token))
            .header(ACCEPT, "application/json")
            .query(&[
                ("jql", self.config.jql.as_str()),
                ("fields", SEARCH_FIELDS),
                ("startAt", start_at.as_str()),
                ("maxResults", max_results.as_str()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::JiraApi {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<SearchPage>()?)
    }
}

impl IssueSource for JiraClient {
    fn fetch(&self) -> Result<Vec<RawIssue>> {
        let issues = collect_pages(|start_at| self.search_page(start_at))?;
        tracing::info!(count = issues.len(), "fetched issues from jira");
        issues.into_iter().map(map_issue).collect()
    }
}

/// Request pages starting at 0 until `total` issues (or an empty page) arrive.
pub fn collect_pages<F>(mut fetch_page: F) -> Result<Vec<JiraIssue>>
where
    F: FnMut(u32) -> Result<SearchPage>,
{
    let mut issues = Vec::new();
    let mut start_at = 0u32;

    loop {
        let page = fetch_page(start_at)?;
        let received = page.issues.len() as u32;
        let total = page.total;
        issues.extend(page.issues);
        start_at += received;
        if received == 0 || start_at >= total {
            break;
        }
    }

    Ok(issues)
}

/// Convert a Jira search hit into a raw issue.
pub fn map_issue(issue: JiraIssue) -> Result<RawIssue> {
    let JiraIssue { key, fields } = issue;
    let status = Status::new(parse_id(&key, "status", &fields.status.id)?, fields.status.name);
    let priority = Priority::new(
        parse_id(&key, "priority", &fields.priority.id)?,
        fields.priority.name,
    );
    let assignee = fields
        .assignee
        .map(|user| Assignee::new(user.display_name, user.email_address));

    Ok(RawIssue {
        key,
        summary: fields.summary,
        status,
        priority,
        due_date: fields.duedate,
        assignee,
    })
}

fn parse_id(key: &str, field: &str, id: &str) -> Result<u64> {
    id.parse().map_err(|_| {
        Error::UnexpectedResponse(format!("{key}: {field} id '{id}' is not a number"))
    })
}

#[cfg(test)]
#[path = "jira_tests.rs"]
mod tests;
