// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Clap styles matching the help colors.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Getting-started block shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  dailytodo config init       Write a starter config
  dailytodo report            Print today's buckets
  dailytodo report --email    Also email the HTML report",
    )
}

/// Examples block for `dailytodo report --help`.
pub fn report_examples() -> String {
    colors::examples(
        "\
Examples:
  dailytodo report                          Fetch from Jira and print buckets
  dailytodo report --email                  Email the report to the assignee
  dailytodo report --input issues.jsonl     Read issues from a JSONL file
  dailytodo report --format json            Print buckets as JSON
  dailytodo report --out <path>             Write the HTML report to <path>",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
