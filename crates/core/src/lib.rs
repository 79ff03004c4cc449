// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! dt-core: classification core for the dailytodo report.
//!
//! Raw issue records go through four steps, each in its own module:
//!
//! - [`normalize`] - parse due-date text, push midnight due dates to end of day
//! - [`order`] - stable least-significant-first sort (due, priority, status, summary)
//! - [`classify`] - route each issue to one [`Bucket`] and check nothing is left over
//! - [`report`] - glue the steps together and resolve the report recipient
//!
//! The crate performs no network or rendering work; the `dailytodo` CLI
//! supplies issues and consumes the resulting [`Report`].

pub mod bucket;
pub mod classify;
pub mod clock;
pub mod error;
pub mod issue;
pub mod jsonl;
pub mod normalize;
pub mod order;
pub mod report;

#[cfg(test)]
mod testing;

pub use bucket::{Bucket, BucketMap};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use issue::{Assignee, Issue, Priority, RawIssue, Status};
pub use order::DueKey;
pub use report::Report;
