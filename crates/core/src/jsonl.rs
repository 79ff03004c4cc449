// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSONL (JSON Lines) input.
//!
//! Issue exports are stored one JSON record per line. Blank lines are
//! skipped; a malformed line fails the whole read with its line number.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Reads all records from a JSONL stream.
pub fn read_from<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let reader = BufReader::new(reader);
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|source| Error::ParseLine {
            line: index + 1,
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Reads all records from a JSONL file.
///
/// A missing file is an error: the caller asked for this input explicitly.
pub fn read_all<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)?;
    read_from(file)
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
