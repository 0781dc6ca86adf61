//! Commit history export.
//!
//! Serializes the full commit log to `git_history.json` in the working
//! directory as an ordered array of `{hash, date, message, author}` records,
//! newest first, 2-space indented.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::git::{Git, LogEntry};

/// Export file name, relative to the working directory.
pub const HISTORY_FILE: &str = "git_history.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub hash: String,
    pub date: DateTime<FixedOffset>,
    pub message: String,
    pub author: String,
}

impl HistoryEntry {
    fn from_log(entry: LogEntry) -> Result<Self> {
        let date = DateTime::parse_from_rfc3339(&entry.date)?;
        Ok(Self {
            hash: entry.hash,
            date,
            message: entry.message,
            author: entry.author,
        })
    }
}

/// Write the full commit log to [`HISTORY_FILE`] and return its path.
pub fn export(git: &Git) -> Result<PathBuf> {
    let entries = git.log(None)?;
    let history = to_history(entries)?;
    let path = git.workdir().join(HISTORY_FILE);
    fs::write(&path, serde_json::to_string_pretty(&history)?)?;
    Ok(path)
}

fn to_history(entries: Vec<LogEntry>) -> Result<Vec<HistoryEntry>> {
    entries.into_iter().map(HistoryEntry::from_log).collect()
}
