//! Best-effort diagnostic dumps of raw Jira responses.
//!
//! One file per issue fetch and one per search, under a local `logs`
//! directory created on demand. Write failures are swallowed with a
//! warning; they never reach the caller. Concurrent fetches of the same
//! issue may overwrite each other's file, which is acceptable for a
//! diagnostic-only artifact.

use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::models::{Issue, SearchResult};

const LOGS_DIR: &str = "logs";

pub(crate) fn write_issue_log(issue: &Issue) {
    let name = format!("jira-issue-{}.json", issue.key);
    write_log(Path::new(LOGS_DIR), &name, issue);
}

pub(crate) fn write_search_log(result: &SearchResult) {
    let stamp = Utc::now()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    let name = format!("jira-search-{stamp}.json");
    write_log(Path::new(LOGS_DIR), &name, result);
}

fn write_log(dir: &Path, name: &str, value: &impl Serialize) {
    if let Err(e) = try_write(dir, name, value) {
        tracing::warn!("Failed to write log file {}: {}", name, e);
    }
}

fn try_write(dir: &Path, name: &str, value: &impl Serialize) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
    fs::write(dir.join(name), json)
}
