//! JQL construction for the search-backed tools.
//!
//! Pure functions, no I/O. Values are interpolated into the query string
//! verbatim; a quote embedded in an issue type or key produces invalid JQL,
//! which the remote rejects with a syntax error.

use crate::models::SearchRequest;

/// Result cap applied when the caller does not ask for one.
pub const DEFAULT_MAX_RESULTS: u32 = 50;

/// Cap used when rolling up an epic. Large enough to approximate "all
/// children" without paginating.
pub const SUMMARY_MAX_RESULTS: u32 = 1000;

const ISSUE_FIELDS: [&str; 7] = [
    "summary",
    "description",
    "status",
    "issuetype",
    "priority",
    "assignee",
    "project",
];

/// Issues assigned to the authenticated user, most recently updated first.
pub fn assigned_to(project_key: Option<&str>, max_results: Option<u32>) -> SearchRequest {
    let jql = match project_key {
        Some(key) => format!("assignee = currentUser() AND project = {key} ORDER BY updated DESC"),
        None => "assignee = currentUser() ORDER BY updated DESC".to_string(),
    };
    SearchRequest {
        jql,
        start_at: None,
        max_results: Some(max_results.unwrap_or(DEFAULT_MAX_RESULTS)),
        fields: field_list(&ISSUE_FIELDS),
    }
}

/// Issues of a given type, optionally scoped to one project.
pub fn by_type(
    issue_type: &str,
    project_key: Option<&str>,
    max_results: Option<u32>,
) -> SearchRequest {
    let jql = match project_key {
        Some(key) => format!("issuetype = \"{issue_type}\" AND project = {key} ORDER BY updated DESC"),
        None => format!("issuetype = \"{issue_type}\" ORDER BY updated DESC"),
    };
    SearchRequest {
        jql,
        start_at: None,
        max_results: Some(max_results.unwrap_or(DEFAULT_MAX_RESULTS)),
        fields: field_list(&ISSUE_FIELDS),
    }
}

/// Direct children of an epic, via the modern `parent` field.
pub fn children_of_epic(epic_key: &str, max_results: Option<u32>) -> SearchRequest {
    let jql = format!("parent = \"{epic_key}\" ORDER BY updated DESC");
    let mut fields = ISSUE_FIELDS.to_vec();
    fields.push("parent");
    SearchRequest {
        jql,
        start_at: None,
        max_results: Some(max_results.unwrap_or(DEFAULT_MAX_RESULTS)),
        fields: field_list(&fields),
    }
}

/// Every child of an epic, with only the fields the roll-up reads.
pub fn all_children_for_summary(epic_key: &str) -> SearchRequest {
    let jql = format!("parent = \"{epic_key}\" ORDER BY status ASC, priority DESC");
    SearchRequest {
        jql,
        start_at: None,
        max_results: Some(SUMMARY_MAX_RESULTS),
        fields: field_list(&["summary", "status", "issuetype", "priority", "assignee"]),
    }
}

fn field_list(names: &[&str]) -> Option<Vec<String>> {
    Some(names.iter().map(|s| s.to_string()).collect())
}
