//! Epic roll-up: grouping, counting, and done classification.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Issue;

/// Status names treated as finished work.
///
/// A hardcoded heuristic rather than the tracker's workflow configuration;
/// matching is a case-sensitive literal comparison.
pub const DONE_STATUSES: [&str; 5] = ["Done", "Closed", "Resolved", "Complete", "Completed"];

/// Aggregated view of an epic's children.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpicSummary {
    pub epic: Issue,
    pub total_issues: usize,
    pub non_done_issues: usize,
    pub done_issues: usize,
    pub issues_by_status: BTreeMap<String, u32>,
    pub issues_by_type: BTreeMap<String, u32>,
    pub issues_by_priority: BTreeMap<String, u32>,
    pub unassigned_issues: usize,
    pub non_done_tickets: Vec<TicketSummary>,
}

/// Compact record of a single unfinished child issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketSummary {
    pub key: String,
    pub summary: String,
    pub status: String,
    #[serde(rename = "type")]
    pub issue_type: String,
    pub priority: String,
    /// Display name, or `null` when the issue is unassigned.
    pub assignee: Option<String>,
}

fn is_done(status: &str) -> bool {
    DONE_STATUSES.contains(&status)
}

/// Roll up an epic's children in a single pass.
///
/// The three grouping maps accumulate every issue regardless of done state;
/// `non_done_tickets` keeps the input order, which is the remote's sort
/// order. Never fails: validation happens upstream when the epic and its
/// children are fetched.
pub fn summarize(epic: Issue, issues: Vec<Issue>) -> EpicSummary {
    let total_issues = issues.len();

    let mut issues_by_status: BTreeMap<String, u32> = BTreeMap::new();
    let mut issues_by_type: BTreeMap<String, u32> = BTreeMap::new();
    let mut issues_by_priority: BTreeMap<String, u32> = BTreeMap::new();
    let mut done_issues = 0;
    let mut unassigned_issues = 0;
    let mut non_done_tickets = Vec::new();

    for issue in &issues {
        let status = issue.fields.status.name.clone();
        let issue_type = issue.fields.issue_type.name.clone();
        let priority = issue
            .fields
            .priority
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "None".to_string());
        let assignee = issue
            .fields
            .assignee
            .as_ref()
            .map(|a| a.display_name.clone());

        *issues_by_status.entry(status.clone()).or_insert(0) += 1;
        *issues_by_type.entry(issue_type.clone()).or_insert(0) += 1;
        *issues_by_priority.entry(priority.clone()).or_insert(0) += 1;

        if is_done(&status) {
            done_issues += 1;
        } else {
            non_done_tickets.push(TicketSummary {
                key: issue.key.clone(),
                summary: issue.fields.summary.clone(),
                status,
                issue_type,
                priority,
                assignee: assignee.clone(),
            });
        }

        if assignee.is_none() {
            unassigned_issues += 1;
        }
    }

    EpicSummary {
        epic,
        total_issues,
        non_done_issues: total_issues - done_issues,
        done_issues,
        issues_by_status,
        issues_by_type,
        issues_by_priority,
        unassigned_issues,
        non_done_tickets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn done_matching_is_case_sensitive() {
        assert!(is_done("Done"));
        assert!(is_done("Closed"));
        assert!(is_done("Completed"));
        assert!(!is_done("done"));
        assert!(!is_done("DONE"));
        assert!(!is_done("In Progress"));
    }

    #[test]
    fn ticket_summary_serializes_type_and_null_assignee() {
        let ticket = TicketSummary {
            key: "PROJ-2".to_string(),
            summary: "Fix the flaky build".to_string(),
            status: "In Progress".to_string(),
            issue_type: "Bug".to_string(),
            priority: "High".to_string(),
            assignee: None,
        };

        let value = serde_json::to_value(&ticket).expect("serialize");

        assert_eq!(value["type"], "Bug");
        assert_eq!(value["assignee"], serde_json::Value::Null);
    }
}
