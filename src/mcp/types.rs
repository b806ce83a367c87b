//! Request and response types for MCP tools.

use std::collections::BTreeMap;

use rmcp::schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::jira::summary::{EpicSummary, TicketSummary};

// ============================================================
// Request Types
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetIssueRequest {
    #[schemars(description = "The key of the Jira issue to fetch (e.g., PROJECT-123)")]
    pub issue_key: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetAssignedIssuesRequest {
    #[schemars(description = "The key of the Jira project to fetch issues from")]
    #[serde(default)]
    pub project_key: Option<String>,
    #[schemars(description = "Maximum number of results to return")]
    #[serde(default)]
    pub max_results: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetIssuesByTypeRequest {
    #[schemars(description = "The type of issue to fetch (e.g., Bug, Story, Epic)")]
    pub issue_type: String,
    #[schemars(description = "The key of the Jira project to fetch issues from")]
    #[serde(default)]
    pub project_key: Option<String>,
    #[schemars(description = "Maximum number of results to return")]
    #[serde(default)]
    pub max_results: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetEpicIssuesRequest {
    #[schemars(description = "The key of the epic to get issues for (e.g., PROJECT-123)")]
    pub epic_key: String,
    #[schemars(description = "Maximum number of results to return")]
    #[serde(default)]
    pub max_results: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetEpicSummaryRequest {
    #[schemars(description = "The key of the epic to summarize (e.g., PROJECT-123)")]
    pub epic_key: String,
}

// ============================================================
// Response Types
// ============================================================

/// The epic roll-up as presented to callers.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpicSummaryResponse {
    pub epic: EpicHeader,
    pub statistics: EpicStatistics,
    pub breakdown: EpicBreakdown,
    pub non_done_tickets: Vec<TicketSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpicHeader {
    pub key: String,
    pub summary: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpicStatistics {
    pub total_issues: usize,
    pub done_issues: usize,
    pub non_done_issues: usize,
    pub unassigned_issues: usize,
    pub completion_percentage: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpicBreakdown {
    pub by_status: BTreeMap<String, u32>,
    pub by_type: BTreeMap<String, u32>,
    pub by_priority: BTreeMap<String, u32>,
}

impl From<EpicSummary> for EpicSummaryResponse {
    fn from(summary: EpicSummary) -> Self {
        Self {
            epic: EpicHeader {
                key: summary.epic.key,
                summary: summary.epic.fields.summary,
                status: summary.epic.fields.status.name,
            },
            statistics: EpicStatistics {
                total_issues: summary.total_issues,
                done_issues: summary.done_issues,
                non_done_issues: summary.non_done_issues,
                unassigned_issues: summary.unassigned_issues,
                completion_percentage: completion_percentage(
                    summary.done_issues,
                    summary.total_issues,
                ),
            },
            breakdown: EpicBreakdown {
                by_status: summary.issues_by_status,
                by_type: summary.issues_by_type,
                by_priority: summary.issues_by_priority,
            },
            non_done_tickets: summary.non_done_tickets,
        }
    }
}

/// Integer completion percentage shown in the epic summary.
///
/// Rounds to the nearest whole percent; an epic with no children reports 0.
pub fn completion_percentage(done_issues: usize, total_issues: usize) -> u32 {
    if total_issues == 0 {
        return 0;
    }
    (done_issues as f64 / total_issues as f64 * 100.0).round() as u32
}
