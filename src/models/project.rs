use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::User;

/// A project as returned by `GET /rest/api/3/project`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<User>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// An issue type as returned by `GET /rest/api/3/issuetype`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueType {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtask: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
