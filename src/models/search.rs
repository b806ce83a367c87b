use serde::{Deserialize, Serialize};

use super::Issue;

/// Body of a `POST /rest/api/3/search` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// JQL filter and sort expression, evaluated by the remote service.
    pub jql: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_at: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    /// Field names to return per issue; omitted means the remote default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

/// A single page of search results, in the order the remote returned them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub start_at: u32,
    #[serde(default)]
    pub max_results: u32,
    #[serde(default)]
    pub total: u32,
    pub issues: Vec<Issue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_round_trips_through_the_wire_format() {
        let request = SearchRequest {
            jql: "parent = \"PROJ-1\" ORDER BY updated DESC".to_string(),
            start_at: None,
            max_results: Some(50),
            fields: Some(vec!["summary".to_string(), "status".to_string()]),
        };

        let body = serde_json::to_value(&request).expect("serialize");
        let parsed: SearchRequest = serde_json::from_value(body).expect("deserialize");

        assert_eq!(parsed, request);
    }

    #[test]
    fn request_uses_camel_case_wire_names() {
        let request = SearchRequest {
            jql: "order by created".to_string(),
            start_at: Some(10),
            max_results: Some(25),
            fields: None,
        };

        let body = serde_json::to_value(&request).expect("serialize");

        assert_eq!(body["startAt"], 10);
        assert_eq!(body["maxResults"], 25);
        assert!(body.get("fields").is_none());
    }
}
