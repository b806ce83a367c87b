//! Authenticated HTTP client for the Jira REST API.
//!
//! Success bodies are decoded into the declared type and trusted as-is; the
//! remote shape is not validated beyond what deserialization requires.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

use crate::config::JiraConfig;
use crate::jira::error::{Error, Result};
use crate::jira::summary::EpicSummary;
use crate::jira::{log, query, summary};
use crate::models::{Issue, IssueType, Project, SearchRequest, SearchResult};

#[derive(Debug, Clone)]
pub struct JiraClient {
    base_url: String,
    username: String,
    api_token: String,
    client: Client,
}

impl JiraClient {
    /// Create a client for one Jira site. A trailing slash on the base URL
    /// is stripped so endpoint paths concatenate cleanly.
    pub fn new(config: JiraConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username,
            api_token: config.api_token,
            client: Client::new(),
        }
    }

    /// Build a request against `base_url + path` with Basic auth and JSON
    /// headers.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Calling {} {}", method, url);
        self.client
            .request(method, &url)
            .basic_auth(&self.username, Some(&self.api_token))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
    }

    /// Decode a success body, or convert an error response into
    /// [`Error::Api`] with the message extracted from its body.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!("Jira API error response ({}): {}", status, body);
        Err(Error::Api {
            status: status.as_u16(),
            message: extract_error_message(&body),
        })
    }

    // ============================================================
    // Raw endpoint calls
    // ============================================================

    /// Fetch a single issue by key.
    pub async fn get_issue(&self, issue_key: &str) -> Result<Issue> {
        let endpoint = format!("/rest/api/3/issue/{issue_key}");
        let response = self.request(Method::GET, &endpoint).send().await?;
        let issue: Issue = self.handle_response(response).await?;
        log::write_issue_log(&issue);
        Ok(issue)
    }

    /// Run a JQL search.
    pub async fn search(&self, params: &SearchRequest) -> Result<SearchResult> {
        let response = self
            .request(Method::POST, "/rest/api/3/search")
            .json(params)
            .send()
            .await?;
        let result: SearchResult = self.handle_response(response).await?;
        log::write_search_log(&result);
        Ok(result)
    }

    /// List all visible projects.
    pub async fn get_projects(&self) -> Result<Vec<Project>> {
        let response = self.request(Method::GET, "/rest/api/3/project").send().await?;
        self.handle_response(response).await
    }

    /// List all issue types.
    pub async fn get_issue_types(&self) -> Result<Vec<IssueType>> {
        let response = self
            .request(Method::GET, "/rest/api/3/issuetype")
            .send()
            .await?;
        self.handle_response(response).await
    }

    // ============================================================
    // Query-builder backed calls
    // ============================================================

    /// Issues assigned to the authenticated user.
    pub async fn get_assigned_issues(
        &self,
        project_key: Option<&str>,
        max_results: Option<u32>,
    ) -> Result<SearchResult> {
        self.search(&query::assigned_to(project_key, max_results)).await
    }

    /// Issues of a specific type.
    pub async fn get_issues_by_type(
        &self,
        issue_type: &str,
        project_key: Option<&str>,
        max_results: Option<u32>,
    ) -> Result<SearchResult> {
        self.search(&query::by_type(issue_type, project_key, max_results))
            .await
    }

    /// Direct children of an epic.
    pub async fn get_epic_issues(
        &self,
        epic_key: &str,
        max_results: Option<u32>,
    ) -> Result<SearchResult> {
        self.search(&query::children_of_epic(epic_key, max_results))
            .await
    }

    /// Fetch an epic and roll up all of its children.
    pub async fn get_epic_summary(&self, epic_key: &str) -> Result<EpicSummary> {
        let epic = self.get_issue(epic_key).await?;
        let children = self
            .search(&query::all_children_for_summary(epic_key))
            .await?;
        Ok(summary::summarize(epic, children.issues))
    }
}

/// Pull a human-readable message out of a Jira error body.
///
/// Priority order: the first entry of `errorMessages`, then the `message`
/// field, then a literal fallback.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("errorMessages")
                .and_then(|m| m.get(0))
                .and_then(|m| m.as_str())
                .or_else(|| v.get("message").and_then(|m| m.as_str()))
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}
