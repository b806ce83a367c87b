//! Process configuration sourced from the environment.

use anyhow::Context;

/// Port used for the SSE transport when neither `--port` nor `HTTP_PORT`
/// is given.
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Connection settings for the Jira REST API.
///
/// Carried as an explicit value into [`crate::jira::JiraClient`] rather than
/// read ambiently, so query building and aggregation stay testable without
/// network access.
#[derive(Debug, Clone)]
pub struct JiraConfig {
    /// Base URL of the Jira site, e.g. `https://your-domain.atlassian.net`.
    pub base_url: String,
    /// Account email used for HTTP Basic auth.
    pub username: String,
    /// API token used as the Basic auth password.
    pub api_token: String,
}

impl JiraConfig {
    /// Read `JIRA_BASE_URL`, `JIRA_USERNAME`, and `JIRA_API_TOKEN`.
    ///
    /// Absence of any of them is a fatal startup condition.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            base_url: require("JIRA_BASE_URL")?,
            username: require("JIRA_USERNAME")?,
            api_token: require("JIRA_API_TOKEN")?,
        })
    }
}

/// Port for the SSE transport from `HTTP_PORT`, if set and valid.
pub fn http_port_from_env() -> Option<u16> {
    std::env::var("HTTP_PORT").ok().and_then(|v| v.parse().ok())
}

fn require(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("{name} environment variable is required"))
}
