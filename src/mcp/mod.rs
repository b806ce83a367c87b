//! MCP server exposing read-only Jira tools.
//!
//! The tool layer is transport-agnostic: the same [`McpServer`] is served
//! over stdio or over the SSE endpoint pair. Business-logic failures from
//! the Jira client never fail the protocol call; they are re-expressed as
//! ordinary text output (the soft-failure convention callers rely on).

mod types;

pub use types::*;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use serde::Serialize;

use crate::jira::JiraClient;

#[derive(Clone)]
pub struct McpServer {
    jira: JiraClient,
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    pub fn new(jira: JiraClient) -> Self {
        Self {
            jira,
            tool_router: Self::tool_router(),
        }
    }

    fn text_result(value: &impl Serialize) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Convert a failed Jira call into successful output text.
    ///
    /// Callers distinguish failure only by inspecting the text; the
    /// protocol call itself fails solely for malformed arguments or
    /// transport breakage.
    fn soft_error(context: &str, error: crate::jira::Error) -> CallToolResult {
        tracing::error!("{}: {}", context, error);
        CallToolResult::success(vec![Content::text(format!("{context}: {error}"))])
    }
}

#[tool_router]
impl McpServer {
    #[tool(description = "Get detailed information about a Jira issue")]
    pub async fn get_issue(
        &self,
        params: Parameters<GetIssueRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        tracing::info!("Fetching issue: {}", req.issue_key);

        match self.jira.get_issue(&req.issue_key).await {
            Ok(issue) => {
                tracing::info!(
                    "Successfully fetched issue: {} - {}",
                    issue.key,
                    issue.fields.summary
                );
                Self::text_result(&issue)
            }
            Err(e) => Ok(Self::soft_error("Error fetching issue", e)),
        }
    }

    #[tool(description = "Get issues assigned to the current user in a project")]
    pub async fn get_assigned_issues(
        &self,
        params: Parameters<GetAssignedIssuesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        tracing::info!(
            "Fetching assigned issues{}",
            req.project_key
                .as_deref()
                .map(|key| format!(" for project: {key}"))
                .unwrap_or_default()
        );

        match self
            .jira
            .get_assigned_issues(req.project_key.as_deref(), req.max_results)
            .await
        {
            Ok(result) => {
                tracing::info!(
                    "Successfully fetched {} assigned issues",
                    result.issues.len()
                );
                Self::text_result(&result)
            }
            Err(e) => Ok(Self::soft_error("Error fetching assigned issues", e)),
        }
    }

    #[tool(description = "Get issues of a specific type")]
    pub async fn get_issues_by_type(
        &self,
        params: Parameters<GetIssuesByTypeRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        tracing::info!("Fetching issues of type: {}", req.issue_type);

        match self
            .jira
            .get_issues_by_type(&req.issue_type, req.project_key.as_deref(), req.max_results)
            .await
        {
            Ok(result) => {
                tracing::info!(
                    "Successfully fetched {} issues of type {}",
                    result.issues.len(),
                    req.issue_type
                );
                Self::text_result(&result)
            }
            Err(e) => Ok(Self::soft_error("Error fetching issues by type", e)),
        }
    }

    #[tool(description = "Get list of available Jira projects")]
    pub async fn get_projects(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Fetching projects");

        match self.jira.get_projects().await {
            Ok(projects) => {
                tracing::info!("Successfully fetched {} projects", projects.len());
                Self::text_result(&projects)
            }
            Err(e) => Ok(Self::soft_error("Error fetching projects", e)),
        }
    }

    #[tool(description = "Get list of available Jira issue types")]
    pub async fn get_issue_types(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Fetching issue types");

        match self.jira.get_issue_types().await {
            Ok(issue_types) => {
                tracing::info!("Successfully fetched {} issue types", issue_types.len());
                Self::text_result(&issue_types)
            }
            Err(e) => Ok(Self::soft_error("Error fetching issue types", e)),
        }
    }

    #[tool(description = "Get issues under a specific epic")]
    pub async fn get_epic_issues(
        &self,
        params: Parameters<GetEpicIssuesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        tracing::info!("Fetching issues under epic: {}", req.epic_key);

        match self
            .jira
            .get_epic_issues(&req.epic_key, req.max_results)
            .await
        {
            Ok(result) => {
                tracing::info!(
                    "Successfully fetched {} issues under epic {}",
                    result.issues.len(),
                    req.epic_key
                );
                Self::text_result(&result)
            }
            Err(e) => Ok(Self::soft_error("Error fetching issues under epic", e)),
        }
    }

    #[tool(description = "Get summary of non-DONE tickets under an epic with statistics")]
    pub async fn get_epic_summary(
        &self,
        params: Parameters<GetEpicSummaryRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        tracing::info!("Fetching epic summary for: {}", req.epic_key);

        match self.jira.get_epic_summary(&req.epic_key).await {
            Ok(summary) => {
                tracing::info!(
                    "Successfully generated summary for epic {}: {}/{} issues remaining",
                    req.epic_key,
                    summary.non_done_issues,
                    summary.total_issues
                );
                Self::text_result(&EpicSummaryResponse::from(summary))
            }
            Err(e) => Ok(Self::soft_error("Error fetching epic summary", e)),
        }
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "jira-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            instructions: Some(
                r#"Read-only Jira tools.

LOOKUP:
- get_issue: fetch one issue by key (e.g., PROJECT-123)
- get_projects: list visible projects
- get_issue_types: list issue types

SEARCH:
- get_assigned_issues: issues assigned to the authenticated user, newest first;
  optionally scoped with projectKey
- get_issues_by_type: issues of one type (Bug, Story, ...), optionally scoped
  with projectKey

EPICS:
- get_epic_issues: direct children of an epic
- get_epic_summary: roll-up of an epic's children - totals, done/non-done
  split, completion percentage, breakdowns by status/type/priority, and the
  list of unfinished tickets

All tools return pretty-printed JSON as text. When a Jira call fails, the
tool still succeeds and the text starts with "Error ..." describing what
went wrong - inspect the text to detect failures."#
                    .into(),
            ),
            ..Default::default()
        }
    }
}

/// Serve the tools over stdio. Logging must go to stderr in this mode so
/// stdout stays a clean protocol channel.
pub async fn run_stdio_server(jira: JiraClient) -> anyhow::Result<()> {
    use tokio::io::{stdin, stdout};

    tracing::info!("Starting MCP server via stdio");

    let service = McpServer::new(jira);
    let server = service.serve((stdin(), stdout())).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!("MCP server stopped: {:?}", quit_reason);

    Ok(())
}

/// Serve the tools over HTTP: `GET /sse` opens a long-lived event stream
/// per client, `POST /messages` delivers a single client-to-server message
/// for that stream. Runs until Ctrl-C.
pub async fn run_sse_server(jira: JiraClient, port: u16) -> anyhow::Result<()> {
    use rmcp::transport::sse_server::{SseServer, SseServerConfig};
    use tower_http::{cors::CorsLayer, trace::TraceLayer};

    let bind = format!("127.0.0.1:{port}").parse()?;
    let config = SseServerConfig {
        bind,
        sse_path: "/sse".to_string(),
        post_path: "/messages".to_string(),
        ct: tokio_util::sync::CancellationToken::new(),
        sse_keep_alive: None,
    };

    let (sse_server, router) = SseServer::new(config);
    let router = router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(sse_server.config.bind).await?;
    tracing::info!("SSE endpoint available at http://{}/sse", bind);
    tracing::info!("Message endpoint available at http://{}/messages", bind);

    let server_ct = sse_server.config.ct.child_token();
    let server = axum::serve(listener, router).with_graceful_shutdown(async move {
        server_ct.cancelled().await;
    });
    tokio::spawn(async move {
        if let Err(e) = server.await {
            tracing::error!("SSE server error: {}", e);
        }
    });

    // One service instance per connected client, sharing the HTTP pool.
    let service_ct = sse_server.with_service(move || McpServer::new(jira.clone()));

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    service_ct.cancel();

    Ok(())
}
