//! Read-only Jira tools served over the Model Context Protocol.
//!
//! The [`jira`] module talks to the Jira REST API and computes the epic
//! roll-up; [`mcp`] exposes those calls as MCP tools over stdio or an
//! HTTP/SSE endpoint pair.

pub mod config;
pub mod jira;
pub mod mcp;
pub mod models;
pub mod urls;
