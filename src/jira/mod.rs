//! Jira REST client, JQL construction, and the epic roll-up.

pub mod client;
pub mod error;
mod log;
pub mod query;
pub mod summary;

pub use client::JiraClient;
pub use error::{Error, Result};
