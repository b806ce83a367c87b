//! Error taxonomy for the Jira client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The remote service answered with a non-2xx status. The message is
    /// extracted from the structured error body when one is present.
    #[error("Jira API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// No response was received at all (network, DNS, timeout).
    #[error("Failed to make request to Jira API: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
