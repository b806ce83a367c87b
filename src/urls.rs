//! Key extraction from Jira web links.
//!
//! Stateless regex helpers for turning a pasted URL into an issue or
//! project key.

use once_cell::sync::Lazy;
use regex::Regex;

static BROWSE_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/browse/([A-Z0-9]+-[0-9]+)").unwrap());
static ISSUES_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/issues/([A-Z0-9]+-[0-9]+)").unwrap());
static ANY_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z0-9]+-[0-9]+)").unwrap());
static PROJECT_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"/projects/([A-Z0-9]+)").unwrap());

/// Extract an issue key (`PROJECT-123`) from a Jira URL.
///
/// Tries the classic `/browse/` path, then the newer `/issues/` path, then
/// any key-shaped substring.
pub fn extract_issue_key(url: &str) -> Option<String> {
    for re in [&*BROWSE_KEY, &*ISSUES_KEY, &*ANY_KEY] {
        if let Some(caps) = re.captures(url) {
            return Some(caps[1].to_string());
        }
    }
    None
}

/// Extract a project key from a Jira URL, either from a `/projects/` path
/// segment or from the project part of an embedded issue key.
pub fn extract_project_key(url: &str) -> Option<String> {
    if let Some(caps) = PROJECT_PATH.captures(url) {
        return Some(caps[1].to_string());
    }
    extract_issue_key(url).and_then(|key| key.split('-').next().map(|p| p.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_browse_urls() {
        assert_eq!(
            extract_issue_key("https://acme.atlassian.net/browse/PROJECT-123"),
            Some("PROJECT-123".to_string())
        );
    }

    #[test]
    fn extracts_from_new_interface_urls() {
        assert_eq!(
            extract_issue_key(
                "https://acme.atlassian.net/jira/software/projects/PROJECT/issues/PROJECT-123"
            ),
            Some("PROJECT-123".to_string())
        );
    }

    #[test]
    fn falls_back_to_any_key_shaped_substring() {
        assert_eq!(
            extract_issue_key("see OPS-42 for details"),
            Some("OPS-42".to_string())
        );
        assert_eq!(extract_issue_key("https://example.com/nothing"), None);
    }

    #[test]
    fn project_key_from_projects_path() {
        assert_eq!(
            extract_project_key("https://acme.atlassian.net/jira/software/projects/PROJECT/issues"),
            Some("PROJECT".to_string())
        );
    }

    #[test]
    fn project_key_from_issue_key() {
        assert_eq!(
            extract_project_key("https://acme.atlassian.net/browse/PROJECT-123"),
            Some("PROJECT".to_string())
        );
        assert_eq!(extract_project_key("https://example.com/"), None);
    }
}
