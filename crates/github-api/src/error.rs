//! Error types for the GitHub client

use std::fmt;

/// Errors that can occur when talking to the GitHub API
#[derive(Debug)]
pub enum GithubError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Failed to parse JSON response
    Json(serde_json::Error),
    /// GitHub answered with a non-success status
    Status(reqwest::StatusCode),
}

impl fmt::Display for GithubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "GitHub HTTP error: {}", e),
            Self::Json(e) => write!(f, "GitHub JSON parse error: {}", e),
            Self::Status(status) => write!(f, "GitHub returned status {}", status),
        }
    }
}

impl std::error::Error for GithubError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Status(_) => None,
        }
    }
}

impl From<reqwest::Error> for GithubError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for GithubError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, GithubError>;
