//! Error types for the blog service client

use std::fmt;

/// Errors that can occur when talking to the blog service
#[derive(Debug)]
pub enum BlogError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Failed to parse JSON response
    Json(serde_json::Error),
    /// The service answered with a non-success status
    Status(reqwest::StatusCode),
}

impl fmt::Display for BlogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "blog API HTTP error: {}", e),
            Self::Json(e) => write!(f, "blog API JSON parse error: {}", e),
            Self::Status(status) => write!(f, "blog API returned status {}", status),
        }
    }
}

impl std::error::Error for BlogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Status(_) => None,
        }
    }
}

impl From<reqwest::Error> for BlogError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for BlogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for blog service operations
pub type Result<T> = std::result::Result<T, BlogError>;
