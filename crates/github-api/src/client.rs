//! GitHub API HTTP client

use crate::error::{GithubError, Result};
use crate::types::{Repo, RepoUpdate};
use std::time::Duration;

/// Client for the GitHub REST API, scoped to one user's repositories
pub struct GithubClient {
    http: reqwest::Client,
    username: String,
    token: Option<String>,
}

impl GithubClient {
    /// Base URL for the GitHub REST API
    pub const BASE_URL: &'static str = "https://api.github.com";

    /// Create a new client for `username`'s repositories
    ///
    /// A token raises the rate limit and is required for the update call;
    /// the listing works unauthenticated.
    pub fn new(username: &str, token: Option<String>) -> Self {
        Self::with_timeout(username, token, Duration::from_secs(10))
    }

    /// Create a new client with a custom timeout
    pub fn with_timeout(username: &str, token: Option<String>, timeout: Duration) -> Self {
        // GitHub rejects requests without a User-Agent
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("folio-appview/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            username: username.to_string(),
            token,
        }
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.header(reqwest::header::AUTHORIZATION, format!("token {}", token)),
            None => req,
        }
    }

    /// List the user's repositories, most recently updated first
    pub async fn list_repos(&self) -> Result<Vec<Repo>> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&direction=desc",
            Self::BASE_URL,
            urlencoding::encode(&self.username)
        );

        let response = self.authorize(self.http.get(&url)).send().await?;

        if !response.status().is_success() {
            return Err(GithubError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Update a repository's name, description, and topics
    pub async fn update_repo(&self, full_name: &str, update: &RepoUpdate) -> Result<Repo> {
        let url = format!("{}/repos/{}", Self::BASE_URL, full_name);

        let response = self
            .authorize(self.http.patch(&url))
            .json(update)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GithubError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}
