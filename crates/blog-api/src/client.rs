//! Blog service HTTP client

use crate::error::{BlogError, Result};
use crate::types::{NewPost, Post, PostUpdate};
use std::time::Duration;
use tracing::error;

/// Client for the headless blog service that owns the posts
///
/// The service is the source of truth; callers are expected to cache its
/// collections themselves.
pub struct BlogClient {
    http: reqwest::Client,
    base_url: String,
}

impl BlogClient {
    /// Timeout applied to the best-effort view-count request
    const VIEW_TIMEOUT: Duration = Duration::from_secs(5);

    /// Create a new client with default settings (10 second timeout)
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(10))
    }

    /// Create a new client with a custom timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch all published posts, in the order the service returns them
    ///
    /// Drafts (`published_at == null`) are dropped before returning.
    pub async fn all_posts(&self) -> Result<Vec<Post>> {
        let url = format!("{}/posts", self.base_url);
        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BlogError::Status(response.status()));
        }

        let posts: Vec<Post> = response.json().await?;
        Ok(posts
            .into_iter()
            .filter(|post| post.published_at.is_some())
            .collect())
    }

    /// Create a new post and return it as stored by the service
    pub async fn create_post(&self, post: &NewPost) -> Result<Post> {
        let url = format!("{}/posts", self.base_url);
        let response = self.http.post(&url).json(post).send().await?;

        if !response.status().is_success() {
            return Err(BlogError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Update an existing post and return the stored result
    pub async fn update_post(&self, id: i64, update: &PostUpdate) -> Result<Post> {
        let url = format!("{}/posts/{}", self.base_url, id);
        let response = self.http.put(&url).json(update).send().await?;

        if !response.status().is_success() {
            return Err(BlogError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Bump the view counter for a post
    ///
    /// Best-effort: failures are logged and reported as `false`, never
    /// propagated.
    pub async fn increment_view(&self, id: i64) -> bool {
        let url = format!("{}/posts/{}/increment_view", self.base_url, id);

        match self
            .http
            .post(&url)
            .timeout(Self::VIEW_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                error!(post_id = id, error = %e, "Failed to increment view count");
                false
            }
        }
    }
}
