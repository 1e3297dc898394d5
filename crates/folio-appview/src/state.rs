use std::sync::Arc;
use std::time::Duration;

use blog_api::{BlogClient, Post};
use chrono::{DateTime, Utc};
use collection_cache::CollectionCache;
use github_api::{GithubClient, Repo};

use crate::config::Config;

/// Shared application state passed to all route handlers
///
/// The two collection caches are owned here, one per upstream collection;
/// handlers reach them through this state rather than through globals.
#[derive(Clone)]
pub struct AppState {
    pub blog: Arc<BlogClient>,
    pub github: Arc<GithubClient>,
    pub posts_cache: Arc<CollectionCache<Post>>,
    pub repos_cache: Arc<CollectionCache<Repo>>,
    /// Plain client for proxying wallpaper downloads
    pub http: reqwest::Client,
    pub wallpaper_base_url: String,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let ttl = Duration::from_secs(config.cache_ttl_secs);

        Self {
            blog: Arc::new(BlogClient::new(&config.blog_api_url)),
            github: Arc::new(GithubClient::new(
                &config.github_username,
                config.github_token.clone(),
            )),
            posts_cache: Arc::new(CollectionCache::new(ttl)),
            repos_cache: Arc::new(CollectionCache::new(ttl)),
            http: reqwest::Client::new(),
            wallpaper_base_url: config.wallpaper_base_url.trim_end_matches('/').to_string(),
            started_at: Utc::now(),
        }
    }
}
