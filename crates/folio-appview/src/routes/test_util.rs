//! Shared fixtures for router tests

use std::sync::Arc;
use std::time::Duration;

use blog_api::{BlogClient, Post};
use chrono::{TimeZone, Utc};
use collection_cache::CollectionCache;
use github_api::{GithubClient, Repo};

use crate::state::AppState;

/// State whose blog client points at a dead port, so only code paths that
/// stay off the network can succeed.
pub fn test_state() -> AppState {
    AppState {
        blog: Arc::new(BlogClient::with_timeout(
            "http://127.0.0.1:1",
            Duration::from_secs(1),
        )),
        github: Arc::new(GithubClient::with_timeout(
            "octocat",
            None,
            Duration::from_secs(1),
        )),
        posts_cache: Arc::new(CollectionCache::new(Duration::from_secs(3600))),
        repos_cache: Arc::new(CollectionCache::new(Duration::from_secs(3600))),
        http: reqwest::Client::new(),
        wallpaper_base_url: "https://wallpapers.folio.dev".to_string(),
        started_at: Utc::now(),
    }
}

pub fn sample_post(id: i64, slug: &str) -> Post {
    Post {
        id,
        slug: slug.to_string(),
        title: format!("Post {id}"),
        content: "Body text.".to_string(),
        image_url: None,
        published_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()),
        edited_at: None,
        view_count: 0,
        created_at: Utc.with_ymd_and_hms(2024, 2, 28, 9, 0, 0).unwrap(),
    }
}

pub fn sample_repo(id: i64, name: &str) -> Repo {
    Repo {
        id,
        name: name.to_string(),
        full_name: format!("octocat/{name}"),
        description: None,
        html_url: format!("https://github.com/octocat/{name}"),
        stargazers_count: 0,
        forks_count: 0,
        language: Some("Rust".to_string()),
        topics: vec![],
        pinned: false,
    }
}
