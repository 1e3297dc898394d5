use axum::extract::State;
use axum::Json;
use chrono::Utc;
use collection_cache::CacheStats;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
    pub posts_cache: CacheStats,
    pub repos_cache: CacheStats,
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime_secs = (Utc::now() - state.started_at).num_seconds() as u64;

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs,
        posts_cache: state.posts_cache.stats().await,
        repos_cache: state.repos_cache.stats().await,
    })
}
