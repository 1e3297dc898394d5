use axum::extract::State;
use axum::Json;
use github_api::Repo;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/projects
///
/// Read-through over the repository cache: served from cache while fresh,
/// refilled from GitHub on a miss. A failed fetch leaves the cache empty
/// and surfaces as a 502.
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Repo>>, AppError> {
    if let Some(repos) = state.repos_cache.get().await {
        return Ok(Json(repos));
    }

    let repos = state.github.list_repos().await?;
    state.repos_cache.set(repos.clone()).await;
    debug!(count = repos.len(), "Refilled repository cache");

    Ok(Json(repos))
}
