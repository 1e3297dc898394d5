use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod blog;
pub mod health;
pub mod projects;
pub mod wallpapers;

#[cfg(test)]
pub(crate) mod test_util;

/// Create the HTTP router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        // Blog
        .route("/api/posts", get(blog::list_posts))
        .route("/api/posts/{slug}", get(blog::get_post))
        // Projects
        .route("/api/projects", get(projects::list_projects))
        // Wallpapers
        .route("/api/wallpapers", get(wallpapers::list_packs))
        .route("/api/wallpapers/{id}", get(wallpapers::get_pack))
        .route("/api/download", get(wallpapers::download))
        // Admin (localhost only)
        .route("/api/admin/posts", post(admin::create_post))
        .route("/api/admin/posts/{id}", put(admin::update_post))
        .route("/api/admin/projects", patch(admin::update_project))
        .with_state(state)
}
