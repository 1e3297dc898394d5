//! Localhost-only write endpoints for the blog and the projects showcase

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use blog_api::{NewPost, PostUpdate};
use chrono::{DateTime, Utc};
use github_api::RepoUpdate;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::auth;
use crate::error::AppError;
use crate::state::AppState;
use crate::validation;

const MAX_CONTENT_LEN: usize = 100_000;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    title: String,
    /// Derived from the title when omitted
    slug: Option<String>,
    content: String,
    #[serde(default)]
    is_draft: bool,
    published_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    title: String,
    slug: String,
    content: String,
    #[serde(default)]
    is_draft: bool,
    published_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct UpdateProjectRequest {
    full_name: String,
    name: String,
    description: Option<String>,
    #[serde(default)]
    topics: Vec<String>,
}

fn validate_post_fields(title: &str, slug: &str, content: &str) -> Result<(), AppError> {
    validation::validate_string_length(title, 3, 200, "title")?;
    validation::validate_string_length(slug, 3, 200, "slug")?;
    validation::validate_slug(slug)?;
    validation::validate_string_length(content, 10, MAX_CONTENT_LEN, "content")?;
    Ok(())
}

/// POST /api/admin/posts
///
/// Creates the post upstream, then prepends it to the cached collection so
/// it is visible before the next full refresh. Drafts never reach the read
/// path, so only published posts are prepended.
pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreatePostRequest>,
) -> Result<Json<Value>, AppError> {
    auth::require_local(&headers)?;

    let slug = body
        .slug
        .unwrap_or_else(|| validation::slugify(&body.title));
    validate_post_fields(&body.title, &slug, &body.content)?;

    let published_at = if body.is_draft {
        None
    } else {
        Some(body.published_at.unwrap_or_else(Utc::now))
    };

    let created = state
        .blog
        .create_post(&NewPost {
            title: body.title,
            slug,
            content: body.content,
            published_at,
        })
        .await?;

    if created.published_at.is_some() {
        state.posts_cache.prepend(created.clone()).await;
    }

    info!(id = created.id, slug = %created.slug, "Created post");
    Ok(Json(json!({ "success": true, "post": created })))
}

/// PUT /api/admin/posts/{id}
///
/// An edit can touch any field, including the slug the cache is scanned by,
/// so the cached collection is dropped and the next read repopulates it from
/// the source of truth.
pub async fn update_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<UpdatePostRequest>,
) -> Result<Json<Value>, AppError> {
    auth::require_local(&headers)?;
    validate_post_fields(&body.title, &body.slug, &body.content)?;

    let published_at = if body.is_draft {
        None
    } else {
        Some(body.published_at.unwrap_or_else(Utc::now))
    };

    let updated = state
        .blog
        .update_post(
            id,
            &PostUpdate {
                title: body.title,
                slug: body.slug,
                content: body.content,
                published_at,
                edited_at: Utc::now(),
            },
        )
        .await?;

    state.posts_cache.invalidate().await;

    info!(id = updated.id, slug = %updated.slug, "Updated post");
    Ok(Json(json!({ "success": true, "post": updated })))
}

/// PATCH /api/admin/projects
///
/// Pushes the edit to GitHub, then invalidates the repository cache so the
/// next listing refetches the authoritative state.
pub async fn update_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<UpdateProjectRequest>,
) -> Result<Json<Value>, AppError> {
    auth::require_local(&headers)?;

    if body.full_name.is_empty() {
        return Err(AppError::BadRequest("full_name is required".into()));
    }
    validation::validate_string_length(&body.name, 1, 100, "name")?;

    let updated = state
        .github
        .update_repo(
            &body.full_name,
            &RepoUpdate {
                name: body.name,
                description: body.description,
                topics: body.topics,
            },
        )
        .await?;

    state.repos_cache.invalidate().await;

    info!(full_name = %updated.full_name, "Updated project");
    Ok(Json(json!(updated)))
}
