use axum::extract::{Path, State};
use axum::Json;
use blog_api::Post;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Serve the post collection from cache, refilling from the blog service on
/// a miss.
///
/// A failed upstream fetch leaves the cache untouched so the next request
/// retries, and propagates as a 502.
async fn load_posts(state: &AppState) -> Result<Vec<Post>, AppError> {
    if let Some(posts) = state.posts_cache.get().await {
        return Ok(posts);
    }

    let mut posts = state.blog.all_posts().await?;
    posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    state.posts_cache.set(posts.clone()).await;
    debug!(count = posts.len(), "Refilled post cache");

    Ok(posts)
}

/// GET /api/posts
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, AppError> {
    Ok(Json(load_posts(&state).await?))
}

/// GET /api/posts/{slug}
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Post>, AppError> {
    let post = match state.posts_cache.find(|p| p.slug == slug).await {
        Some(post) => post,
        None => {
            // A cold cache looks the same as a missing post; refill before
            // deciding it is a 404
            let posts = load_posts(&state).await?;
            posts
                .into_iter()
                .find(|p| p.slug == slug)
                .ok_or_else(|| AppError::NotFound("Post not found".into()))?
        }
    };

    // View counting is best-effort and must not delay the response
    let blog = state.blog.clone();
    let post_id = post.id;
    tokio::spawn(async move {
        blog.increment_view(post_id).await;
    });

    Ok(Json(post))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::create_router;
    use crate::routes::test_util::{sample_post, test_state};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_list_posts_served_from_primed_cache() {
        // The blog client points at a dead port; only the cache can answer
        let state = test_state();
        state
            .posts_cache
            .set(vec![sample_post(1, "first"), sample_post(2, "second")])
            .await;
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/posts")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let posts: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0]["slug"], "first");
    }

    #[tokio::test]
    async fn test_list_posts_upstream_down_is_502() {
        let state = test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/posts")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_get_post_by_slug_from_cache() {
        let state = test_state();
        state
            .posts_cache
            .set(vec![sample_post(1, "first"), sample_post(2, "second")])
            .await;
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/posts/second")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["id"], 2);
    }
}
