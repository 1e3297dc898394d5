use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use tracing::error;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;
use crate::wallpapers::{self, WallpaperPack};

/// GET /api/wallpapers
pub async fn list_packs() -> Json<&'static [WallpaperPack]> {
    Json(wallpapers::CATALOG)
}

/// GET /api/wallpapers/{id}
pub async fn get_pack(Path(id): Path<String>) -> Result<Json<&'static WallpaperPack>, AppError> {
    wallpapers::find(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Wallpaper not found".into()))
}

#[derive(Deserialize)]
pub struct DownloadQuery {
    url: Option<String>,
    filename: Option<String>,
}

/// GET /api/download?url=…&filename=…
///
/// Streams a wallpaper image out of public object storage with an attachment
/// disposition, so browsers save it instead of rendering it. Only URLs under
/// the configured storage base are proxied.
pub async fn download(
    State(state): State<AppState>,
    Query(params): Query<DownloadQuery>,
) -> Result<Response, AppError> {
    let (raw_url, filename) = match (params.url, params.filename) {
        (Some(url), Some(filename)) => (url, filename),
        _ => {
            return Err(AppError::BadRequest(
                "Missing url or filename parameter".into(),
            ))
        }
    };

    if filename.is_empty()
        || filename
            .chars()
            .any(|c| c == '"' || c == '/' || c == '\\' || c.is_control())
    {
        return Err(AppError::BadRequest("Invalid filename".into()));
    }

    let url = Url::parse(&raw_url).map_err(|_| AppError::BadRequest("Invalid url".into()))?;
    if !raw_url.starts_with(&state.wallpaper_base_url) {
        return Err(AppError::Forbidden("Invalid download URL".into()));
    }

    let resp = state.http.get(url.clone()).send().await.map_err(|e| {
        error!(url = %url, error = %e, "Wallpaper download failed");
        AppError::Upstream("Wallpaper storage unavailable".into())
    })?;

    if !resp.status().is_success() {
        return Err(AppError::NotFound("Wallpaper not found".into()));
    }

    let mut builder = Response::builder().status(StatusCode::OK).header(
        header::CONTENT_DISPOSITION,
        format!("attachment; filename=\"{}\"", filename),
    );

    if let Some(ct) = resp.headers().get(reqwest::header::CONTENT_TYPE) {
        if let Ok(v) = ct.to_str() {
            builder = builder.header(header::CONTENT_TYPE, v);
        }
    }

    // Stream the object straight through
    builder
        .body(Body::from_stream(resp.bytes_stream()))
        .map_err(|e| AppError::Internal(e.to_string()))
}
