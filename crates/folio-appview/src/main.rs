mod auth;
mod config;
mod error;
mod routes;
mod state;
mod validation;
mod wallpapers;

use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_appview=info".into()),
        )
        .init();

    let config = Config::from_env();
    info!(
        port = config.port,
        cache_ttl_secs = config.cache_ttl_secs,
        "Starting folio-appview"
    );

    let state = AppState::new(&config);

    // CORS
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH])
            .allow_headers([header::CONTENT_TYPE])
    };

    let app = routes::create_router(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("Failed to bind");

    info!(port = config.port, "Listening");

    axum::serve(listener, app).await.expect("Server failed");
}
