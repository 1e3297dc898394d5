use std::env;

/// Application configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub blog_api_url: String,
    pub github_username: String,
    pub github_token: Option<String>,
    /// Freshness window for both collection caches, in seconds.
    /// Deployments use a single-digit value in dev and minutes in production.
    pub cache_ttl_secs: u64,
    /// Public object-storage base the download endpoint may proxy from
    pub wallpaper_base_url: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3002);

        let blog_api_url =
            env::var("BLOG_API_URL").unwrap_or_else(|_| "http://localhost:4000".to_string());

        let github_username = env::var("GITHUB_USERNAME").unwrap_or_else(|_| "octocat".to_string());

        let github_token = env::var("GITHUB_TOKEN").ok();

        let cache_ttl_secs = env::var("CACHE_TTL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(300);

        let wallpaper_base_url = env::var("WALLPAPER_BASE_URL")
            .unwrap_or_else(|_| "https://wallpapers.folio.dev".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|s| s.split(',').map(|o| o.trim().to_string()).collect())
            .unwrap_or_else(|_| {
                vec![
                    "http://localhost:3000".to_string(),
                    "http://localhost:5173".to_string(),
                ]
            });

        Self {
            port,
            blog_api_url,
            github_username,
            github_token,
            cache_ttl_secs,
            wallpaper_base_url,
            cors_origins,
        }
    }
}
