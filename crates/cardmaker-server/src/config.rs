use std::env;

/// Application configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub extractor_url: String,
    pub rasterizer_url: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3002);

        let extractor_url =
            env::var("EXTRACTOR_URL").unwrap_or_else(|_| "http://localhost:3005".to_string());

        let rasterizer_url =
            env::var("RASTERIZER_URL").unwrap_or_else(|_| "http://localhost:3006".to_string());

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
            extractor_url,
            rasterizer_url,
            cors_origins,
        }
    }
}
