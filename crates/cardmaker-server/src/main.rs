mod config;
mod error;
mod raster_client;
mod routes;
mod state;

use std::sync::Arc;

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use chrono::Utc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use extractor_client::ExtractorClient;

use config::Config;
use raster_client::RasterClient;
use state::AppState;

fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(routes::health::health))
        // Identifier resolution (no upstream request)
        .route("/api/resolve", get(routes::profile::resolve_input))
        // Load profile into the preview slot
        .route("/api/profile", get(routes::profile::load_profile))
        // Card rendering and export
        .route("/api/card/render", post(routes::card::render))
        .route("/api/card/export", post(routes::card::export))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardmaker_server=info".into()),
        )
        .json()
        .init();

    let config = Config::from_env();
    info!(port = config.port, "Starting cardmaker-server");

    let state = AppState {
        extractor: Arc::new(ExtractorClient::with_base_url(&config.extractor_url)),
        rasterizer: Arc::new(RasterClient::new(&config.rasterizer_url)),
        profile: Arc::new(RwLock::new(None)),
        started_at: Utc::now(),
    };

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
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
    };

    let app = create_router(state).layer(cors);

    // Serve the SPA with fallback to index.html for client-side routing
    let public_path = std::env::var("PUBLIC_PATH").unwrap_or_else(|_| "dist/public".to_string());
    info!(public_path = %public_path, "Serving static files");

    let spa_fallback =
        ServeDir::new(&public_path).fallback(ServeFile::new(format!("{}/index.html", public_path)));

    let app = app.fallback_service(spa_fallback);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("Failed to bind");

    info!(port = config.port, "Listening");

    axum::serve(listener, app).await.expect("Server failed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use profile_record::ProfileRecord;
    use state::LoadedProfile;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState {
            extractor: Arc::new(ExtractorClient::with_base_url("http://localhost:9")),
            rasterizer: Arc::new(RasterClient::new("http://localhost:9")),
            profile: Arc::new(RwLock::new(None)),
            started_at: Utc::now(),
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert!(json["uptime_secs"].as_u64().is_some());
    }

    #[tokio::test]
    async fn test_resolve_profile_url() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/resolve?input=https://x.com/elonmusk")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["handle"], "elonmusk");
        assert_eq!(json["source"], "url");
    }

    #[tokio::test]
    async fn test_resolve_raw_handle() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/resolve?input=@jack")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["handle"], "jack");
        assert_eq!(json["source"], "handle");
    }

    #[tokio::test]
    async fn test_resolve_rejects_invalid_input() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/resolve?input=https://evil.com/x")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "Please paste a valid X/Twitter profile URL or username."
        );
    }

    #[tokio::test]
    async fn test_load_profile_invalid_identifier_skips_upstream() {
        let router = create_router(create_test_state());

        // Spaces never validate, so no extractor request is issued
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/profile?input=not%20a%20url")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_render_with_empty_slot_is_placeholder() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/card/render")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"toggles": {"milestone": true}}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["state"], "placeholder");
    }

    #[tokio::test]
    async fn test_render_with_loaded_slot() {
        let state = create_test_state();
        let handle = profile_handle::resolve("jack").unwrap().into_handle();
        *state.profile.write().await = Some(LoadedProfile {
            handle,
            record: ProfileRecord {
                username: Some("jack".to_string()),
                display_name: Some("Jack".to_string()),
                ..Default::default()
            },
        });
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/card/render")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["state"], "card");

        let blocks = json["blocks"].as_array().unwrap();
        assert!(blocks
            .iter()
            .any(|b| b["type"] == "username" && b["handle"] == "@jack"));
        // No banner on the record: the flat background stands in
        assert!(blocks.iter().any(|b| b["type"] == "flatBackground"));
    }
}
