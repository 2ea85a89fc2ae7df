use axum::body::Body;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use card_layout::{render_card, CardLayout, CardToggles};

use crate::error::AppError;
use crate::state::AppState;

/// Render/export request: the toggle snapshot plus the milestone text.
/// Missing fields take their defaults so a bare `{}` body renders the
/// default card.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardRequest {
    pub toggles: CardToggles,
    pub milestone_text: String,
}

/// POST /api/card/render
/// Deterministic preview layout for the current slot; an empty slot yields
/// the placeholder regardless of toggles.
pub async fn render(
    State(state): State<AppState>,
    Json(request): Json<CardRequest>,
) -> Json<CardLayout> {
    let slot = state.profile.read().await;
    let layout = render_card(
        slot.as_ref().map(|p| &p.record),
        &request.toggles,
        &request.milestone_text,
    );

    Json(layout)
}

/// POST /api/card/export
/// Rasterize the current card and return it as a PNG download. Nothing
/// guards a second export while one is in flight; each produces a download.
pub async fn export(
    State(state): State<AppState>,
    Json(request): Json<CardRequest>,
) -> Result<Response, AppError> {
    let (layout, filename) = {
        let slot = state.profile.read().await;
        let layout = render_card(
            slot.as_ref().map(|p| &p.record),
            &request.toggles,
            &request.milestone_text,
        );
        let handle = slot
            .as_ref()
            .map(|p| p.handle.as_str().to_string())
            .unwrap_or_else(|| "profile".to_string());
        (layout, format!("my-x-card-{}.png", handle))
    };

    let png = state
        .rasterizer
        .rasterize(&layout, request.toggles.banner)
        .await
        .map_err(|e| AppError::Rasterize(e.to_string()))?;

    info!(filename = %filename, bytes = png.len(), "Exported card");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/png")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from(png))
        .map_err(|e| AppError::Internal(e.to_string()))
}
