use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use profile_handle::{resolve, ResolvedInput};

use crate::error::AppError;
use crate::state::{AppState, LoadedProfile};

#[derive(Deserialize)]
pub struct InputParams {
    input: String,
}

/// GET /api/resolve
/// Validate user input without contacting the extractor.
pub async fn resolve_input(Query(params): Query<InputParams>) -> Result<Json<Value>, AppError> {
    let resolved = resolve(&params.input).ok_or(AppError::InvalidIdentifier)?;

    let source = match &resolved {
        ResolvedInput::FromUrl(_) => "url",
        ResolvedInput::FromRawHandle(_) => "handle",
    };

    Ok(Json(json!({
        "handle": resolved.handle().as_str(),
        "source": source,
    })))
}

/// GET /api/profile
/// The "Load Profile" action: resolve the input, fetch the record from the
/// extractor, and overwrite the preview slot. An earlier in-flight load is
/// not cancelled; whichever response lands last owns the slot.
pub async fn load_profile(
    State(state): State<AppState>,
    Query(params): Query<InputParams>,
) -> Result<Json<Value>, AppError> {
    let handle = resolve(&params.input)
        .ok_or(AppError::InvalidIdentifier)?
        .into_handle();

    let record = state.extractor.extract_profile(handle.as_str()).await?;
    info!(handle = %handle, "Loaded profile");

    let response = json!({
        "handle": handle.as_str(),
        "profile": &record,
    });

    *state.profile.write().await = Some(LoadedProfile { handle, record });

    Ok(Json(response))
}
