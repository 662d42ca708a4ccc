//! Settings endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::settings::Settings};

/// Get the current business settings
#[utoipa::path(
    get,
    path = "/settings",
    tag = "settings",
    responses(
        (status = 200, description = "Current settings", body = Settings)
    )
)]
pub async fn get_settings(State(state): State<crate::AppState>) -> AppResult<Json<Settings>> {
    let settings = state.services.settings.get().await?;
    Ok(Json(settings))
}

/// Replace the business settings
#[utoipa::path(
    put,
    path = "/settings",
    tag = "settings",
    request_body = Settings,
    responses(
        (status = 200, description = "Settings updated", body = Settings),
        (status = 400, description = "Invalid settings", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_settings(
    State(state): State<crate::AppState>,
    Json(settings): Json<Settings>,
) -> AppResult<Json<Settings>> {
    let saved = state.services.settings.put(settings).await?;
    Ok(Json(saved))
}
