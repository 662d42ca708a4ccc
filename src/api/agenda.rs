//! Day agenda endpoint

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;

use crate::{error::AppResult, services::agenda::DayAgenda};

/// Get the agenda view for a date: generated slots, occupancy, closure
/// hints and calendar markers
#[utoipa::path(
    get,
    path = "/agenda/{date}",
    tag = "agenda",
    params(("date" = String, Path, description = "Date (YYYY-MM-DD)")),
    responses(
        (status = 200, description = "Day agenda", body = DayAgenda),
        (status = 400, description = "Invalid date", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_day_agenda(
    State(state): State<crate::AppState>,
    Path(date): Path<NaiveDate>,
) -> AppResult<Json<DayAgenda>> {
    let agenda = state.services.agenda.day(date).await?;
    Ok(Json(agenda))
}
