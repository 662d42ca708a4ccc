//! Staff endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::staff::{CreateStaff, Staff, UpdateStaff},
};

/// List all staff members
#[utoipa::path(
    get,
    path = "/staff",
    tag = "staff",
    responses(
        (status = 200, description = "List of staff members", body = Vec<Staff>)
    )
)]
pub async fn list_staff(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Staff>>> {
    let staff = state.services.staff.list().await?;
    Ok(Json(staff))
}

/// Get a staff member by ID
#[utoipa::path(
    get,
    path = "/staff/{id}",
    tag = "staff",
    params(("id" = Uuid, Path, description = "Staff ID")),
    responses(
        (status = 200, description = "Staff details", body = Staff),
        (status = 404, description = "Staff member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_staff(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Staff>> {
    let staff = state.services.staff.get(id).await?;
    Ok(Json(staff))
}

/// Create a new staff member
#[utoipa::path(
    post,
    path = "/staff",
    tag = "staff",
    request_body = CreateStaff,
    responses(
        (status = 201, description = "Staff member created", body = Staff),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_staff(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateStaff>,
) -> AppResult<(StatusCode, Json<Staff>)> {
    let staff = state.services.staff.create(data).await?;
    Ok((StatusCode::CREATED, Json(staff)))
}

/// Update a staff member
#[utoipa::path(
    put,
    path = "/staff/{id}",
    tag = "staff",
    params(("id" = Uuid, Path, description = "Staff ID")),
    request_body = UpdateStaff,
    responses(
        (status = 200, description = "Staff member updated", body = Staff),
        (status = 404, description = "Staff member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_staff(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateStaff>,
) -> AppResult<Json<Staff>> {
    let staff = state.services.staff.update(id, data).await?;
    Ok(Json(staff))
}

/// Delete a staff member
#[utoipa::path(
    delete,
    path = "/staff/{id}",
    tag = "staff",
    params(("id" = Uuid, Path, description = "Staff ID")),
    responses(
        (status = 204, description = "Staff member deleted"),
        (status = 404, description = "Staff member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_staff(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.staff.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
