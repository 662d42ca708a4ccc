//! Service catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::service::{CreateService, ServiceItem, UpdateService},
};

/// List all services
#[utoipa::path(
    get,
    path = "/services",
    tag = "services",
    responses(
        (status = 200, description = "List of services", body = Vec<ServiceItem>)
    )
)]
pub async fn list_services(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<ServiceItem>>> {
    let services = state.services.catalog.list().await?;
    Ok(Json(services))
}

/// Get service details by ID
#[utoipa::path(
    get,
    path = "/services/{id}",
    tag = "services",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service details", body = ServiceItem),
        (status = 404, description = "Service not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_service(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ServiceItem>> {
    let service = state.services.catalog.get(id).await?;
    Ok(Json(service))
}

/// Create a new service
#[utoipa::path(
    post,
    path = "/services",
    tag = "services",
    request_body = CreateService,
    responses(
        (status = 201, description = "Service created", body = ServiceItem),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_service(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateService>,
) -> AppResult<(StatusCode, Json<ServiceItem>)> {
    let service = state.services.catalog.create(data).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

/// Update an existing service
#[utoipa::path(
    put,
    path = "/services/{id}",
    tag = "services",
    params(("id" = Uuid, Path, description = "Service ID")),
    request_body = UpdateService,
    responses(
        (status = 200, description = "Service updated", body = ServiceItem),
        (status = 404, description = "Service not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_service(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateService>,
) -> AppResult<Json<ServiceItem>> {
    let service = state.services.catalog.update(id, data).await?;
    Ok(Json(service))
}

/// Delete a service without appointments
#[utoipa::path(
    delete,
    path = "/services/{id}",
    tag = "services",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 400, description = "Service has appointments", body = crate::error::ErrorResponse),
        (status = 404, description = "Service not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_service(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
