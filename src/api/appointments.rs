//! Appointment endpoints: booking, reschedule, lifecycle and receipts

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        appointment::{
            Appointment, AppointmentQuery, BookAppointmentRequest, FinishRequest,
            RescheduleRequest, StatusChangeRequest,
        },
        receipt::ReceiptDetails,
    },
    services::booking::BookingOutcome,
};

/// List appointments, optionally filtered by date and status
#[utoipa::path(
    get,
    path = "/appointments",
    tag = "appointments",
    params(AppointmentQuery),
    responses(
        (status = 200, description = "List of appointments", body = Vec<Appointment>)
    )
)]
pub async fn list_appointments(
    State(state): State<crate::AppState>,
    Query(query): Query<AppointmentQuery>,
) -> AppResult<Json<Vec<Appointment>>> {
    let appointments = state.services.appointments.list(&query).await?;
    Ok(Json(appointments))
}

/// Get appointment details by ID
#[utoipa::path(
    get,
    path = "/appointments/{id}",
    tag = "appointments",
    params(("id" = Uuid, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment details", body = Appointment),
        (status = 404, description = "Appointment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_appointment(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.appointments.get(id).await?;
    Ok(Json(appointment))
}

/// Book a new appointment
#[utoipa::path(
    post,
    path = "/appointments",
    tag = "appointments",
    request_body = BookAppointmentRequest,
    responses(
        (status = 201, description = "Appointment booked", body = Appointment),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "Time conflict", body = crate::error::ErrorResponse),
        (status = 422, description = "Closed day or hours", body = crate::error::ErrorResponse)
    )
)]
pub async fn book_appointment(
    State(state): State<crate::AppState>,
    Json(request): Json<BookAppointmentRequest>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    let appointment = state.services.booking.book(request).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Reschedule an appointment. A closure-interval hit answers with a
/// needs-confirmation outcome; repeating the call with
/// `override_closure: true` commits the move.
#[utoipa::path(
    post,
    path = "/appointments/{id}/reschedule",
    tag = "appointments",
    params(("id" = Uuid, Path, description = "Appointment ID")),
    request_body = RescheduleRequest,
    responses(
        (status = 200, description = "Accepted or needs confirmation", body = BookingOutcome),
        (status = 404, description = "Appointment not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Time conflict", body = crate::error::ErrorResponse),
        (status = 422, description = "Closed day or hours", body = crate::error::ErrorResponse)
    )
)]
pub async fn reschedule_appointment(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RescheduleRequest>,
) -> AppResult<Json<BookingOutcome>> {
    let outcome = state.services.booking.reschedule(id, request).await?;
    Ok(Json(outcome))
}

/// Change appointment status (confirm, cancel, mark done)
#[utoipa::path(
    post,
    path = "/appointments/{id}/status",
    tag = "appointments",
    params(("id" = Uuid, Path, description = "Appointment ID")),
    request_body = StatusChangeRequest,
    responses(
        (status = 200, description = "Status changed", body = Appointment),
        (status = 404, description = "Appointment not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid transition", body = crate::error::ErrorResponse)
    )
)]
pub async fn change_status(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<StatusChangeRequest>,
) -> AppResult<Json<Appointment>> {
    let appointment = state
        .services
        .appointments
        .change_status(id, request.status)
        .await?;
    Ok(Json(appointment))
}

/// Finish an appointment with payment and discount data
#[utoipa::path(
    post,
    path = "/appointments/{id}/finish",
    tag = "appointments",
    params(("id" = Uuid, Path, description = "Appointment ID")),
    request_body = FinishRequest,
    responses(
        (status = 200, description = "Appointment finished", body = Appointment),
        (status = 400, description = "Already finished or canceled", body = crate::error::ErrorResponse),
        (status = 404, description = "Appointment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn finish_appointment(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FinishRequest>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.receipts.finish(id, request).await?;
    Ok(Json(appointment))
}

/// Get the receipt for a finished appointment
#[utoipa::path(
    get,
    path = "/appointments/{id}/receipt",
    tag = "appointments",
    params(("id" = Uuid, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Receipt details", body = ReceiptDetails),
        (status = 400, description = "Appointment not finished", body = crate::error::ErrorResponse),
        (status = 404, description = "Appointment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_receipt(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ReceiptDetails>> {
    let receipt = state.services.receipts.details(id).await?;
    Ok(Json(receipt))
}
