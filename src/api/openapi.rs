//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{agenda, appointments, catalog, clients, health, settings, staff};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Agenda API",
        version = "1.0.0",
        description = "Appointment booking REST API for small businesses",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Appointments
        appointments::list_appointments,
        appointments::get_appointment,
        appointments::book_appointment,
        appointments::reschedule_appointment,
        appointments::change_status,
        appointments::finish_appointment,
        appointments::get_receipt,
        // Agenda
        agenda::get_day_agenda,
        // Clients
        clients::list_clients,
        clients::get_client,
        clients::create_client,
        clients::update_client,
        clients::delete_client,
        // Services
        catalog::list_services,
        catalog::get_service,
        catalog::create_service,
        catalog::update_service,
        catalog::delete_service,
        // Staff
        staff::list_staff,
        staff::get_staff,
        staff::create_staff,
        staff::update_staff,
        staff::delete_staff,
        // Settings
        settings::get_settings,
        settings::update_settings,
    ),
    components(
        schemas(
            // Appointments
            crate::models::appointment::Appointment,
            crate::models::appointment::AppointmentStatus,
            crate::models::appointment::BookAppointmentRequest,
            crate::models::appointment::RescheduleRequest,
            crate::models::appointment::StatusChangeRequest,
            crate::models::appointment::FinishRequest,
            crate::services::booking::BookingOutcome,
            // Agenda
            crate::services::agenda::DayAgenda,
            crate::services::agenda::SlotView,
            // Clients
            crate::models::client::Client,
            crate::models::client::CreateClient,
            crate::models::client::UpdateClient,
            // Services
            crate::models::service::ServiceItem,
            crate::models::service::CreateService,
            crate::models::service::UpdateService,
            // Staff
            crate::models::staff::Staff,
            crate::models::staff::CreateStaff,
            crate::models::staff::UpdateStaff,
            // Settings
            crate::models::settings::Settings,
            crate::models::settings::DailyClosure,
            crate::models::settings::WeekdayClosure,
            crate::models::settings::Marker,
            crate::models::settings::MarkerKind,
            crate::models::settings::ReceiptInfo,
            // Receipts
            crate::models::receipt::ReceiptDetails,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "appointments", description = "Booking and appointment lifecycle"),
        (name = "agenda", description = "Day agenda views"),
        (name = "clients", description = "Client registry"),
        (name = "services", description = "Service catalog"),
        (name = "staff", description = "Staff roster"),
        (name = "settings", description = "Business settings")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
