//! Service (procedure) model and request types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A bookable service. `duration_min` drives the end time of every
/// appointment booked for it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ServiceItem {
    pub id: Uuid,
    pub name: String,
    /// Duration in minutes (30, 60, 90, ...)
    pub duration_min: i32,
    /// Price in currency units
    pub price: Decimal,
    /// Staff member usually performing this service
    pub staff_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Create service request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateService {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration_min: i32,
    pub price: Decimal,
    pub staff_id: Option<Uuid>,
}

/// Update service request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateService {
    pub name: Option<String>,
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration_min: Option<i32>,
    pub price: Option<Decimal>,
    pub staff_id: Option<Uuid>,
}
