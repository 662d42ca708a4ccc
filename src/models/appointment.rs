//! Appointment model and request types

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::scheduling::time::{hhmm, Interval};

/// Appointment lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "appointment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Open,
    Confirmed,
    Canceled,
    Done,
}

/// A booked appointment. Rows are never deleted: cancellation is a status
/// change, and canceled rows stay out of conflict checks but remain
/// available for reporting and receipts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Appointment {
    pub id: Uuid,
    pub date: NaiveDate,
    /// Start (HH:mm)
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "10:00")]
    pub start_time: NaiveTime,
    /// End (HH:mm), start + service duration
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "10:30")]
    pub end_time: NaiveTime,
    pub service_id: Uuid,
    pub client_id: Option<Uuid>,
    pub staff_id: Option<Uuid>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub payment_method: Option<String>,
    pub discount_value: Option<Decimal>,
    pub discount_reason: Option<String>,
    pub receipt_note: Option<String>,
    pub final_price: Option<Decimal>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn interval(&self) -> Interval {
        Interval::new(self.start_time, self.end_time)
    }
}

/// Book a new appointment. The end time is derived from the service
/// duration, never chosen by the caller.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookAppointmentRequest {
    pub date: NaiveDate,
    /// Start (HH:mm)
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "10:00")]
    pub start: NaiveTime,
    pub service_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub staff_id: Option<Uuid>,
    pub notes: Option<String>,
}

/// Move an existing appointment to a new date/time (optionally a new
/// service). `override_closure` is the second-call confirmation flag for
/// soft-closure hits.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RescheduleRequest {
    pub date: NaiveDate,
    /// New start (HH:mm)
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "12:30")]
    pub start: NaiveTime,
    /// Defaults to the appointment's current service
    pub service_id: Option<Uuid>,
    #[serde(default)]
    pub override_closure: bool,
}

/// Explicit status transition request
#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusChangeRequest {
    pub status: AppointmentStatus,
}

/// Complete an appointment with receipt data
#[derive(Debug, Deserialize, ToSchema)]
pub struct FinishRequest {
    pub payment_method: String,
    /// Fixed discount amount in currency units
    pub discount_value: Option<Decimal>,
    pub discount_reason: Option<String>,
    pub receipt_note: Option<String>,
}

/// Query parameters for listing appointments
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AppointmentQuery {
    /// Filter by date (YYYY-MM-DD)
    pub date: Option<NaiveDate>,
    pub status: Option<AppointmentStatus>,
}
