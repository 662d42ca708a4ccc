//! Receipt view assembled for a finished appointment

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{
    appointment::Appointment, client::Client, service::ServiceItem, settings::ReceiptInfo,
    staff::Staff,
};

/// Everything a printed receipt needs, joined in one response. Client and
/// staff are optional because their rows may have been deleted since the
/// appointment was paid.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReceiptDetails {
    pub appointment: Appointment,
    pub client: Option<Client>,
    pub service: ServiceItem,
    pub staff: Option<Staff>,
    /// Business identity from settings
    pub business: ReceiptInfo,
    /// Service price before discount
    pub total: Decimal,
}
