//! Finishing appointments and assembling receipts

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        appointment::{Appointment, AppointmentStatus, FinishRequest},
        receipt::ReceiptDetails,
    },
    repository::Repository,
};

/// Fixed discount, floored at zero so the receipt never goes negative
fn final_price(price: Decimal, discount: Decimal) -> Decimal {
    (price - discount).max(Decimal::ZERO)
}

#[derive(Clone)]
pub struct ReceiptsService {
    repository: Repository,
}

impl ReceiptsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Close out an appointment: record payment, apply the fixed discount
    /// and mark it done. `final_price` is clamped at zero so a discount
    /// larger than the price never produces a negative receipt.
    pub async fn finish(&self, id: Uuid, request: FinishRequest) -> AppResult<Appointment> {
        let appointment = self.repository.appointments.get_by_id(id).await?;

        match appointment.status {
            AppointmentStatus::Open | AppointmentStatus::Confirmed => {}
            other => {
                return Err(AppError::BadRequest(format!(
                    "Appointment is already {:?} and cannot be finished",
                    other
                )));
            }
        }

        if request.payment_method.trim().is_empty() {
            return Err(AppError::Validation(
                "Payment method is required".to_string(),
            ));
        }

        let discount = request.discount_value.unwrap_or(Decimal::ZERO);
        if discount < Decimal::ZERO {
            return Err(AppError::Validation(
                "Discount cannot be negative".to_string(),
            ));
        }

        let service = self
            .repository
            .catalog
            .get_by_id(appointment.service_id)
            .await?;
        let final_price = final_price(service.price, discount);

        let finished = self
            .repository
            .appointments
            .finish(
                id,
                &request.payment_method,
                discount,
                request.discount_reason.as_deref(),
                request.receipt_note.as_deref(),
                final_price,
                Utc::now(),
            )
            .await?;

        tracing::info!(
            appointment_id = %id,
            payment_method = %finished.payment_method.as_deref().unwrap_or(""),
            %final_price,
            "Appointment finished"
        );

        Ok(finished)
    }

    /// Assemble the full receipt view for a finished appointment. Client
    /// and staff lookups are tolerant: deleted rows leave a hole in the
    /// receipt instead of failing it.
    pub async fn details(&self, id: Uuid) -> AppResult<ReceiptDetails> {
        let appointment = self.repository.appointments.get_by_id(id).await?;

        if appointment.status != AppointmentStatus::Done {
            return Err(AppError::BadRequest(
                "Receipt is only available for finished appointments".to_string(),
            ));
        }

        let service = self
            .repository
            .catalog
            .get_by_id(appointment.service_id)
            .await?;

        let client = match appointment.client_id {
            Some(client_id) => self.repository.clients.get_by_id(client_id).await.ok(),
            None => None,
        };
        let staff = match appointment.staff_id {
            Some(staff_id) => self.repository.staff.get_by_id(staff_id).await.ok(),
            None => None,
        };

        let settings = self.repository.settings.get().await?;
        let total = service.price;

        Ok(ReceiptDetails {
            appointment,
            client,
            service,
            staff,
            business: settings.receipt,
            total,
        })
    }
}
