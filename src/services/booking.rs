//! Booking and reschedule orchestration
//!
//! Reads a settings + appointments snapshot, runs the scheduling ruling on
//! it, and commits the accepted result, all inside one transaction holding
//! a per-date advisory lock so two concurrent attempts for the same slot
//! serialize instead of racing.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult, RuleKind},
    models::appointment::{Appointment, BookAppointmentRequest, RescheduleRequest},
    repository::{appointments::NewAppointment, Repository},
    scheduling::{
        conflicts,
        rules::{self, Candidate, Ruling},
    },
};

/// Successful decision shapes. Hard rejections surface as errors;
/// needs-confirmation is a decision, not a fault.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BookingOutcome {
    Accepted { appointment: Appointment },
    NeedsConfirmation { reason: String },
}

#[derive(Clone)]
pub struct BookingService {
    repository: Repository,
}

impl BookingService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Book a new appointment. Every rule is hard here: unlike a
    /// reschedule, a new booking is never confirmable into a closure
    /// interval.
    pub async fn book(&self, request: BookAppointmentRequest) -> AppResult<Appointment> {
        let service_id = request
            .service_id
            .ok_or_else(|| AppError::Validation("Select a service".to_string()))?;
        let client_id = request
            .client_id
            .ok_or_else(|| AppError::Validation("Select a client".to_string()))?;

        let service = self.repository.catalog.get_by_id(service_id).await?;
        self.repository.clients.get_by_id(client_id).await?;
        if let Some(staff_id) = request.staff_id {
            self.repository.staff.get_by_id(staff_id).await?;
        }

        let candidate = Candidate {
            date: request.date,
            start: request.start,
            duration_min: duration_minutes(service.duration_min)?,
            exclude_id: None,
        };
        let interval = rules::candidate_interval(&candidate)
            .ok_or_else(outside_hours)?;

        // Settings and snapshot are read after the per-date lock, so a
        // concurrent booking for the same slot blocks here and then sees
        // this one committed
        let mut tx = self.repository.pool.begin().await?;
        self.repository
            .appointments
            .lock_date(&mut tx, request.date)
            .await?;
        let settings = self.repository.settings.get_in(&mut tx).await?;
        let snapshot = self
            .repository
            .appointments
            .list_for_date_in(&mut tx, request.date)
            .await?;

        match rules::evaluate(&candidate, &settings, &snapshot) {
            Ruling::Clear => {}
            ruling => return Err(rejection(ruling)),
        }

        let appointment = self
            .repository
            .appointments
            .insert(
                &mut tx,
                &NewAppointment {
                    date: request.date,
                    start_time: interval.start,
                    end_time: interval.end,
                    service_id,
                    client_id,
                    staff_id: request.staff_id,
                    notes: request.notes,
                },
            )
            .await?;
        tx.commit().await?;

        tracing::info!(
            appointment_id = %appointment.id,
            date = %appointment.date,
            "appointment booked"
        );
        Ok(appointment)
    }

    /// Move an existing appointment. Closure hits are soft here: without
    /// the override flag the caller gets a needs-confirmation outcome and
    /// nothing is written; the second call with `override_closure = true`
    /// goes through to the conflict check.
    pub async fn reschedule(
        &self,
        id: Uuid,
        request: RescheduleRequest,
    ) -> AppResult<BookingOutcome> {
        let existing = self.repository.appointments.get_by_id(id).await?;

        let service_id = request.service_id.unwrap_or(existing.service_id);
        let service = self.repository.catalog.get_by_id(service_id).await?;

        let candidate = Candidate {
            date: request.date,
            start: request.start,
            duration_min: duration_minutes(service.duration_min)?,
            exclude_id: Some(id),
        };
        let interval = rules::candidate_interval(&candidate)
            .ok_or_else(outside_hours)?;

        let mut tx = self.repository.pool.begin().await?;
        self.repository
            .appointments
            .lock_date(&mut tx, request.date)
            .await?;
        let settings = self.repository.settings.get_in(&mut tx).await?;
        let snapshot = self
            .repository
            .appointments
            .list_for_date_in(&mut tx, request.date)
            .await?;

        match rules::evaluate(&candidate, &settings, &snapshot) {
            Ruling::Clear => {}
            Ruling::ClosureHit if !request.override_closure => {
                // No mutation; the transaction is dropped and rolls back
                return Ok(BookingOutcome::NeedsConfirmation {
                    reason: "The new time falls in a closure interval".to_string(),
                });
            }
            Ruling::ClosureHit => {
                // Confirmed past the closure; the conflict check still applies
                if conflicts::has_conflict(&interval, Some(id), &snapshot) {
                    return Err(rejection(Ruling::Conflict));
                }
            }
            ruling => return Err(rejection(ruling)),
        }

        let appointment = self
            .repository
            .appointments
            .apply_reschedule(
                &mut tx,
                id,
                request.date,
                interval.start,
                interval.end,
                service_id,
            )
            .await?;
        tx.commit().await?;

        tracing::info!(
            appointment_id = %appointment.id,
            date = %appointment.date,
            "appointment rescheduled"
        );
        Ok(BookingOutcome::Accepted { appointment })
    }
}

fn duration_minutes(duration_min: i32) -> AppResult<u32> {
    u32::try_from(duration_min).map_err(|_| {
        AppError::DataIntegrity(format!("Invalid service duration: {}", duration_min))
    })
}

fn outside_hours() -> AppError {
    AppError::BusinessRule(
        RuleKind::OutsideWorkHours,
        "Time is outside business hours".to_string(),
    )
}

/// Map a failed ruling to its rejection error
fn rejection(ruling: Ruling) -> AppError {
    match ruling {
        Ruling::Clear => AppError::Internal("Clear ruling is not a rejection".to_string()),
        Ruling::OutsideWorkHours => outside_hours(),
        Ruling::DayClosed { holiday: true } => AppError::BusinessRule(
            RuleKind::DayClosed,
            "That day is a holiday (closed)".to_string(),
        ),
        Ruling::DayClosed { holiday: false } => {
            AppError::BusinessRule(RuleKind::DayClosed, "That day is closed".to_string())
        }
        Ruling::ClosureHit => AppError::BusinessRule(
            RuleKind::ClosureInterval,
            "The time falls in a closure interval".to_string(),
        ),
        Ruling::Conflict => {
            AppError::Conflict("Time conflict with another appointment".to_string())
        }
    }
}
