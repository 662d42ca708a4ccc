//! Appointment listing and lifecycle transitions

use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult, RuleKind},
    models::appointment::{Appointment, AppointmentQuery, AppointmentStatus},
    repository::Repository,
};

/// Whether the appointment's end lies in the past (local wall-clock)
fn past_end(appointment: &Appointment, now: NaiveDateTime) -> bool {
    appointment.date < now.date()
        || (appointment.date == now.date() && appointment.end_time <= now.time())
}

/// UI-driven status machine. `canceled` can only come back through a
/// reschedule (which resets to open elsewhere); `done` is terminal.
fn transition_allowed(from: AppointmentStatus, to: AppointmentStatus, past: bool) -> bool {
    use AppointmentStatus::*;
    match (from, to) {
        (Open, Confirmed) => !past,
        (Open, Canceled) | (Confirmed, Canceled) => true,
        // Completion only makes sense once the slot has elapsed
        (Open, Done) | (Confirmed, Done) => past,
        _ => false,
    }
}

#[derive(Clone)]
pub struct AppointmentsService {
    repository: Repository,
}

impl AppointmentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &AppointmentQuery) -> AppResult<Vec<Appointment>> {
        self.repository.appointments.list(query).await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Appointment> {
        self.repository.appointments.get_by_id(id).await
    }

    /// Apply a status transition, enforcing the lifecycle rules
    pub async fn change_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> AppResult<Appointment> {
        let appointment = self.repository.appointments.get_by_id(id).await?;
        let past = past_end(&appointment, Local::now().naive_local());

        if !transition_allowed(appointment.status, status, past) {
            return Err(AppError::BusinessRule(
                RuleKind::InvalidTransition,
                format!(
                    "Cannot change appointment status from {:?} to {:?}",
                    appointment.status, status
                ),
            ));
        }

        self.repository.appointments.set_status(id, status).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AppointmentStatus::*;

    #[test]
    fn test_open_transitions() {
        assert!(transition_allowed(Open, Confirmed, false));
        assert!(transition_allowed(Open, Canceled, false));
        assert!(!transition_allowed(Open, Done, false));
        // Once the slot has elapsed, confirm is gone and done appears
        assert!(!transition_allowed(Open, Confirmed, true));
        assert!(transition_allowed(Open, Done, true));
        assert!(transition_allowed(Open, Canceled, true));
    }

    #[test]
    fn test_confirmed_transitions() {
        assert!(transition_allowed(Confirmed, Canceled, false));
        assert!(!transition_allowed(Confirmed, Open, false));
        assert!(transition_allowed(Confirmed, Done, true));
        assert!(!transition_allowed(Confirmed, Done, false));
    }

    #[test]
    fn test_terminal_states() {
        for to in [Open, Confirmed, Canceled, Done] {
            assert!(!transition_allowed(Done, to, true));
            // Canceled revives only via reschedule, never via status change
            assert!(!transition_allowed(Canceled, to, true));
        }
    }

    #[test]
    fn test_no_self_transition() {
        for s in [Open, Confirmed, Canceled, Done] {
            assert!(!transition_allowed(s, s, false));
        }
    }

    #[test]
    fn test_past_end() {
        use chrono::{NaiveDate, NaiveTime, Utc};
        let appointment = Appointment {
            id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            service_id: Uuid::new_v4(),
            client_id: None,
            staff_id: None,
            status: Open,
            notes: None,
            payment_method: None,
            discount_value: None,
            discount_reason: None,
            receipt_note: None,
            final_price: None,
            paid_at: None,
            created_at: Utc::now(),
        };

        let same_day_before = NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap();
        let same_day_at_end = NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        let next_day = NaiveDate::from_ymd_opt(2025, 6, 11)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();

        assert!(!past_end(&appointment, same_day_before));
        assert!(past_end(&appointment, same_day_at_end));
        assert!(past_end(&appointment, next_day));
    }
}
