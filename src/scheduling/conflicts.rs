//! Conflict detection against existing appointments

use uuid::Uuid;

use super::time::Interval;
use crate::models::appointment::{Appointment, AppointmentStatus};

/// Whether a candidate interval collides with any active appointment.
///
/// `appointments` must already be the list for the candidate's date.
/// Canceled appointments never conflict; `exclude_id` lets a reschedule
/// ignore the appointment being moved. There is deliberately no per-staff
/// partitioning: the calendar models a single resource, so two staff
/// members can never be booked at the same time.
pub fn has_conflict(
    interval: &Interval,
    exclude_id: Option<Uuid>,
    appointments: &[Appointment],
) -> bool {
    appointments
        .iter()
        .filter(|a| a.status != AppointmentStatus::Canceled)
        .filter(|a| Some(a.id) != exclude_id)
        .any(|a| interval.overlaps(&a.interval()))
}
