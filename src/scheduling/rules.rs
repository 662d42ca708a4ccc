//! Ordered booking validation over a settings + appointments snapshot
//!
//! Pure: the orchestrating service reads the snapshot inside a transaction
//! and commits only when the ruling comes back clear.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use super::closures;
use super::conflicts;
use super::time::{add_minutes, Interval};
use crate::models::appointment::Appointment;
use crate::models::settings::Settings;

/// Candidate booking or reschedule target
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub duration_min: u32,
    /// Set on reschedule so the appointment does not conflict with itself
    pub exclude_id: Option<Uuid>,
}

/// First failing rule, in validation order; `Clear` means bookable.
///
/// `ClosureHit` is the one soft rule: new bookings reject on it, while
/// reschedules turn it into a confirmation round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ruling {
    Clear,
    OutsideWorkHours,
    DayClosed { holiday: bool },
    ClosureHit,
    Conflict,
}

/// Resolved candidate interval, exposed so callers can persist the derived
/// end time without recomputing it.
pub fn candidate_interval(candidate: &Candidate) -> Option<Interval> {
    let end = add_minutes(candidate.start, candidate.duration_min)?;
    Some(Interval::new(candidate.start, end))
}

/// Evaluate the candidate against business hours, closures, and existing
/// appointments for its date, stopping at the first violated rule.
pub fn evaluate(
    candidate: &Candidate,
    settings: &Settings,
    appointments_on_date: &[Appointment],
) -> Ruling {
    // An end past midnight can never fit the work day
    let interval = match candidate_interval(candidate) {
        Some(iv) => iv,
        None => return Ruling::OutsideWorkHours,
    };

    if interval.start < settings.work_start || interval.end > settings.work_end {
        return Ruling::OutsideWorkHours;
    }

    let availability = closures::evaluate(candidate.date, &interval, settings);
    if availability.hard_closed {
        return Ruling::DayClosed {
            holiday: availability.is_holiday,
        };
    }

    if availability.closure_hit {
        return Ruling::ClosureHit;
    }

    if conflicts::has_conflict(&interval, candidate.exclude_id, appointments_on_date) {
        return Ruling::Conflict;
    }

    Ruling::Clear
}
