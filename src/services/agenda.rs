//! Day agenda view: generated slots annotated with availability

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        appointment::{Appointment, AppointmentStatus},
        settings::Marker,
    },
    repository::Repository,
    scheduling::{closures, slots, time::hhmm, Interval},
};

/// One bookable slot in the day view
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SlotView {
    /// Slot start (HH:mm)
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "09:30")]
    pub time: NaiveTime,
    /// No active appointment covers this slot
    pub free: bool,
    /// The slot overlaps a daily or weekday closure (confirmable on
    /// reschedule, blocking for new bookings)
    pub soft_closed: bool,
    /// Active appointment covering this slot, if any
    pub appointment_id: Option<Uuid>,
}

/// Everything the day screen needs for one date
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DayAgenda {
    pub date: NaiveDate,
    /// 0=Sunday..6=Saturday
    pub weekday: u8,
    pub hard_closed: bool,
    pub is_holiday: bool,
    /// Markers matching this date (holiday and special alike)
    pub markers: Vec<Marker>,
    pub slots: Vec<SlotView>,
    pub appointments: Vec<Appointment>,
}

#[derive(Clone)]
pub struct AgendaService {
    repository: Repository,
}

impl AgendaService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Build the day view for a date
    pub async fn day(&self, date: NaiveDate) -> AppResult<DayAgenda> {
        let settings = self.repository.settings.get().await?;
        let appointments = self.repository.appointments.list_for_date(date).await?;

        let weekday = closures::weekday_index(date);
        let is_holiday = closures::is_holiday(date, &settings);
        let hard_closed = settings.blocked_weekdays.contains(&weekday) || is_holiday;

        let markers: Vec<Marker> = settings
            .markers
            .iter()
            .filter(|m| m.matches(date))
            .cloned()
            .collect();

        let step = settings.slot_minutes;
        let slot_views = slots::make_slots(settings.work_start, settings.work_end, step)
            .into_iter()
            .map(|slot_start| {
                let slot_end = crate::scheduling::time::add_minutes(slot_start, step)
                    .unwrap_or(settings.work_end);
                let slot_interval = Interval::new(slot_start, slot_end);

                let occupied_by = appointments
                    .iter()
                    .find(|a| {
                        a.status != AppointmentStatus::Canceled && a.interval().contains(slot_start)
                    })
                    .map(|a| a.id);

                SlotView {
                    time: slot_start,
                    free: occupied_by.is_none(),
                    soft_closed: closures::hits_closure(date, &slot_interval, &settings),
                    appointment_id: occupied_by,
                }
            })
            .collect();

        Ok(DayAgenda {
            date,
            weekday,
            hard_closed,
            is_holiday,
            markers,
            slots: slot_views,
            appointments,
        })
    }
}
