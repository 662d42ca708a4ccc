//! Day closure resolution: hard-closed days and soft closure intervals

use chrono::{Datelike, NaiveDate};

use super::time::Interval;
use crate::models::settings::{MarkerKind, Settings};

/// Closure facts for one candidate interval on one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayAvailability {
    /// The whole day is unbookable (blocked weekday or holiday marker)
    pub hard_closed: bool,
    /// A holiday marker matches this date (subset of `hard_closed`)
    pub is_holiday: bool,
    /// The candidate interval overlaps a daily or weekday closure
    pub closure_hit: bool,
}

/// Weekday index with JS `Date.getDay` semantics (0=Sunday..6=Saturday),
/// which is what the settings document stores.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Whether a holiday marker closes the given date
pub fn is_holiday(date: NaiveDate, settings: &Settings) -> bool {
    settings
        .markers
        .iter()
        .filter(|m| m.kind == MarkerKind::Holiday)
        .any(|m| m.matches(date))
}

/// Whether `interval` overlaps any closure rule active on `date`
pub fn hits_closure(date: NaiveDate, interval: &Interval, settings: &Settings) -> bool {
    let weekday = weekday_index(date);

    let daily = settings
        .daily_closures
        .iter()
        .any(|c| interval.overlaps(&c.interval()));

    let by_weekday = settings
        .weekday_closures
        .iter()
        .filter(|c| c.weekday == weekday)
        .any(|c| interval.overlaps(&c.interval()));

    daily || by_weekday
}

/// Resolve all closure facts for a candidate interval on a date.
///
/// A date can be blocked by weekday and flagged holiday at the same time;
/// both facts are reported (messaging cares, the booking outcome does not).
pub fn evaluate(date: NaiveDate, interval: &Interval, settings: &Settings) -> DayAvailability {
    let weekday_blocked = settings.blocked_weekdays.contains(&weekday_index(date));
    let holiday = is_holiday(date, settings);

    DayAvailability {
        hard_closed: weekday_blocked || holiday,
        is_holiday: holiday,
        closure_hit: hits_closure(date, interval, settings),
    }
}
