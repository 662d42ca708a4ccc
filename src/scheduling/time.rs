//! Wall-clock time arithmetic (HH:mm, minute-of-day)
//!
//! All comparisons go through `NaiveTime`, i.e. proper minute-of-day
//! ordering, never lexicographic string comparison.

use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse a `HH:mm` wall-clock time. Hours must be 0-23, minutes 0-59.
pub fn parse_hhmm(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

/// Format a time as zero-padded `HH:mm`. Inverse of [`parse_hhmm`].
pub fn format_hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Minute-of-day in `0..1440`.
pub fn minute_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// Build a time from a minute-of-day value; `None` outside `0..1440`.
pub fn from_minute_of_day(m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(m / 60, m % 60, 0)
}

/// Add minutes to a time. Returns `None` when the result would cross
/// the day boundary; callers decide what an over-midnight end means
/// (for bookings it is always "outside business hours").
pub fn add_minutes(t: NaiveTime, minutes: u32) -> Option<NaiveTime> {
    let m = minute_of_day(t).checked_add(minutes)?;
    if m >= MINUTES_PER_DAY {
        return None;
    }
    from_minute_of_day(m)
}

/// Half-open time interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Interval {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// True half-open intersection. Degenerate intervals (start >= end)
    /// are not rejected here; constructors validate elsewhere.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether an instant falls inside `[start, end)`.
    pub fn contains(&self, t: NaiveTime) -> bool {
        self.start <= t && t < self.end
    }
}

/// Serde adapter serializing `NaiveTime` as `HH:mm` (the wire and
/// settings-document format inherited from the browser app).
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hhmm(*t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hhmm(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid HH:mm time: {:?}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        parse_hhmm(s).unwrap()
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(minute_of_day(t("00:00")), 0);
        assert_eq!(minute_of_day(t("09:30")), 570);
        assert_eq!(minute_of_day(t("23:59")), 1439);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_hhmm("24:00").is_none());
        assert!(parse_hhmm("12:60").is_none());
        assert!(parse_hhmm("12").is_none());
        assert!(parse_hhmm("noon").is_none());
        assert!(parse_hhmm("12:30:00").is_none());
        assert!(parse_hhmm("").is_none());
    }

    #[test]
    fn test_format_round_trip() {
        for m in 0..MINUTES_PER_DAY {
            let time = from_minute_of_day(m).unwrap();
            assert_eq!(parse_hhmm(&format_hhmm(time)), Some(time));
            assert_eq!(minute_of_day(time), m);
        }
    }

    #[test]
    fn test_add_minutes() {
        assert_eq!(add_minutes(t("09:00"), 60), Some(t("10:00")));
        assert_eq!(add_minutes(t("09:15"), 90), Some(t("10:45")));
        assert_eq!(add_minutes(t("23:30"), 29), Some(t("23:59")));
        // Crossing midnight is an error, not a wrap
        assert_eq!(add_minutes(t("23:30"), 30), None);
        assert_eq!(add_minutes(t("23:30"), 120), None);
    }

    #[test]
    fn test_overlaps() {
        let a = Interval::new(t("10:00"), t("10:30"));
        let b = Interval::new(t("10:15"), t("10:45"));
        let c = Interval::new(t("10:30"), t("11:00"));
        assert!(a.overlaps(&b));
        // Half-open: touching endpoints do not overlap
        assert!(!a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_overlaps_symmetric() {
        let cases = [
            ("09:00", "10:00", "09:30", "11:00"),
            ("09:00", "10:00", "10:00", "11:00"),
            ("08:00", "12:00", "09:00", "09:30"),
            ("14:00", "15:00", "09:00", "10:00"),
        ];
        for (a1, a2, b1, b2) in cases {
            let a = Interval::new(t(a1), t(a2));
            let b = Interval::new(t(b1), t(b2));
            assert_eq!(a.overlaps(&b), b.overlaps(&a), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_contains() {
        let a = Interval::new(t("10:00"), t("10:30"));
        assert!(a.contains(t("10:00")));
        assert!(a.contains(t("10:29")));
        assert!(!a.contains(t("10:30")));
        assert!(!a.contains(t("09:59")));
    }
}
