//! Bookable slot generation within business hours

use chrono::NaiveTime;

use super::time::{from_minute_of_day, minute_of_day};

/// Generate the ordered start times between `work_start` and `work_end`
/// every `step_minutes`. A slot starting exactly at closing time has zero
/// usable duration, so `work_end` itself is never included.
///
/// Empty when `work_start >= work_end` or the step is zero.
pub fn make_slots(work_start: NaiveTime, work_end: NaiveTime, step_minutes: u32) -> Vec<NaiveTime> {
    if step_minutes == 0 {
        return Vec::new();
    }

    let end = minute_of_day(work_end);
    let mut slots = Vec::new();
    let mut m = minute_of_day(work_start);
    while m < end {
        // from_minute_of_day only fails past 24:00, unreachable with m < end
        if let Some(t) = from_minute_of_day(m) {
            slots.push(t);
        }
        m += step_minutes;
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::time::{format_hhmm, parse_hhmm};

    fn t(s: &str) -> NaiveTime {
        parse_hhmm(s).unwrap()
    }

    #[test]
    fn test_standard_business_day() {
        let slots = make_slots(t("09:00"), t("18:00"), 30);
        assert_eq!(slots.len(), 18);
        assert_eq!(format_hhmm(slots[0]), "09:00");
        assert_eq!(format_hhmm(slots[1]), "09:30");
        assert_eq!(format_hhmm(slots[17]), "17:30");
        // Closing time itself is never a bookable slot
        assert!(!slots.contains(&t("18:00")));
    }

    #[test]
    fn test_step_divisibility() {
        let start = t("08:00");
        let slots = make_slots(start, t("12:00"), 45);
        for slot in &slots {
            let offset = minute_of_day(*slot) - minute_of_day(start);
            assert_eq!(offset % 45, 0);
        }
        // 08:00, 08:45, 09:30, 10:15, 11:00, 11:45
        assert_eq!(slots.len(), 6);
    }

    #[test]
    fn test_empty_when_closed() {
        assert!(make_slots(t("18:00"), t("09:00"), 30).is_empty());
        assert!(make_slots(t("09:00"), t("09:00"), 30).is_empty());
    }

    #[test]
    fn test_zero_step() {
        assert!(make_slots(t("09:00"), t("18:00"), 0).is_empty());
    }

    #[test]
    fn test_pure_and_restartable() {
        let a = make_slots(t("09:00"), t("18:00"), 30);
        let b = make_slots(t("09:00"), t("18:00"), 30);
        assert_eq!(a, b);
    }
}
