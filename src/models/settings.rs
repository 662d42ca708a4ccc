//! Business settings (work hours, closures, calendar markers, receipt info)

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::scheduling::time::{hhmm, Interval};

// ---------------------------------------------------------------------------
// Closure rules
// ---------------------------------------------------------------------------

/// A recurring closed sub-interval applying every day (e.g. lunch break).
/// Soft block: overlapping it never forbids a reschedule outright, it only
/// requires explicit confirmation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct DailyClosure {
    /// Interval start (HH:mm)
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "12:00")]
    pub start: NaiveTime,
    /// Interval end (HH:mm)
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "14:00")]
    pub end: NaiveTime,
}

impl DailyClosure {
    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }
}

/// A closed sub-interval applying on one weekday only (0=Sunday..6=Saturday)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct WeekdayClosure {
    pub weekday: u8,
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "09:00")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "11:00")]
    pub end: NaiveTime,
}

impl WeekdayClosure {
    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// Markers
// ---------------------------------------------------------------------------

/// Marker kind: `holiday` hard-closes the date, `special` only highlights it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Holiday,
    Special,
}

/// A calendar annotation on a specific date
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Marker {
    pub kind: MarkerKind,
    pub date: NaiveDate,
    /// Match by month and day only, ignoring the year
    #[serde(default)]
    pub annual: bool,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl Marker {
    /// Whether this marker applies to the given calendar date
    pub fn matches(&self, date: NaiveDate) -> bool {
        use chrono::Datelike;
        if self.annual {
            self.date.month() == date.month() && self.date.day() == date.day()
        } else {
            self.date == date
        }
    }
}

// ---------------------------------------------------------------------------
// Receipt business info
// ---------------------------------------------------------------------------

/// Business identity printed on receipts
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ReceiptInfo {
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Canonical settings document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Settings {
    /// Opening time (HH:mm)
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "09:00")]
    pub work_start: NaiveTime,
    /// Closing time (HH:mm)
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "18:00")]
    pub work_end: NaiveTime,
    /// Slot step in minutes
    pub slot_minutes: u32,
    /// Weekdays the business is closed (0=Sunday..6=Saturday)
    #[serde(default)]
    pub blocked_weekdays: Vec<u8>,
    #[serde(default)]
    pub daily_closures: Vec<DailyClosure>,
    #[serde(default)]
    pub weekday_closures: Vec<WeekdayClosure>,
    #[serde(default)]
    pub markers: Vec<Marker>,
    #[serde(default)]
    pub receipt: ReceiptInfo,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            work_end: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            slot_minutes: 30,
            blocked_weekdays: vec![0],
            daily_closures: Vec::new(),
            weekday_closures: Vec::new(),
            markers: Vec::new(),
            receipt: ReceiptInfo::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Legacy document normalization
// ---------------------------------------------------------------------------

/// Marker entry as found in legacy documents: `kind` may be missing and is
/// then inferred from which array the entry came from.
#[derive(Debug, Clone, Deserialize)]
struct LegacyMarker {
    kind: Option<MarkerKind>,
    /// Tolerates the empty/garbage strings the browser UI could persist
    /// for half-filled marker rows.
    #[serde(default, alias = "dateISO", deserialize_with = "lenient_date")]
    date: Option<NaiveDate>,
    #[serde(default)]
    annual: bool,
    #[serde(alias = "label")]
    description: Option<String>,
    color: Option<String>,
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse::<NaiveDate>().ok()))
}

impl LegacyMarker {
    fn into_marker(self, fallback_kind: MarkerKind) -> Option<Marker> {
        // Entries without a parseable date can never match a calendar day
        let date = self.date?;
        Some(Marker {
            kind: self.kind.unwrap_or(fallback_kind),
            date,
            annual: self.annual,
            description: self.description,
            color: self.color,
        })
    }
}

/// Raw persisted settings document. Older documents carry separate
/// `holidays` / `specialDates` arrays instead of unified `markers`;
/// [`SettingsDocument::normalize`] merges them once at read time so the
/// rest of the system only ever sees canonical [`Settings`].
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsDocument {
    #[serde(alias = "workStart", with = "hhmm")]
    work_start: NaiveTime,
    #[serde(alias = "workEnd", with = "hhmm")]
    work_end: NaiveTime,
    #[serde(alias = "slotMinutes")]
    slot_minutes: u32,
    #[serde(default, alias = "blockedWeekdays")]
    blocked_weekdays: Vec<u8>,
    #[serde(default, alias = "dailyClosures")]
    daily_closures: Vec<DailyClosure>,
    #[serde(default, alias = "weekdayClosures")]
    weekday_closures: Vec<WeekdayClosure>,
    #[serde(default)]
    markers: Vec<LegacyMarker>,
    #[serde(default)]
    holidays: Vec<LegacyMarker>,
    #[serde(default, alias = "specialDates")]
    special_dates: Vec<LegacyMarker>,
    #[serde(default)]
    receipt: ReceiptInfo,
}

impl SettingsDocument {
    /// Produce the canonical representation. When `markers` is non-empty it
    /// is the source of truth; otherwise the legacy arrays are promoted
    /// (holidays close the day, special dates only highlight).
    pub fn normalize(self) -> Settings {
        let markers: Vec<Marker> = if !self.markers.is_empty() {
            self.markers
                .into_iter()
                .filter_map(|m| m.into_marker(MarkerKind::Special))
                .collect()
        } else {
            self.holidays
                .into_iter()
                .filter_map(|m| m.into_marker(MarkerKind::Holiday))
                .chain(
                    self.special_dates
                        .into_iter()
                        .filter_map(|m| m.into_marker(MarkerKind::Special)),
                )
                .collect()
        };

        Settings {
            work_start: self.work_start,
            work_end: self.work_end,
            slot_minutes: self.slot_minutes,
            blocked_weekdays: self.blocked_weekdays,
            daily_closures: self.daily_closures,
            weekday_closures: self.weekday_closures,
            markers,
            receipt: self.receipt,
        }
    }
}
