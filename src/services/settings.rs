//! Settings read/write with structural validation

use crate::{
    error::{AppError, AppResult},
    models::settings::Settings,
    repository::Repository,
};

#[derive(Clone)]
pub struct SettingsService {
    repository: Repository,
}

impl SettingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get(&self) -> AppResult<Settings> {
        self.repository.settings.get().await
    }

    /// Replace the settings document. Writes always go through the
    /// canonical shape, so a save migrates any legacy document for good.
    pub async fn put(&self, settings: Settings) -> AppResult<Settings> {
        validate(&settings)?;
        let saved = self.repository.settings.put(&settings).await?;
        tracing::info!("Settings updated");
        Ok(saved)
    }
}

fn validate(settings: &Settings) -> AppResult<()> {
    if settings.work_start >= settings.work_end {
        return Err(AppError::Validation(
            "Work start must be before work end".to_string(),
        ));
    }
    if settings.slot_minutes == 0 {
        return Err(AppError::Validation(
            "Slot step must be positive".to_string(),
        ));
    }
    if settings.blocked_weekdays.iter().any(|&d| d > 6) {
        return Err(AppError::Validation(
            "Weekdays range from 0 (Sunday) to 6 (Saturday)".to_string(),
        ));
    }
    for closure in &settings.daily_closures {
        if closure.start >= closure.end {
            return Err(AppError::Validation(
                "Closure interval start must be before its end".to_string(),
            ));
        }
    }
    for closure in &settings.weekday_closures {
        if closure.weekday > 6 {
            return Err(AppError::Validation(
                "Weekdays range from 0 (Sunday) to 6 (Saturday)".to_string(),
            ));
        }
        if closure.start >= closure.end {
            return Err(AppError::Validation(
                "Closure interval start must be before its end".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::{DailyClosure, WeekdayClosure};
    use chrono::NaiveTime;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate(&Settings::default()).is_ok());
    }

    #[test]
    fn test_rejects_inverted_work_hours() {
        let settings = Settings {
            work_start: t(18, 0),
            work_end: t(9, 0),
            ..Settings::default()
        };
        assert!(matches!(validate(&settings), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_rejects_zero_step() {
        let settings = Settings {
            slot_minutes: 0,
            ..Settings::default()
        };
        assert!(matches!(validate(&settings), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_rejects_out_of_range_weekday() {
        let settings = Settings {
            blocked_weekdays: vec![7],
            ..Settings::default()
        };
        assert!(matches!(validate(&settings), Err(AppError::Validation(_))));

        let settings = Settings {
            weekday_closures: vec![WeekdayClosure {
                weekday: 9,
                start: t(9, 0),
                end: t(11, 0),
            }],
            ..Settings::default()
        };
        assert!(matches!(validate(&settings), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_rejects_inverted_closure() {
        let settings = Settings {
            daily_closures: vec![DailyClosure {
                start: t(14, 0),
                end: t(12, 0),
            }],
            ..Settings::default()
        };
        assert!(matches!(validate(&settings), Err(AppError::Validation(_))));
    }
}
