//! Settings repository: one JSONB document, normalized at read time

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::settings::{Settings, SettingsDocument},
};

#[derive(Clone)]
pub struct SettingsRepository {
    pool: Pool<Postgres>,
}

fn normalize_raw(raw: serde_json::Value) -> AppResult<Settings> {
    let document: SettingsDocument = serde_json::from_value(raw)
        .map_err(|e| AppError::DataIntegrity(format!("Malformed settings document: {}", e)))?;
    Ok(document.normalize())
}

impl SettingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Load the settings document. Legacy holiday/special-date arrays are
    /// merged into canonical markers here, so nothing downstream ever sees
    /// the dual shape.
    pub async fn get(&self) -> AppResult<Settings> {
        let raw: serde_json::Value =
            sqlx::query_scalar("SELECT data FROM settings WHERE id = 1")
                .fetch_one(&self.pool)
                .await?;
        normalize_raw(raw)
    }

    /// Same as [`get`](Self::get), reading through a booking transaction
    /// so the ruling and the commit see one consistent settings state.
    pub async fn get_in(
        &self,
        tx: &mut sqlx::Transaction<'_, Postgres>,
    ) -> AppResult<Settings> {
        let raw: serde_json::Value =
            sqlx::query_scalar("SELECT data FROM settings WHERE id = 1")
                .fetch_one(&mut **tx)
                .await?;
        normalize_raw(raw)
    }

    /// Replace the settings document with a canonical one
    pub async fn put(&self, settings: &Settings) -> AppResult<Settings> {
        let data = serde_json::to_value(settings)
            .map_err(|e| AppError::Internal(format!("Settings serialization failed: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO settings (id, data) VALUES (1, $1)
            ON CONFLICT (id) DO UPDATE SET data = EXCLUDED.data
            "#,
        )
        .bind(&data)
        .execute(&self.pool)
        .await?;

        Ok(settings.clone())
    }
}
