//! Appointments repository for database operations

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::appointment::{Appointment, AppointmentQuery, AppointmentStatus},
};

#[derive(Clone)]
pub struct AppointmentsRepository {
    pool: Pool<Postgres>,
}

/// Fields written when a new appointment is committed
pub struct NewAppointment {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub service_id: Uuid,
    pub client_id: Uuid,
    pub staff_id: Option<Uuid>,
    pub notes: Option<String>,
}

impl AppointmentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List appointments, optionally filtered by date and status
    pub async fn list(&self, query: &AppointmentQuery) -> AppResult<Vec<Appointment>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.date.is_some() {
            conditions.push(format!("date = ${}", idx));
            idx += 1;
        }
        if query.status.is_some() {
            conditions.push(format!("status = ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT * FROM appointments {} ORDER BY date, start_time",
            where_clause
        );

        let mut builder = sqlx::query_as::<_, Appointment>(&sql);
        if let Some(date) = query.date {
            builder = builder.bind(date);
        }
        if let Some(status) = query.status {
            builder = builder.bind(status);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get an appointment by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))
    }

    /// All appointments on a date (any status)
    pub async fn list_for_date(&self, date: NaiveDate) -> AppResult<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments WHERE date = $1 ORDER BY start_time",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Serialize booking transactions per date. Row locks cannot do this:
    /// `FOR UPDATE` only locks rows that exist, so two inserts into an
    /// empty date would never see each other. The advisory lock is held
    /// until the transaction commits or rolls back.
    pub async fn lock_date(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        date: NaiveDate,
    ) -> AppResult<()> {
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1::text))")
            .bind(date)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    /// Snapshot of a date's appointments inside a booking transaction.
    /// Call [`lock_date`](Self::lock_date) first so the snapshot cannot
    /// race a concurrent booking for the same date.
    pub async fn list_for_date_in(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        date: NaiveDate,
    ) -> AppResult<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments WHERE date = $1 ORDER BY start_time",
        )
        .bind(date)
        .fetch_all(&mut **tx)
        .await?;
        Ok(rows)
    }

    /// Insert a new appointment within the booking transaction
    pub async fn insert(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        new: &NewAppointment,
    ) -> AppResult<Appointment> {
        let row = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments
                (date, start_time, end_time, service_id, client_id, staff_id, status, notes)
            VALUES ($1, $2, $3, $4, $5, $6, 'open', $7)
            RETURNING *
            "#,
        )
        .bind(new.date)
        .bind(new.start_time)
        .bind(new.end_time)
        .bind(new.service_id)
        .bind(new.client_id)
        .bind(new.staff_id)
        .bind(&new.notes)
        .fetch_one(&mut **tx)
        .await?;
        Ok(row)
    }

    /// Apply a reschedule patch within the booking transaction. The status
    /// is always reset to open, even from confirmed or canceled.
    pub async fn apply_reschedule(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        service_id: Uuid,
    ) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>(
            r#"
            UPDATE appointments
            SET date = $2, start_time = $3, end_time = $4, service_id = $5, status = 'open'
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(date)
        .bind(start_time)
        .bind(end_time)
        .bind(service_id)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))
    }

    /// Set the lifecycle status
    pub async fn set_status(&self, id: Uuid, status: AppointmentStatus) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>(
            "UPDATE appointments SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))
    }

    /// Mark done and record the receipt fields
    #[allow(clippy::too_many_arguments)]
    pub async fn finish(
        &self,
        id: Uuid,
        payment_method: &str,
        discount_value: Decimal,
        discount_reason: Option<&str>,
        receipt_note: Option<&str>,
        final_price: Decimal,
        paid_at: DateTime<Utc>,
    ) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>(
            r#"
            UPDATE appointments
            SET status = 'done',
                payment_method = $2,
                discount_value = $3,
                discount_reason = $4,
                receipt_note = $5,
                final_price = $6,
                paid_at = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payment_method)
        .bind(discount_value)
        .bind(discount_reason)
        .bind(receipt_note)
        .bind(final_price)
        .bind(paid_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))
    }
}
