//! Service catalog repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::service::{CreateService, ServiceItem, UpdateService},
};

#[derive(Clone)]
pub struct CatalogRepository {
    pool: Pool<Postgres>,
}

impl CatalogRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all services ordered by name
    pub async fn list(&self) -> AppResult<Vec<ServiceItem>> {
        let rows = sqlx::query_as::<_, ServiceItem>("SELECT * FROM services ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a service by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<ServiceItem> {
        sqlx::query_as::<_, ServiceItem>("SELECT * FROM services WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))
    }

    /// Create a service
    pub async fn create(&self, data: &CreateService) -> AppResult<ServiceItem> {
        let row = sqlx::query_as::<_, ServiceItem>(
            r#"
            INSERT INTO services (name, duration_min, price, staff_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(data.duration_min)
        .bind(data.price)
        .bind(data.staff_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a service, keeping any field the request omits
    pub async fn update(&self, id: Uuid, data: &UpdateService) -> AppResult<ServiceItem> {
        sqlx::query_as::<_, ServiceItem>(
            r#"
            UPDATE services SET
                name = COALESCE($2, name),
                duration_min = COALESCE($3, duration_min),
                price = COALESCE($4, price),
                staff_id = COALESCE($5, staff_id)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.duration_min)
        .bind(data.price)
        .bind(data.staff_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))
    }

    /// Delete a service
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Service {} not found", id)));
        }
        Ok(())
    }

    /// Count appointments referencing a service
    pub async fn count_appointments(&self, id: Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM appointments WHERE service_id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
