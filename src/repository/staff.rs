//! Staff repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::staff::{CreateStaff, Staff, UpdateStaff},
};

#[derive(Clone)]
pub struct StaffRepository {
    pool: Pool<Postgres>,
}

impl StaffRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all staff members ordered by name
    pub async fn list(&self) -> AppResult<Vec<Staff>> {
        let rows = sqlx::query_as::<_, Staff>("SELECT * FROM staff ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a staff member by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Staff> {
        sqlx::query_as::<_, Staff>("SELECT * FROM staff WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Staff member {} not found", id)))
    }

    /// Create a staff member
    pub async fn create(&self, data: &CreateStaff) -> AppResult<Staff> {
        let row = sqlx::query_as::<_, Staff>(
            "INSERT INTO staff (name, job_title) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.job_title)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a staff member, keeping any field the request omits
    pub async fn update(&self, id: Uuid, data: &UpdateStaff) -> AppResult<Staff> {
        sqlx::query_as::<_, Staff>(
            r#"
            UPDATE staff SET
                name = COALESCE($2, name),
                job_title = COALESCE($3, job_title)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.job_title)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Staff member {} not found", id)))
    }

    /// Delete a staff member (appointments and services keep working,
    /// their staff reference is nulled by the FK)
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM staff WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Staff member {} not found", id)));
        }
        Ok(())
    }
}
