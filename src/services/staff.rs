//! Staff roster

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::staff::{CreateStaff, Staff, UpdateStaff},
    repository::Repository,
};

#[derive(Clone)]
pub struct StaffService {
    repository: Repository,
}

impl StaffService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Staff>> {
        self.repository.staff.list().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Staff> {
        self.repository.staff.get_by_id(id).await
    }

    pub async fn create(&self, data: CreateStaff) -> AppResult<Staff> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let staff = self.repository.staff.create(&data).await?;
        tracing::info!(staff_id = %staff.id, "Staff member created");
        Ok(staff)
    }

    pub async fn update(&self, id: Uuid, data: UpdateStaff) -> AppResult<Staff> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.staff.update(id, &data).await
    }

    /// Delete a staff member. References from services and appointments
    /// are nulled by the schema rather than blocking the delete.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.staff.delete(id).await
    }
}
