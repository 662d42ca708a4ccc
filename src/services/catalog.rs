//! Service catalog management

use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::service::{CreateService, ServiceItem, UpdateService},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<ServiceItem>> {
        self.repository.catalog.list().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<ServiceItem> {
        self.repository.catalog.get_by_id(id).await
    }

    pub async fn create(&self, data: CreateService) -> AppResult<ServiceItem> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if data.price < Decimal::ZERO {
            return Err(AppError::Validation(
                "Price cannot be negative".to_string(),
            ));
        }
        if let Some(staff_id) = data.staff_id {
            self.repository.staff.get_by_id(staff_id).await?;
        }
        let service = self.repository.catalog.create(&data).await?;
        tracing::info!(service_id = %service.id, name = %service.name, "Service created");
        Ok(service)
    }

    pub async fn update(&self, id: Uuid, data: UpdateService) -> AppResult<ServiceItem> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if matches!(data.price, Some(p) if p < Decimal::ZERO) {
            return Err(AppError::Validation(
                "Price cannot be negative".to_string(),
            ));
        }
        if let Some(staff_id) = data.staff_id {
            self.repository.staff.get_by_id(staff_id).await?;
        }
        self.repository.catalog.update(id, &data).await
    }

    /// Delete a service. Refused while appointments still reference it.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let in_use = self.repository.catalog.count_appointments(id).await?;
        if in_use > 0 {
            return Err(AppError::BadRequest(format!(
                "Service has {} appointment(s) and cannot be deleted",
                in_use
            )));
        }
        self.repository.catalog.delete(id).await
    }
}
