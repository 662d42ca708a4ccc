//! Client registry

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::client::{Client, CreateClient, UpdateClient},
    repository::Repository,
};

#[derive(Clone)]
pub struct ClientsService {
    repository: Repository,
}

impl ClientsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Client>> {
        self.repository.clients.list().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Client> {
        self.repository.clients.get_by_id(id).await
    }

    pub async fn create(&self, data: CreateClient) -> AppResult<Client> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let client = self.repository.clients.create(&data).await?;
        tracing::info!(client_id = %client.id, "Client created");
        Ok(client)
    }

    pub async fn update(&self, id: Uuid, data: UpdateClient) -> AppResult<Client> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.clients.update(id, &data).await
    }

    /// Delete a client. Refused while appointments still reference them;
    /// history stays intact and the client can be removed after those are
    /// dealt with.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let in_use = self.repository.clients.count_appointments(id).await?;
        if in_use > 0 {
            return Err(AppError::BadRequest(format!(
                "Client has {} appointment(s) and cannot be deleted",
                in_use
            )));
        }
        self.repository.clients.delete(id).await
    }
}
