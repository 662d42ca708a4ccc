//! Client model and request types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A registered client
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Client {
    pub id: Uuid,
    /// Tax identification (CPF/NIF)
    pub tax_id: String,
    pub name: String,
    pub age: Option<i16>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Allergies, preferences, etc.
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create client request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClient {
    #[validate(length(min = 1, message = "Tax id is required"))]
    pub tax_id: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub age: Option<i16>,
    pub phone: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub notes: Option<String>,
}

/// Update client request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateClient {
    pub tax_id: Option<String>,
    pub name: Option<String>,
    pub age: Option<i16>,
    pub phone: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub notes: Option<String>,
}
