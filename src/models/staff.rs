//! Staff model and request types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A staff member (professional)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Staff {
    pub id: Uuid,
    pub name: String,
    pub job_title: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create staff request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStaff {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub job_title: Option<String>,
}

/// Update staff request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStaff {
    pub name: Option<String>,
    pub job_title: Option<String>,
}
