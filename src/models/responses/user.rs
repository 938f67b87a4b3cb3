//! User-related response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Role, User};

/// User data returned in API responses. Carries no password material.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct UserResponse {
    /// Generated identifier
    #[schema(example = "3f1c2a9e-5b7d-4c1e-9a8f-2d6b0e4c7a11")]
    pub id: String,
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada@example.com")]
    pub email_address: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email_address: user.email_address,
            role: user.role,
            created_at: to_chrono(user.created_at),
            updated_at: to_chrono(user.updated_at),
        }
    }
}

fn to_chrono(dt: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(dt.timestamp_millis()).unwrap_or_default()
}

/// Payload returned after a successful login
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    /// Bearer token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    pub user: UserResponse,
}
