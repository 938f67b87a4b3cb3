//! Authentication request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for user login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Registered e-mail address
    #[validate(email(message = "email_address must be a valid email address"))]
    #[schema(example = "ada@example.com")]
    pub email_address: String,
    /// Account password
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "Passw0rd1")]
    pub password: String,
}
