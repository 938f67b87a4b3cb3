//! User registration request model.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::{validate_alphanumeric, validate_role};

/// Request payload for user registration
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// First name
    #[validate(length(min = 1, message = "first_name is required"))]
    #[schema(example = "Ada")]
    pub first_name: String,
    /// Last name
    #[validate(length(min = 1, message = "last_name is required"))]
    #[schema(example = "Lovelace")]
    pub last_name: String,
    /// E-mail address, unique across all users
    #[validate(email(message = "email_address must be a valid email address"))]
    #[schema(example = "ada@example.com")]
    pub email_address: String,
    /// Either 'admin' or 'member'
    #[validate(custom(function = "validate_role"))]
    #[schema(example = "member")]
    pub role: String,
    /// Password (8-20 characters, letters and digits only)
    #[validate(
        length(min = 8, max = 20, message = "password must be between 8 and 20 characters"),
        custom(function = "validate_alphanumeric")
    )]
    #[schema(example = "Passw0rd1")]
    pub password: String,
}
