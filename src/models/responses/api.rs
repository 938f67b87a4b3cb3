//! Response envelope models.

use actix_web::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope: `{ "code": 200, "data": ... }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            data,
        }
    }
}

/// Error envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body
    #[schema(example = 409)]
    pub code: u16,
    /// User-facing error message
    #[schema(example = "This user already exists.")]
    pub message: String,
    /// Per-field validation messages, null otherwise
    pub data: Option<Vec<String>>,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    #[schema(example = "OK")]
    pub status: String,
    /// Status message
    #[schema(example = "Server started successfully!")]
    pub message: String,
}
