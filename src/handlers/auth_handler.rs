//! Authentication handlers.

use actix_web::{web, HttpResponse};
use log::info;
use validator::Validate;

use crate::errors::ApiError;
use crate::models::{ApiResponse, AuthResponse, LoginRequest};
use crate::services::AuthService;
use crate::utils::log_sanitizer::mask_email;
use crate::validators::validation_errors_to_api_error;

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Incorrect credentials", body = crate::models::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::models::ErrorResponse)
    )
)]
pub async fn login(
    auth_service: web::Data<AuthService>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let email = mask_email(&body.email_address);
    let (user, token) = auth_service.login(body.into_inner()).await?;
    info!("User {} logged in", email);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(AuthResponse {
        token,
        user: user.into(),
    })))
}
