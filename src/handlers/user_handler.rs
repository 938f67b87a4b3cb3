//! User registration and profile handlers.

use actix_web::{web, HttpRequest, HttpResponse};
use log::{info, warn};
use validator::Validate;

use crate::constants::{ERR_UNAUTHORIZED, ERR_USER_NOT_FOUND};
use crate::errors::ApiError;
use crate::middleware::RequestExt;
use crate::models::{ApiResponse, RegisterRequest, UserResponse};
use crate::repositories::{RepositoryError, UserRepository};
use crate::services::AuthService;
use crate::utils::log_sanitizer::mask_email;
use crate::validators::validation_errors_to_api_error;

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = UserResponse),
        (status = 409, description = "E-mail address already registered", body = crate::models::ErrorResponse),
        (status = 415, description = "Body is not JSON", body = crate::models::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::models::ErrorResponse)
    )
)]
pub async fn register(
    repository: web::Data<UserRepository>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let email = mask_email(&body.email_address);
    let user = repository
        .create(body.into_inner())
        .await
        .inspect_err(|e| {
            if let RepositoryError::EmailAlreadyRegistered(_) = e {
                warn!("Registration rejected: {} already registered", email);
            }
        })?;
    info!("Registration succeeded for {}", email);

    let user_response: UserResponse = user.into();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(user_response)))
}

/// Get the user the bearer token was issued to
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = "Users",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Missing, invalid or expired token", body = crate::models::ErrorResponse),
        (status = 404, description = "User no longer exists", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_current_user(
    req: HttpRequest,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    let claims = req
        .get_claims()
        .ok_or_else(|| ApiError::Unauthorized(ERR_UNAUTHORIZED.to_string()))?;

    let user = auth_service
        .current_user(&claims)
        .await?
        .ok_or_else(|| ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()))?;

    let user_response: UserResponse = user.into();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(user_response)))
}
