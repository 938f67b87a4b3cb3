//! Health, documentation and fallback handlers.

use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::constants::{ERR_ROUTE_NOT_FOUND, MSG_HEALTHY};
use crate::errors::ApiError;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;
use crate::services::HealthService;

/// Check that MongoDB and Redis are reachable
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Both backends answered", body = HealthResponse),
        (status = 503, description = "A backend did not answer", body = crate::models::ErrorResponse)
    )
)]
pub async fn health_check(health: web::Data<HealthService>) -> Result<HttpResponse, ApiError> {
    health
        .check()
        .await
        .map_err(|reason| ApiError::ServiceUnavailable(reason.to_string()))?;

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: MSG_HEALTHY.to_string(),
    }))
}

pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound(ERR_ROUTE_NOT_FOUND.to_string()))
}
