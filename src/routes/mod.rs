use actix_web::error::JsonPayloadError;
use actix_web::web;

use crate::constants::{ERR_UNPARSEABLE_BODY, ERR_UNSUPPORTED_MEDIA_TYPE};
use crate::errors::ApiError;
use crate::handlers;
use crate::middleware::AuthMiddleware;
use crate::services::TokenService;

pub fn configure_routes(cfg: &mut web::ServiceConfig, tokens: &TokenService) {
    cfg.app_data(json_config())
        .route("/", web::get().to(handlers::health_check))
        .route("/api-docs/openapi.json", web::get().to(handlers::openapi_json))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth").route("/login", web::post().to(handlers::login)),
                )
                .service(
                    web::scope("/users")
                        .route("", web::post().to(handlers::register))
                        .route("/", web::post().to(handlers::register))
                        .service(
                            web::resource("/me")
                                .wrap(AuthMiddleware::new(tokens.clone()))
                                .route(web::get().to(handlers::get_current_user)),
                        ),
                ),
        )
        .default_service(web::to(handlers::not_found));
}

/// JSON extractor config: non-JSON bodies are 415, undecodable ones 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let api_error = match err {
            JsonPayloadError::ContentType => {
                ApiError::UnsupportedMediaType(ERR_UNSUPPORTED_MEDIA_TYPE.to_string())
            }
            _ => ApiError::BadRequest(ERR_UNPARSEABLE_BODY.to_string()),
        };
        api_error.into()
    })
}
