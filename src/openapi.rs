use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::models::{
    AuthResponse, ErrorResponse, HealthResponse, LoginRequest, RegisterRequest, Role,
    UserResponse,
};

/// OpenAPI documentation for the registration and authentication API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mock Premier League API",
        version = "0.1.0",
        description = "User registration and token authentication for the mock Premier League service."
    ),
    tags(
        (name = "Health", description = "Backend liveness"),
        (name = "Users", description = "Registration and current user"),
        (name = "Authentication", description = "Credential exchange")
    ),
    paths(
        crate::handlers::health_check,
        crate::handlers::register,
        crate::handlers::get_current_user,
        crate::handlers::login
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            Role,
            UserResponse,
            AuthResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security configuration for Bearer token authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token obtained from /api/v1/auth/login"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_mounted_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in ["/", "/api/v1/users", "/api/v1/users/me", "/api/v1/auth/login"] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {}",
                expected
            );
        }
    }
}
