//! Request extension trait for extracting claims from HTTP requests.

use actix_web::HttpMessage;

use crate::models::JwtClaims;

/// Access to the claims [`AuthMiddleware`](super::AuthMiddleware) attached.
pub trait RequestExt {
    /// `None` when the request did not pass through the middleware.
    fn get_claims(&self) -> Option<JwtClaims>;
}

impl RequestExt for actix_web::HttpRequest {
    fn get_claims(&self) -> Option<JwtClaims> {
        self.extensions().get::<JwtClaims>().cloned()
    }
}
