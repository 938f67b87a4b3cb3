//! Services organized by domain concern.

pub mod auth_service;
pub mod health_service;
pub mod password_hasher;
pub mod token_service;

pub use auth_service::{AuthError, AuthService};
pub use health_service::HealthService;
pub use password_hasher::{HashError, PasswordHasher};
pub use token_service::{TokenError, TokenService};
