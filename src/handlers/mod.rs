//! HTTP request handlers organized by domain.

pub mod auth_handler;
pub mod health_handler;
pub mod user_handler;

pub use auth_handler::*;
pub use health_handler::*;
pub use user_handler::*;
