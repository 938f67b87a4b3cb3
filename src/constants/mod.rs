//! Application constants module.
//!
//! This module centralizes the constant strings used throughout the application:
//! user-facing error messages, success messages, role names and collection names.

pub mod collections;
pub mod errors;
pub mod messages;
pub mod roles;

pub use collections::*;
pub use errors::*;
pub use messages::*;
pub use roles::*;
