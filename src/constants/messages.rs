//! Success message constants used throughout the application.

pub const MSG_HEALTHY: &str = "Server started successfully!";
