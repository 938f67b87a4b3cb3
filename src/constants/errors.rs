//! Error message constants used throughout the application.
//!
//! Credential and token failures each collapse to a single message so that
//! responses never reveal which check failed.

// Request decoding
pub const ERR_UNPARSEABLE_BODY: &str = "We cannot parse your request body.";
pub const ERR_VALIDATION_FAILED: &str = "We could not validate your request.";
pub const ERR_UNSUPPORTED_MEDIA_TYPE: &str = "Unsupported Media Type";

// Authentication
pub const ERR_INCORRECT_CREDENTIALS: &str = "Incorrect credentials.";
pub const ERR_UNAUTHORIZED: &str = "Unauthorized.";

// Users
pub const ERR_USER_EXISTS: &str = "This user already exists.";
pub const ERR_USER_NOT_FOUND: &str = "User not found.";

// Infrastructure
pub const ERR_INTERNAL: &str = "Something went wrong. Please try again later.";
pub const ERR_ROUTE_NOT_FOUND: &str = "Route Not Found";
pub const ERR_MONGODB_DOWN: &str = "MongoDB not connected";
pub const ERR_REDIS_DOWN: &str = "Redis not connected";

// Field validation
pub const ERR_PASSWORD_ALPHANUMERIC: &str = "password must contain only letters and digits";
pub const ERR_INVALID_ROLE: &str = "role must be either 'admin' or 'member'";
