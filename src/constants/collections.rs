//! MongoDB collection and field names.

pub const COLLECTION_USERS: &str = "users";

pub const FIELD_EMAIL_ADDRESS: &str = "email_address";
