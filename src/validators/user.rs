//! User-related custom validators.

use validator::ValidationError;

use crate::constants::{ERR_INVALID_ROLE, ERR_PASSWORD_ALPHANUMERIC};
use crate::models::Role;

/// Validates that the role is exactly 'admin' or 'member'.
pub fn validate_role(role: &str) -> Result<(), ValidationError> {
    role.parse::<Role>().map(|_| ()).map_err(|_| {
        let mut error = ValidationError::new("invalid_role");
        error.message = Some(ERR_INVALID_ROLE.into());
        error
    })
}

/// Validates that the value contains only ASCII letters and digits.
pub fn validate_alphanumeric(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Ok(());
    }
    let mut error = ValidationError::new("alphanumeric");
    error.message = Some(ERR_PASSWORD_ALPHANUMERIC.into());
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphanumeric_rejects_whitespace_and_unicode() {
        assert!(validate_alphanumeric("abc123XYZ").is_ok());
        assert!(validate_alphanumeric("abc 123").is_err());
        assert!(validate_alphanumeric("pässw0rd").is_err());
    }
}
