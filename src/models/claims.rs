//! JWT claims model.

use serde::{Deserialize, Serialize};

/// Claims carried by an issued token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct JwtClaims {
    pub sub: String, // user e-mail address
    pub iss: String,
    pub exp: i64, // expiration, epoch seconds
    pub iat: i64, // issued at, epoch seconds
}
