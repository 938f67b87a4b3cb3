use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::constants::{ROLE_ADMIN, ROLE_MEMBER};

/// Roles a user can register with.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str(ROLE_ADMIN),
            Role::Member => f.write_str(ROLE_MEMBER),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_MEMBER => Ok(Role::Member),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// User document stored in MongoDB.
///
/// `password_hash` is persisted but never leaves the service: outward
/// representations go through [`crate::models::UserResponse`].
#[derive(Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub role: Role,
    pub password_hash: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email_address", &self.email_address)
            .field("role", &self.role)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_only_known_names() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("member".parse::<Role>(), Ok(Role::Member));
        assert_eq!(
            "superadmin".parse::<Role>(),
            Err(UnknownRole("superadmin".to_string()))
        );
    }

    #[test]
    fn debug_output_redacts_password_hash() {
        let now = DateTime::now();
        let user = User {
            id: "id-1".to_string(),
            created_at: now,
            updated_at: now,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email_address: "ada@example.com".to_string(),
            role: Role::Member,
            password_hash: "$2b$04$secretdigest".to_string(),
        };

        let printed = format!("{:?}", user);
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("secretdigest"));
    }
}
