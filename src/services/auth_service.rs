//! Authentication service: credential checks and token issuance.

use log::{debug, warn};
use thiserror::Error;

use crate::models::{JwtClaims, LoginRequest, User};
use crate::repositories::{RepositoryError, UserRepository};
use crate::services::password_hasher::HashError;
use crate::services::token_service::{TokenError, TokenService};
use crate::utils::log_sanitizer::mask_email;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("no user registered with that e-mail address")]
    UnknownUser,
    #[error("credential check failed: {0}")]
    Credential(#[from] HashError),
    #[error("token rejected: {0}")]
    Token(#[from] TokenError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Service for authentication operations.
#[derive(Clone)]
pub struct AuthService {
    repository: UserRepository,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(repository: UserRepository, tokens: TokenService) -> Self {
        Self { repository, tokens }
    }

    /// Verify credentials and issue a token whose subject is the e-mail address.
    pub async fn login(&self, req: LoginRequest) -> Result<(User, String), AuthError> {
        let user = self
            .repository
            .find_by_email(&req.email_address)
            .await?
            .ok_or_else(|| {
                warn!(
                    "Login failed for {}: unknown user",
                    mask_email(&req.email_address)
                );
                AuthError::UnknownUser
            })?;

        self.repository
            .hasher()
            .verify_blocking(&req.password, &user.password_hash)
            .await
            .inspect_err(|e| {
                warn!("Login failed for user {}: {}", user.id, e);
            })?;

        let token = self.tokens.issue(&user.email_address)?;
        debug!("Issued token for user {}", user.id);

        Ok((user, token))
    }

    /// Load the user a set of validated claims refers to.
    pub async fn current_user(&self, claims: &JwtClaims) -> Result<Option<User>, AuthError> {
        Ok(self.repository.find_by_email(&claims.sub).await?)
    }
}
