//! Issuing and validating HS256-signed identity tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::debug;
use serde_json::Value;
use thiserror::Error;

use crate::models::JwtClaims;

/// Why a token was not accepted.
///
/// Signature and structure are checked before expiry, so a tampered token is
/// always `InvalidToken` even when its expiry has also passed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is invalid")]
    InvalidToken,
    #[error("no claims in token")]
    NoClaims,
    #[error("token has expired")]
    Expired,
    #[error("failed to sign token: {0}")]
    Signing(String),
    #[error("token lifetime of {0} hours is out of range")]
    LifetimeOutOfRange(i64),
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    lifetime_hours: i64,
}

impl TokenService {
    pub fn new(secret: &str, issuer: &str, lifetime_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.to_string(),
            lifetime_hours,
        }
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Sign a token asserting `subject` until now plus the configured lifetime.
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let exp = Duration::try_hours(self.lifetime_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or(TokenError::LifetimeOutOfRange(self.lifetime_hours))?;

        let claims = JwtClaims {
            sub: subject.to_string(),
            iss: self.issuer.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    pub fn validate(&self, token: &str) -> Result<JwtClaims, TokenError> {
        self.validate_at(token, Utc::now().timestamp())
    }

    /// Validate `token` as if the current time were `now` (epoch seconds).
    pub fn validate_at(&self, token: &str, now: i64) -> Result<JwtClaims, TokenError> {
        // Expiry is checked by hand below so it can never mask a bad signature.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let payload = decode::<Value>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                debug!("token rejected during decode: {:?}", e.kind());
                TokenError::InvalidToken
            })?
            .claims;

        let claims: JwtClaims =
            serde_json::from_value(payload).map_err(|_| TokenError::NoClaims)?;

        if claims.iss != self.issuer {
            debug!("token rejected: issuer {} is not ours", claims.iss);
            return Err(TokenError::InvalidToken);
        }

        if claims.exp <= now {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
