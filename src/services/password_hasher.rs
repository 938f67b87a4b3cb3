//! One-way password hashing backed by bcrypt.
//!
//! Every digest embeds its own random salt, so hashing the same password twice
//! yields different digests that both verify.

use thiserror::Error;

/// bcrypt only reads the first 72 bytes of its input.
pub const MAX_PASSWORD_BYTES: usize = 72;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashError {
    #[error("password exceeds the 72 byte bcrypt limit")]
    InputTooLong,
    #[error("password does not match digest")]
    InvalidCredential,
    #[error("stored digest is not a bcrypt digest")]
    MalformedDigest,
    #[error("hashing worker did not complete")]
    Cancelled,
    #[error("hashing failed: {0}")]
    Internal(String),
}

/// Hashes and verifies passwords with a fixed bcrypt cost.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password into a salted digest.
    pub fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(HashError::InputTooLong);
        }
        bcrypt::hash(plaintext, self.cost).map_err(|e| HashError::Internal(e.to_string()))
    }

    /// Check a plaintext password against a stored digest.
    pub fn verify(&self, plaintext: &str, digest: &str) -> Result<(), HashError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(HashError::InvalidCredential);
        }
        match bcrypt::verify(plaintext, digest) {
            Ok(true) => Ok(()),
            Ok(false) => Err(HashError::InvalidCredential),
            Err(_) => Err(HashError::MalformedDigest),
        }
    }

    /// [`hash`](Self::hash) on the blocking pool, keeping the executor free.
    pub async fn hash_blocking(&self, plaintext: &str) -> Result<String, HashError> {
        let hasher = *self;
        let plaintext = plaintext.to_owned();
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|_| HashError::Cancelled)?
    }

    /// [`verify`](Self::verify) on the blocking pool.
    pub async fn verify_blocking(&self, plaintext: &str, digest: &str) -> Result<(), HashError> {
        let hasher = *self;
        let plaintext = plaintext.to_owned();
        let digest = digest.to_owned();
        tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &digest))
            .await
            .map_err(|_| HashError::Cancelled)?
    }
}
