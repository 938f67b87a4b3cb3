//! User repository: registration and lookup on top of a [`UserStore`].
//!
//! E-mail uniqueness is enforced by the store's unique index, never by a
//! read-before-write here, so concurrent registrations of one address resolve
//! to exactly one success.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use mongodb::bson::DateTime;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{RegisterRequest, Role, User};
use crate::repositories::user_store::{StoreError, UserStore};
use crate::services::password_hasher::{HashError, PasswordHasher};
use crate::utils::log_sanitizer::mask_email;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{0} has already been registered")]
    EmailAlreadyRegistered(String),
    #[error("invalid role: {0}")]
    InvalidRole(String),
    #[error(transparent)]
    Hash(#[from] HashError),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("operation cancelled before the store answered")]
    Cancelled,
}

impl From<StoreError> for RepositoryError {
    fn from(err: StoreError) -> Self {
        RepositoryError::Storage(err.to_string())
    }
}

/// Repository for user records.
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    write_timeout: Duration,
}

impl UserRepository {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher, write_timeout: Duration) -> Self {
        Self {
            store,
            hasher,
            write_timeout,
        }
    }

    /// Ensure the unique e-mail index exists. Safe to call on every start.
    pub async fn init(&self) -> Result<(), RepositoryError> {
        self.store.ensure_email_index().await?;
        info!("User repository ready");
        Ok(())
    }

    /// Hash the password and insert a new user.
    ///
    /// Fails with [`RepositoryError::EmailAlreadyRegistered`] when the store
    /// reports a duplicate key, and with [`RepositoryError::Cancelled`] when
    /// the insert does not finish within the write timeout.
    pub async fn create(&self, request: RegisterRequest) -> Result<User, RepositoryError> {
        let role: Role = request
            .role
            .parse()
            .map_err(|_| RepositoryError::InvalidRole(request.role.clone()))?;

        let password_hash = self.hasher.hash_blocking(&request.password).await?;

        let now = DateTime::now();
        let user = User {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            first_name: request.first_name,
            last_name: request.last_name,
            email_address: request.email_address,
            role,
            password_hash,
        };

        let inserted = tokio::time::timeout(self.write_timeout, self.store.insert(&user))
            .await
            .map_err(|_| {
                warn!(
                    "Insert for {} exceeded {:?}",
                    mask_email(&user.email_address),
                    self.write_timeout
                );
                RepositoryError::Cancelled
            })?;

        match inserted {
            Ok(()) => {
                info!("Registered user {}", user.id);
                Ok(user)
            }
            Err(err) if err.is_duplicate_key() => {
                debug!(
                    "Duplicate registration for {}",
                    mask_email(&user.email_address)
                );
                Err(RepositoryError::EmailAlreadyRegistered(user.email_address))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.store.find_by_email(email).await?)
    }

    pub fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::user_store::memory::MemoryUserStore;
    use futures::future::join_all;

    fn request(email: &str, first_name: &str) -> RegisterRequest {
        RegisterRequest {
            first_name: first_name.to_string(),
            last_name: "Lovelace".to_string(),
            email_address: email.to_string(),
            role: "member".to_string(),
            password: "Passw0rd1".to_string(),
        }
    }

    fn repository(store: Arc<MemoryUserStore>) -> UserRepository {
        UserRepository::new(store, PasswordHasher::new(4), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn create_stamps_id_timestamps_and_digest() {
        let store = Arc::new(MemoryUserStore::new());
        let repo = repository(store.clone());

        let user = repo
            .create(request("ada@example.com", "Ada"))
            .await
            .expect("created");

        assert!(Uuid::parse_str(&user.id).is_ok());
        assert_eq!(user.created_at, user.updated_at);
        assert_eq!(user.role, Role::Member);
        assert_ne!(user.password_hash, "Passw0rd1");
        assert!(repo.hasher().verify("Passw0rd1", &user.password_hash).is_ok());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn second_registration_of_same_email_conflicts() {
        let store = Arc::new(MemoryUserStore::new());
        let repo = repository(store.clone());

        let original = repo
            .create(request("ada@example.com", "Ada"))
            .await
            .expect("created");
        let err = repo
            .create(request("ada@example.com", "Augusta"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RepositoryError::EmailAlreadyRegistered("ada@example.com".to_string())
        );
        let stored = repo
            .find_by_email("ada@example.com")
            .await
            .expect("lookup")
            .expect("present");
        assert_eq!(stored.id, original.id);
        assert_eq!(stored.first_name, "Ada");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_registrations_yield_exactly_one_winner() {
        const ATTEMPTS: usize = 8;
        let store = Arc::new(MemoryUserStore::new());
        let repo = repository(store.clone());

        let handles = (0..ATTEMPTS).map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.create(request("race@example.com", &format!("Racer{}", i)))
                    .await
            })
        });
        let results: Vec<_> = join_all(handles)
            .await
            .into_iter()
            .map(|joined| joined.expect("task completed"))
            .collect();

        let successes = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(RepositoryError::EmailAlreadyRegistered(_))))
            .count();
        assert_eq!(successes, 1);
        assert_eq!(conflicts, ATTEMPTS - 1);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn other_store_failures_surface_as_storage_errors() {
        let store = Arc::new(MemoryUserStore::failing(StoreError::Backend(
            "connection reset".to_string(),
        )));
        let repo = repository(store);

        let err = repo
            .create(request("ada@example.com", "Ada"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Storage(_)));
    }

    #[tokio::test]
    async fn slow_insert_is_cancelled_without_leaving_a_record() {
        let store = Arc::new(MemoryUserStore::with_insert_delay(Duration::from_millis(500)));
        let repo = UserRepository::new(
            store.clone(),
            PasswordHasher::new(4),
            Duration::from_millis(20),
        );

        let err = repo
            .create(request("ada@example.com", "Ada"))
            .await
            .unwrap_err();

        assert_eq!(err, RepositoryError::Cancelled);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn overlong_password_never_reaches_the_store() {
        let store = Arc::new(MemoryUserStore::new());
        let repo = repository(store.clone());
        let mut req = request("ada@example.com", "Ada");
        req.password = "a".repeat(100);

        let err = repo.create(req).await.unwrap_err();

        assert_eq!(err, RepositoryError::Hash(HashError::InputTooLong));
        assert_eq!(store.len().await, 0);
    }
}
