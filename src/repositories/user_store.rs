//! Storage capability used by the user repository, and its MongoDB adapter.
//!
//! The repository only needs to know whether a failed write was a duplicate-key
//! violation; everything store-specific stays behind [`UserStore`].

use async_trait::async_trait;
use log::{debug, info};
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use thiserror::Error;

use crate::constants::{COLLECTION_USERS, FIELD_EMAIL_ADDRESS};
use crate::models::User;

/// MongoDB server error code for unique index violations.
const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("store operation failed: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, StoreError::DuplicateKey(_))
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Declare the unique index on the e-mail field. Must be idempotent.
    async fn ensure_email_index(&self) -> Result<(), StoreError>;

    /// Atomically insert a user, failing with a duplicate-key error when the
    /// e-mail address is taken.
    async fn insert(&self, user: &User) -> Result<(), StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

/// [`UserStore`] over the `users` collection.
#[derive(Clone)]
pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_USERS),
        }
    }
}

/// Whether the server rejected a write because of a unique index.
fn is_duplicate_key_kind(kind: &ErrorKind) -> bool {
    match kind {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        if is_duplicate_key_kind(&err.kind) {
            StoreError::DuplicateKey(err.to_string())
        } else {
            StoreError::Backend(err.to_string())
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn ensure_email_index(&self) -> Result<(), StoreError> {
        info!("Ensuring unique index on {}.{}", COLLECTION_USERS, FIELD_EMAIL_ADDRESS);

        let index = IndexModel::builder()
            .keys(doc! { FIELD_EMAIL_ADDRESS: 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(index).await?;
        Ok(())
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        self.collection.insert_one(user).await?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        debug!("Store: finding user by email");
        Ok(self
            .collection
            .find_one(doc! { FIELD_EMAIL_ADDRESS: email })
            .await?)
    }
}
