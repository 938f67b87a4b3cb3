//! Repository layer for database operations.
//!
//! Repositories hold the persistence rules (the e-mail uniqueness contract);
//! stores hold the driver-specific code.

pub mod user_repository;
pub mod user_store;

pub use user_repository::{RepositoryError, UserRepository};
pub use user_store::{MongoUserStore, StoreError, UserStore};
