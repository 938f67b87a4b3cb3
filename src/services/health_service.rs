//! Liveness probe for the document store and the cache.

use log::error;
use mongodb::bson::doc;
use mongodb::Database;
use redis::aio::ConnectionManager;

use crate::constants::{ERR_MONGODB_DOWN, ERR_REDIS_DOWN};

#[derive(Clone)]
pub struct HealthService {
    db: Database,
    redis: ConnectionManager,
}

impl HealthService {
    pub fn new(db: Database, redis: ConnectionManager) -> Self {
        Self { db, redis }
    }

    /// Ping MongoDB then Redis. The error is the user-facing reason.
    pub async fn check(&self) -> Result<(), &'static str> {
        if let Err(e) = self.db.run_command(doc! { "ping": 1 }).await {
            error!("MongoDB ping failed: {}", e);
            return Err(ERR_MONGODB_DOWN);
        }

        let mut redis = self.redis.clone();
        if let Err(e) = redis::cmd("PING").query_async::<String>(&mut redis).await {
            error!("Redis ping failed: {}", e);
            return Err(ERR_REDIS_DOWN);
        }

        Ok(())
    }
}
