//! Revoked token ids.
//!
//! Production deployments keep the blocklist in Redis so every instance sees the same
//! revocations. Without `REDIS_URL` an in-process map is used instead, which is also
//! what the tests run against.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use redis::{aio::ConnectionManager, AsyncCommands};

use crate::server::error::AppError;

const KEY_PREFIX: &str = "blocklist:";

#[derive(Clone)]
enum BlocklistStore {
    Redis(ConnectionManager),
    Memory(Arc<Mutex<HashMap<String, Instant>>>),
}

/// Token revocation list keyed by JWT id. Entries expire after `ttl`.
#[derive(Clone)]
pub struct TokenBlocklist {
    store: BlocklistStore,
    ttl: Duration,
}

impl TokenBlocklist {
    pub fn redis(connection: ConnectionManager, ttl: Duration) -> Self {
        Self {
            store: BlocklistStore::Redis(connection),
            ttl,
        }
    }

    pub fn memory(ttl: Duration) -> Self {
        Self {
            store: BlocklistStore::Memory(Arc::new(Mutex::new(HashMap::new()))),
            ttl,
        }
    }

    /// Revokes `jti` for the configured ttl.
    pub async fn add(&self, jti: &str) -> Result<(), AppError> {
        match &self.store {
            BlocklistStore::Redis(connection) => {
                let mut connection = connection.clone();
                let _: () = connection
                    .set_ex(blocklist_key(jti), "", self.ttl.as_secs())
                    .await?;
            }
            BlocklistStore::Memory(entries) => {
                let now = Instant::now();
                let mut entries = entries.lock().unwrap_or_else(|e| e.into_inner());
                entries.retain(|_, deadline| *deadline > now);
                entries.insert(jti.to_string(), now + self.ttl);
            }
        }

        Ok(())
    }

    pub async fn is_blocked(&self, jti: &str) -> Result<bool, AppError> {
        match &self.store {
            BlocklistStore::Redis(connection) => {
                let mut connection = connection.clone();
                let exists: bool = connection.exists(blocklist_key(jti)).await?;
                Ok(exists)
            }
            BlocklistStore::Memory(entries) => {
                let entries = entries.lock().unwrap_or_else(|e| e.into_inner());
                Ok(entries
                    .get(jti)
                    .is_some_and(|deadline| *deadline > Instant::now()))
            }
        }
    }
}

fn blocklist_key(jti: &str) -> String {
    format!("{}{}", KEY_PREFIX, jti)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blocks_added_ids() -> Result<(), AppError> {
        let blocklist = TokenBlocklist::memory(Duration::from_secs(60));

        assert!(!blocklist.is_blocked("abc").await?);
        blocklist.add("abc").await?;

        assert!(blocklist.is_blocked("abc").await?);
        assert!(!blocklist.is_blocked("def").await?);

        Ok(())
    }

    #[tokio::test]
    async fn entries_expire_after_ttl() -> Result<(), AppError> {
        let blocklist = TokenBlocklist::memory(Duration::ZERO);

        blocklist.add("abc").await?;

        assert!(!blocklist.is_blocked("abc").await?);

        Ok(())
    }

    #[tokio::test]
    async fn insert_prunes_expired_entries() -> Result<(), AppError> {
        let blocklist = TokenBlocklist::memory(Duration::ZERO);

        blocklist.add("first").await?;
        blocklist.add("second").await?;

        let BlocklistStore::Memory(entries) = &blocklist.store else {
            panic!("Expected memory store");
        };
        assert_eq!(entries.lock().unwrap().len(), 1);

        Ok(())
    }

    #[test]
    fn prefixes_redis_keys() {
        assert_eq!(blocklist_key("abc"), "blocklist:abc");
    }
}
