//! Key-value storage port. Users and interview sessions are persisted through
//! `KeyValueStore`; the scoring engine never touches it.

pub mod locks;
pub mod memory;
pub mod redis_backend;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub use locks::KeyLocks;
pub use memory::InMemoryStore;
pub use redis_backend::RedisStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Corrupt value under '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Minimal string-keyed store. Carried in `AppState` as `Arc<dyn KeyValueStore>`.
///
/// A key holds either a plain value or a string set, never both.
/// `put_if_absent` and the set operations are atomic in every backend.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn put(&self, key: &str, value: String) -> Result<(), StoreError>;
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Writes only if `key` holds no value. Returns whether the write happened.
    async fn put_if_absent(&self, key: &str, value: String) -> Result<bool, StoreError>;

    async fn add_to_set(&self, key: &str, member: &str) -> Result<(), StoreError>;
    async fn remove_from_set(&self, key: &str, member: &str) -> Result<(), StoreError>;
    /// Members in no particular order. A missing set is empty.
    async fn set_members(&self, key: &str) -> Result<Vec<String>, StoreError>;
}

/// Reads and deserializes a JSON value.
pub async fn get_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(key).await? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

/// Serializes `value` as JSON and writes it under `key`.
pub async fn put_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.put(key, raw).await
}
