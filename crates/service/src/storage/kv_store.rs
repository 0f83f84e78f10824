use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::errors::ServiceError;

/// Well-known storage keys.
pub mod keys {
    pub const SESSION: &str = "session";
    pub const USER_LOCATION: &str = "userLocation";
}

/// Trait abstraction for durable key-value storage.
/// Implementations can be file-backed, in-memory, or remote KV.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<Value>;
    async fn set(&self, key: &str, value: Value) -> Result<(), ServiceError>;
    async fn remove(&self, key: &str) -> Result<bool, ServiceError>;
}

/// Read `key` and decode it as `T`. A value that does not decode is reported
/// and treated as absent.
pub async fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key).await?;
    match serde_json::from_value(raw) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(%key, error = %e, "ignoring unreadable stored value");
            None
        }
    }
}

/// Encode `value` as JSON and write it under `key`.
pub async fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), ServiceError> {
    let raw = serde_json::to_value(value).map_err(|e| ServiceError::Storage(e.to_string()))?;
    store.set(key, raw).await
}
