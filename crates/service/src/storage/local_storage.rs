use std::sync::Arc;
use serde_json::Value;

use crate::errors::ServiceError;
use crate::storage::json_map_store::JsonMapStore;
use crate::storage::kv_store::KeyValueStore;

/// File-backed local storage.
/// Keeps a map of `key -> JSON value` persisted as one JSON document.
#[derive(Clone)]
pub struct LocalStorage {
    store: Arc<JsonMapStore<String, Value>>,
}

impl LocalStorage {
    /// Open the storage file at `path`. Creates the file if missing.
    pub async fn open<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonMapStore::<String, Value>::new(path).await?;
        Ok(Arc::new(Self { store }))
    }

    pub fn path(&self) -> &std::path::Path { self.store.path() }

    /// Keys currently present.
    pub async fn keys(&self) -> Vec<String> {
        self.store.keys().await
    }
}

#[async_trait::async_trait]
impl KeyValueStore for LocalStorage {
    async fn get(&self, key: &str) -> Option<Value> { self.store.get(&key.to_string()).await }
    async fn set(&self, key: &str, value: Value) -> Result<(), ServiceError> { self.store.insert(key.to_string(), value).await }
    async fn remove(&self, key: &str) -> Result<bool, ServiceError> { self.store.remove(&key.to_string()).await }
}
