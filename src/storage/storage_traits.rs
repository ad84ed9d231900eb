use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::storage_constants::{SCHEMA_VERSION, SCHEMA_VERSION_KEY};
use super::storage_errors::{Result, StorageError};

/// Durable key-value store collaborator: flat get/set by key, no
/// transactions, no queries. Values are JSON documents.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: String) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

pub async fn get_json<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Result<Option<T>> {
    match store.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub async fn set_json<T: Serialize + Sync>(
    store: &dyn KvStore,
    key: &str,
    value: &T,
) -> Result<()> {
    store.set(key, serde_json::to_string(value)?).await
}

/// Stamps the layout version on first use and refuses layouts written by a
/// newer build.
pub async fn ensure_schema(store: &dyn KvStore) -> Result<()> {
    match get_json::<u32>(store, SCHEMA_VERSION_KEY).await? {
        None => set_json(store, SCHEMA_VERSION_KEY, &SCHEMA_VERSION).await,
        Some(found) if found <= SCHEMA_VERSION => Ok(()),
        Some(found) => Err(StorageError::UnsupportedSchemaVersion {
            found,
            expected: SCHEMA_VERSION,
        }),
    }
}
