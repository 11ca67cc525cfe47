use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::kv::KeyValueStore;

/// Load a JSON value from a slot. Returns `None` if the slot is empty.
pub async fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key).await? {
        Some(contents) => Ok(Some(serde_json::from_str(&contents)?)),
        None => Ok(None),
    }
}

/// Serialize a value and write it to a slot, replacing what was there.
pub async fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_string(value)?;
    store.set(key, body).await
}
