use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::Mutex;

use folio_core::keys;
use folio_core::DocumentRecord;

use crate::error::{HydrationError, StorageError};
use crate::kv::KeyValueStore;
use crate::state;

/// Append-only collection of saved documents, kept as one JSON array in a
/// single key-value slot.
///
/// Appends are read-modify-write of the whole array. They are serialized
/// through an async mutex, so concurrent saves through the same store
/// never drop each other's records. Separate stores sharing one slot get
/// no such guarantee.
pub struct DocumentStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
    write_lock: Mutex<()>,
}

impl DocumentStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(kv, keys::DOCUMENTS)
    }

    pub fn with_key(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append one record to the persisted collection. Returns the size of
    /// the collection after the append.
    ///
    /// A missing slot counts as an empty collection. Existing entries are
    /// carried over as raw JSON, so records of templates this build does
    /// not know are preserved.
    pub async fn append(&self, record: &DocumentRecord) -> Result<usize, StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut collection: Vec<Value> = state::load_json(self.kv.as_ref(), &self.key)
            .await?
            .unwrap_or_default();
        collection.push(serde_json::to_value(record)?);
        state::save_json(self.kv.as_ref(), &self.key, &collection).await?;

        tracing::info!(
            id = %record.id,
            doc_type = %record.doc_type,
            count = collection.len(),
            "document appended"
        );
        Ok(collection.len())
    }

    /// Every saved record, in save order.
    pub async fn load_all(&self) -> Result<Vec<DocumentRecord>, StorageError> {
        Ok(state::load_json(self.kv.as_ref(), &self.key)
            .await?
            .unwrap_or_default())
    }

    /// Parse a serialized record (as handed over when reopening a saved
    /// document) into a plain field mapping.
    pub fn hydrate(&self, serialized: &str) -> Result<Map<String, Value>, HydrationError> {
        hydrate(serialized)
    }
}

/// Parse a serialized record into its top-level field mapping.
pub fn hydrate(serialized: &str) -> Result<Map<String, Value>, HydrationError> {
    match serde_json::from_str::<Value>(serialized)? {
        Value::Object(map) => Ok(map),
        _ => Err(HydrationError::NotAnObject),
    }
}
