//! InMemoryClient - HashMap-backed document client for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;

use super::DocumentClient;
use crate::store::StoreError;

/// Full address of a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DocumentKey {
    database: String,
    container: String,
    partition_key: String,
    id: String,
}

impl DocumentKey {
    fn new(database: &str, container: &str, partition_key: &str, id: &str) -> Self {
        Self {
            database: database.to_string(),
            container: container.to_string(),
            partition_key: partition_key.to_string(),
            id: id.to_string(),
        }
    }
}

/// Internal stored representation of a document.
struct StoredDocument {
    document: Value,
    revision: u64,
}

/// In-memory document client backed by a HashMap.
///
/// Documents are addressed by (database, container, partition key, id), so
/// reads and deletes with the wrong partition key miss, mirroring partition
/// routing. Each upsert stamps a monotonically increasing `_etag` into the
/// stored and returned document. Clone-friendly via Arc.
#[derive(Clone)]
pub struct InMemoryClient {
    storage: Arc<RwLock<HashMap<DocumentKey, StoredDocument>>>,
}

impl Default for InMemoryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryClient {
    /// Create a new empty client.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl DocumentClient for InMemoryClient {
    fn upsert_item(
        &self,
        database: &str,
        container: &str,
        id: &str,
        partition_key: &str,
        document: Value,
    ) -> Result<Value, StoreError> {
        let mut document = match document {
            Value::Object(map) => map,
            _ => {
                return Err(StoreError::Serde(
                    "document must serialize to a JSON object".to_string(),
                ))
            }
        };

        let key = DocumentKey::new(database, container, partition_key, id);
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::Transport("lock poisoned".to_string()))?;

        let revision = storage.get(&key).map(|s| s.revision + 1).unwrap_or(1);
        document.insert("_etag".to_string(), Value::String(revision.to_string()));
        let document = Value::Object(document);

        storage.insert(
            key,
            StoredDocument {
                document: document.clone(),
                revision,
            },
        );

        Ok(document)
    }

    fn read_item(
        &self,
        database: &str,
        container: &str,
        id: &str,
        partition_key: &str,
    ) -> Result<Value, StoreError> {
        let key = DocumentKey::new(database, container, partition_key, id);
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::Transport("lock poisoned".to_string()))?;

        match storage.get(&key) {
            Some(stored) => Ok(stored.document.clone()),
            None => Err(StoreError::NotFound {
                container: container.to_string(),
                id: id.to_string(),
            }),
        }
    }

    fn delete_item(
        &self,
        database: &str,
        container: &str,
        id: &str,
        partition_key: &str,
    ) -> Result<(), StoreError> {
        let key = DocumentKey::new(database, container, partition_key, id);
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::Transport("lock poisoned".to_string()))?;

        match storage.remove(&key) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                container: container.to_string(),
                id: id.to_string(),
            }),
        }
    }
}
