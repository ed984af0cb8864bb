use std::sync::Arc;

use serde_json::Value;

use crate::client::DocumentClient;
use crate::store::StoreError;

/// Handle to one named container within a database.
///
/// Cheap to clone; a handle is a pure function of (client, database name,
/// container name), so redundant handles for the same name address the same
/// logical container.
#[derive(Clone)]
pub struct Container {
    client: Arc<dyn DocumentClient>,
    database: Arc<str>,
    name: Arc<str>,
}

impl Container {
    pub(crate) fn new(client: Arc<dyn DocumentClient>, database: Arc<str>, name: &str) -> Self {
        Self {
            client,
            database,
            name: Arc::from(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// Insert or replace a document by id and partition key. Returns the
    /// stored document as the server reports it.
    pub fn upsert_item(
        &self,
        id: &str,
        partition_key: &str,
        document: Value,
    ) -> Result<Value, StoreError> {
        self.client
            .upsert_item(&self.database, &self.name, id, partition_key, document)
    }

    /// Point read of a document by id and partition key.
    pub fn read_item(&self, id: &str, partition_key: &str) -> Result<Value, StoreError> {
        self.client
            .read_item(&self.database, &self.name, id, partition_key)
    }

    /// Delete a document by id and partition key.
    pub fn delete_item(&self, id: &str, partition_key: &str) -> Result<(), StoreError> {
        self.client
            .delete_item(&self.database, &self.name, id, partition_key)
    }
}
