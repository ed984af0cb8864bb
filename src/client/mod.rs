//! Document clients - The transport seam to the backing store.
//!
//! The wire protocol is an external collaborator: this crate addresses
//! documents by database, container, id, and partition key, and leaves the
//! transport to a [`DocumentClient`] implementation. The bundled
//! [`InMemoryClient`] backs tests and development; networked SDK adapters
//! implement the same trait.

mod in_memory;

use serde_json::Value;

use crate::store::StoreError;

/// Point operations against a partitioned document store.
///
/// Implementations must be thread-safe; this layer adds no locking, retry,
/// backoff, or timeout policy of its own. Transport failures surface as
/// [`StoreError::Transport`] and are passed through unmodified.
pub trait DocumentClient: Send + Sync {
    /// Insert or replace a document by id and partition key. Returns the
    /// stored document, including any server-assigned fields.
    fn upsert_item(
        &self,
        database: &str,
        container: &str,
        id: &str,
        partition_key: &str,
        document: Value,
    ) -> Result<Value, StoreError>;

    /// Point read of a document by id and partition key.
    fn read_item(
        &self,
        database: &str,
        container: &str,
        id: &str,
        partition_key: &str,
    ) -> Result<Value, StoreError>;

    /// Delete a document by id and partition key.
    fn delete_item(
        &self,
        database: &str,
        container: &str,
        id: &str,
        partition_key: &str,
    ) -> Result<(), StoreError>;
}

pub use in_memory::InMemoryClient;
