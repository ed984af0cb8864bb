//! RecordStore - Typed accessor for record CRUD operations.

use std::marker::PhantomData;

use tracing::trace;

use super::StoreError;
use crate::connection::{Connection, Container};
use crate::record::{Record, RecordKey};

/// Typed store for accessing records of a specific type.
///
/// Obtained from [`Connection::records`]. Holds no state of its own beyond
/// the connection reference; the container handle is resolved lazily and
/// cached per type on the connection.
pub struct RecordStore<'a, R> {
    connection: &'a Connection,
    _marker: PhantomData<R>,
}

impl<'a, R: Record> RecordStore<'a, R> {
    pub fn new(connection: &'a Connection) -> Self {
        Self {
            connection,
            _marker: PhantomData,
        }
    }

    /// The container handle for this record type, resolved through the
    /// connection's cache on first use. Idempotent.
    pub fn container(&self) -> Result<Container, StoreError> {
        Ok(self.connection.container(R::CONTAINER)?)
    }

    /// Upsert a record (insert or replace by id and partition key).
    ///
    /// Returns a fresh instance reconstructed from the store's response so
    /// server-assigned fields (e.g. revision tags) are captured.
    pub fn save(&self, record: &R) -> Result<R, StoreError> {
        let container = self.container()?;
        let document =
            serde_json::to_value(record).map_err(|e| StoreError::Serde(e.to_string()))?;

        trace!(container = R::CONTAINER, id = record.id(), "upserting record");
        let response = container.upsert_item(record.id(), record.partition_key(), document)?;

        serde_json::from_value(response).map_err(|e| StoreError::Serde(e.to_string()))
    }

    /// Point read by id and partition key.
    ///
    /// Accepts a bare id (`&str`/`String`) or an `(id, partition_key)` pair.
    /// For types partitioned by a field other than the id, a bare id fails
    /// with [`StoreError::MissingPartitionKey`] before any transport call.
    /// A supplied partition key is always used as given.
    pub fn get<K: RecordKey>(&self, key: K) -> Result<R, StoreError> {
        let id = key.id();
        let partition_key = match key.partition_key() {
            Some(pk) => pk,
            None if R::PARTITION_KEY_FIELD == "id" => id,
            None => {
                return Err(StoreError::MissingPartitionKey {
                    container: R::CONTAINER.to_string(),
                })
            }
        };

        let container = self.container()?;
        trace!(container = R::CONTAINER, id, "reading record");
        let document = container.read_item(id, partition_key)?;

        serde_json::from_value(document).map_err(|e| StoreError::Serde(e.to_string()))
    }

    /// Delete a record by its id and its own partition-key value.
    ///
    /// Deleting a record that is already absent fails with
    /// [`StoreError::NotFound`].
    pub fn delete(&self, record: &R) -> Result<(), StoreError> {
        let container = self.container()?;
        trace!(container = R::CONTAINER, id = record.id(), "deleting record");
        container.delete_item(record.id(), record.partition_key())
    }
}
