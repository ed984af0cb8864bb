//! Record stores - Partition-key-aware CRUD over resolved containers.
//!
//! A `RecordStore` translates `save`/`get`/`delete` on a record type into
//! point operations against the container resolved for that type through a
//! shared [`Connection`](crate::Connection). Each operation is a single
//! round trip; there is no retry loop, pagination, or batching here.
//!
//! ## Example
//!
//! ```ignore
//! use docstore_rust::{AccountCredentials, Connection, InMemoryClient};
//!
//! let connection = Connection::open(
//!     InMemoryClient::new(),
//!     AccountCredentials::new("https://localhost:8081", "secret"),
//!     "appdb",
//! );
//!
//! let orders = connection.records::<Order>();
//! let saved = orders.save(&order)?;
//! let loaded = orders.get((saved.id.as_str(), saved.tenant_id.as_str()))?;
//! orders.delete(&loaded)?;
//! ```

mod record_store;

use std::fmt;

use crate::connection::ConnectionError;

/// Error type for record store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the given id exists under the given partition key.
    NotFound { container: String, id: String },
    /// A point read on a type partitioned by a non-id field was attempted
    /// without supplying the partition key.
    MissingPartitionKey { container: String },
    /// Serialization/deserialization error.
    Serde(String),
    /// Transport-level error, passed through from the document client.
    Transport(String),
    /// Connection-level error.
    Connection(ConnectionError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { container, id } => {
                write!(f, "record not found: {}:{}", container, id)
            }
            StoreError::MissingPartitionKey { container } => write!(
                f,
                "partition key required for point reads on container {}",
                container
            ),
            StoreError::Serde(msg) => write!(f, "record serialization error: {}", msg),
            StoreError::Transport(msg) => write!(f, "transport error: {}", msg),
            StoreError::Connection(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<ConnectionError> for StoreError {
    fn from(err: ConnectionError) -> Self {
        StoreError::Connection(err)
    }
}

pub use record_store::RecordStore;
