//! Records - Typed documents stored in partitioned containers.
//!
//! A record is a serde-serializable value with a string identity and a
//! designated partition-key field used to route point reads and deletes.
//!
//! ## Example
//!
//! ```ignore
//! use docstore_rust::{generate_id, Record};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Record)]
//! #[record(container = "Orders")]
//! struct Order {
//!     #[record(id)]
//!     pub id: String,
//!     #[record(partition_key)]
//!     pub tenant_id: String,
//!     pub total: u32,
//! }
//!
//! let order = Order {
//!     id: generate_id(),
//!     tenant_id: "tenant-1".into(),
//!     total: 12,
//! };
//! ```

mod id;
mod key;

use serde::{de::DeserializeOwned, Serialize};

/// Trait for types that can be stored as records.
///
/// Every record round-trips through the store's JSON representation; the
/// store reconstructs a fresh instance from each response rather than
/// caching instances across calls.
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    /// The container name for this record type. By convention containers are
    /// named after the type itself (e.g. "Order", "UserProfile").
    const CONTAINER: &'static str;

    /// The name of the field whose value routes reads and deletes to a
    /// partition. Point reads for types where this is not "id" must supply
    /// the partition key explicitly.
    const PARTITION_KEY_FIELD: &'static str = "id";

    /// Returns the unique identifier for this record instance.
    fn id(&self) -> &str;

    /// Returns the value of the designated partition-key field.
    fn partition_key(&self) -> &str {
        self.id()
    }
}

pub use id::{generate_id, ID_LENGTH};
pub use key::RecordKey;
