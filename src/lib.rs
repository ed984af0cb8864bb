mod client;
mod connection;
mod record;
mod store;

pub use client::{DocumentClient, InMemoryClient};
pub use connection::{
    AccountCredentials, Connection, ConnectionError, ConnectionRegistry, Container, Database,
};
pub use record::{generate_id, Record, RecordKey, ID_LENGTH};
pub use store::{RecordStore, StoreError};

// Re-export the Record derive macro alongside the trait
#[cfg(feature = "derive")]
pub use docstore_rust_macros::Record;
