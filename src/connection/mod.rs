//! Connections - Shared access to one database and its containers.
//!
//! A [`Connection`] pairs a document client with a resolved database handle
//! and caches one [`Container`] handle per record type. A
//! [`ConnectionRegistry`] holds the single connection an application
//! initializes at startup; record stores resolve their storage target
//! through it (or through a connection passed in directly, which keeps
//! tests free of shared state).
//!
//! ## Example
//!
//! ```ignore
//! use docstore_rust::{Connection, ConnectionRegistry, InMemoryClient};
//!
//! static REGISTRY: ConnectionRegistry = ConnectionRegistry::new();
//!
//! let connection = Connection::from_connection_string(
//!     InMemoryClient::new(),
//!     "AccountEndpoint=https://localhost:8081;AccountKey=secret;",
//!     "appdb",
//! )?;
//! REGISTRY.initialize(connection)?;
//!
//! let connection = REGISTRY.current()?;
//! let orders = connection.records::<Order>();
//! ```

mod connection;
mod container;
mod credentials;
mod error;
mod registry;

pub use connection::{Connection, Database};
pub use container::Container;
pub use credentials::AccountCredentials;
pub use error::ConnectionError;
pub use registry::ConnectionRegistry;
