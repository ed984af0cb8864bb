use std::sync::{Arc, OnceLock};

use tracing::debug;

use super::{Connection, ConnectionError};
use crate::client::DocumentClient;

/// Initialize-once holder for the connection an application shares.
///
/// A registry accepts exactly one connection for its lifetime; initializing
/// twice fails and leaves the first connection active. `const`-constructible
/// so a process-wide registry can live in a `static`, while tests construct
/// their own isolated registries (or skip the registry entirely and pass a
/// `Connection` straight to a record store).
pub struct ConnectionRegistry {
    active: OnceLock<Arc<Connection>>,
}

impl ConnectionRegistry {
    pub const fn new() -> Self {
        Self {
            active: OnceLock::new(),
        }
    }

    /// Install the connection. Fails with
    /// [`ConnectionError::AlreadyInitialized`] if one is already active.
    pub fn initialize(&self, connection: Connection) -> Result<Arc<Connection>, ConnectionError> {
        let connection = Arc::new(connection);
        self.active
            .set(Arc::clone(&connection))
            .map_err(|_| ConnectionError::AlreadyInitialized)?;

        debug!(
            endpoint = connection.endpoint(),
            database = connection.database().name(),
            "connection registry initialized"
        );
        Ok(connection)
    }

    /// Parse a connection string, open a connection, and install it.
    ///
    /// A malformed connection string fails at parse time, before the
    /// registry slot is touched.
    pub fn initialize_from_connection_string<C: DocumentClient + 'static>(
        &self,
        client: C,
        connection_string: &str,
        database_name: &str,
    ) -> Result<Arc<Connection>, ConnectionError> {
        let connection =
            Connection::from_connection_string(client, connection_string, database_name)?;
        self.initialize(connection)
    }

    /// The active connection. Fails with
    /// [`ConnectionError::NotInitialized`] before [`initialize`](Self::initialize).
    pub fn current(&self) -> Result<Arc<Connection>, ConnectionError> {
        self.active
            .get()
            .cloned()
            .ok_or(ConnectionError::NotInitialized)
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
