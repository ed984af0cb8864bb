use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use super::{AccountCredentials, ConnectionError, Container};
use crate::client::DocumentClient;
use crate::record::Record;
use crate::store::RecordStore;

/// Handle to one named database on a client.
pub struct Database {
    client: Arc<dyn DocumentClient>,
    name: Arc<str>,
}

impl Database {
    fn new(client: Arc<dyn DocumentClient>, name: &str) -> Self {
        Self {
            client,
            name: Arc::from(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build a handle to a named container within this database.
    pub fn container(&self, name: &str) -> Container {
        Container::new(Arc::clone(&self.client), Arc::clone(&self.name), name)
    }
}

/// One connection to a document database: the client handle, the resolved
/// database handle, and a lazily populated cache of one container handle
/// per record type.
///
/// Opening a connection performs no I/O; the client first touches the
/// network (if it has one) on the first record operation. Connections are
/// shared behind `Arc` or borrowed; record stores never own one.
pub struct Connection {
    credentials: AccountCredentials,
    database: Database,
    containers: RwLock<HashMap<String, Container>>,
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("credentials", &self.credentials)
            .field("database", &self.database.name())
            .finish_non_exhaustive()
    }
}

impl Connection {
    /// Open a connection from explicit credentials.
    pub fn open<C: DocumentClient + 'static>(
        client: C,
        credentials: AccountCredentials,
        database_name: &str,
    ) -> Self {
        debug!(
            endpoint = credentials.endpoint(),
            database = database_name,
            "opening connection"
        );
        Self {
            credentials,
            database: Database::new(Arc::new(client), database_name),
            containers: RwLock::new(HashMap::new()),
        }
    }

    /// Open a connection from a `Key=Value;` connection string carrying
    /// `AccountEndpoint` and `AccountKey`.
    pub fn from_connection_string<C: DocumentClient + 'static>(
        client: C,
        connection_string: &str,
        database_name: &str,
    ) -> Result<Self, ConnectionError> {
        let credentials = AccountCredentials::from_connection_string(connection_string)?;
        Ok(Self::open(client, credentials, database_name))
    }

    pub fn endpoint(&self) -> &str {
        self.credentials.endpoint()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// The cached container handle for `name`, resolved on first use.
    ///
    /// Concurrent first calls may redundantly build a handle, but every
    /// caller converges on the handle that won the cache slot; resolution is
    /// a pure function of the container name, so all of them address the
    /// same logical container.
    pub fn container(&self, name: &str) -> Result<Container, ConnectionError> {
        {
            let containers = self
                .containers
                .read()
                .map_err(|_| ConnectionError::LockPoisoned("container read"))?;
            if let Some(container) = containers.get(name) {
                return Ok(container.clone());
            }
        }

        let mut containers = self
            .containers
            .write()
            .map_err(|_| ConnectionError::LockPoisoned("container write"))?;

        let container = containers.entry(name.to_string()).or_insert_with(|| {
            debug!(container = name, "resolved container handle");
            self.database.container(name)
        });

        Ok(container.clone())
    }

    /// Typed record store for `R`, backed by this connection.
    pub fn records<R: Record>(&self) -> RecordStore<'_, R> {
        RecordStore::new(self)
    }
}
