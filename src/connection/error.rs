use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    AlreadyInitialized,
    NotInitialized,
    MalformedConnectionString { detail: String },
    LockPoisoned(&'static str),
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionError::AlreadyInitialized => {
                write!(f, "connection registry is already initialized")
            }
            ConnectionError::NotInitialized => {
                write!(f, "connection registry is not initialized")
            }
            ConnectionError::MalformedConnectionString { detail } => {
                write!(f, "malformed connection string: {}", detail)
            }
            ConnectionError::LockPoisoned(operation) => {
                write!(f, "connection lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for ConnectionError {}
