use std::fmt;

use super::ConnectionError;

const ENDPOINT_KEY: &str = "AccountEndpoint";
const ACCOUNT_KEY: &str = "AccountKey";

/// Account endpoint and key for a document database.
///
/// Parsed from a `Key=Value;` connection string or built directly. The key
/// is a secret; `Debug` redacts it.
#[derive(Clone, PartialEq, Eq)]
pub struct AccountCredentials {
    endpoint: String,
    key: String,
}

impl AccountCredentials {
    pub fn new(endpoint: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            key: key.into(),
        }
    }

    /// Parse a `;`-delimited `Key=Value` connection string (optionally with
    /// a trailing `;`). `AccountEndpoint` and `AccountKey` are required;
    /// unknown keys are ignored.
    ///
    /// Each segment splits at the first `=` only, since account keys are
    /// base64 and may end in `=` padding.
    pub fn from_connection_string(connection_string: &str) -> Result<Self, ConnectionError> {
        let mut endpoint = None;
        let mut key = None;

        for segment in connection_string.trim_end_matches(';').split(';') {
            let (name, value) = segment.split_once('=').ok_or_else(|| {
                ConnectionError::MalformedConnectionString {
                    detail: format!("segment `{}` is not Key=Value", segment),
                }
            })?;

            match name {
                ENDPOINT_KEY => endpoint = Some(value.to_string()),
                ACCOUNT_KEY => key = Some(value.to_string()),
                _ => {}
            }
        }

        let endpoint = endpoint.ok_or_else(|| ConnectionError::MalformedConnectionString {
            detail: format!("missing {}", ENDPOINT_KEY),
        })?;
        let key = key.ok_or_else(|| ConnectionError::MalformedConnectionString {
            detail: format!("missing {}", ACCOUNT_KEY),
        })?;

        Ok(Self { endpoint, key })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for AccountCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountCredentials")
            .field("endpoint", &self.endpoint)
            .field("key", &"<redacted>")
            .finish()
    }
}
