// Credentials - username/password pairs and the JSON document they are read from
//
// Document shape:
//
//     { "user_credentials": [ { "username": "...", "password": "..." } ] }

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Immutable username/password pair.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Keep passwords out of logs and panic messages
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct CredentialsDocument {
    user_credentials: Vec<Credentials>,
}

/// Parses a credentials document.
///
/// Fails if the `user_credentials` key is missing or lists no records.
pub fn parse(json: &str) -> Result<Vec<Credentials>> {
    let document: CredentialsDocument = serde_json::from_str(json)
        .map_err(|e| Error::Credentials(format!("malformed document: {}", e)))?;

    if document.user_credentials.is_empty() {
        return Err(Error::Credentials(
            "user_credentials lists no records".to_string(),
        ));
    }

    Ok(document.user_credentials)
}

/// Reads and parses the credentials document at `path`.
pub async fn load(path: impl AsRef<Path>) -> Result<Vec<Credentials>> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::from(e).context(format!("reading {}", path.display())))?;

    let credentials = parse(&json)?;
    tracing::debug!(
        path = %path.display(),
        count = credentials.len(),
        "Loaded credentials"
    );
    Ok(credentials)
}
