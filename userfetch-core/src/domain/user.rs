//! User domain model

use serde::{Deserialize, Serialize};

use super::result::Result;

/// A user as returned by the remote endpoint
///
/// Wire shape: `{"id": <integer>, "name": <string>, "email": <string>}`.
/// Extra fields are ignored; a missing or mistyped field fails the whole decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl UserRecord {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Decode a response body
    pub fn from_json(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}
