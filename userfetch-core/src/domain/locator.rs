//! Locator - validated address of a remote user record

use std::fmt;
use std::str::FromStr;

use url::Url;

use super::result::{Error, Result};

/// Locator used when none is configured
pub const DEFAULT_USER_LOCATOR: &str = "https://jsonplaceholder.typicode.com/users/1";

/// An absolute `http`/`https` URL with a host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator(Url);

impl Locator {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_locator(raw, "locator is empty"));
        }

        let url = Url::parse(trimmed).map_err(|e| Error::invalid_locator(raw, e.to_string()))?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::invalid_locator(
                    raw,
                    format!("unsupported scheme '{}'", other),
                ))
            }
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(Error::invalid_locator(raw, "locator has no host"));
        }

        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl FromStr for Locator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
