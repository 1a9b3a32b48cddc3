//! HTTP transport port
//!
//! Defines the single network seam of the crate. The fetcher only ever sees
//! this trait, so tests can swap in scripted transports and count calls.

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::Locator;

/// Raw outcome of one GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP transport trait
///
/// Implementations perform exactly one network read per `get` call and report
/// the status as-is. Deciding whether a status is acceptable is left to the
/// caller; only failures to obtain a response at all are errors here.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Transport name (e.g., "reqwest")
    fn name(&self) -> &str;

    /// Issue a GET against `locator` and read the whole body
    async fn get(&self, locator: &Locator) -> Result<HttpResponse>;
}
