//! reqwest-backed HTTP transport
//!
//! Performs a single async GET per call and reads the full body. No retries
//! and no caching; the request timeout is only set when configured.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::result::{Error, Result};
use crate::domain::{Locator, TransportFailure};
use crate::ports::{HttpResponse, HttpTransport};

/// User-Agent sent with every request
pub const USER_AGENT: &str = concat!("userfetch/", env!("CARGO_PKG_VERSION"));

/// HTTP transport using an async reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    /// Create a transport with reqwest's default timeout behaviour
    pub fn new() -> anyhow::Result<Self> {
        Self::with_timeout(None)
    }

    /// Create a transport with an optional overall request timeout
    pub fn with_timeout(timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Map request errors onto transport failures
    fn map_request_error(&self, error: reqwest::Error) -> Error {
        let failure = if error.is_timeout() {
            TransportFailure::Timeout
        } else if error.is_connect() {
            TransportFailure::Connect(error.to_string())
        } else {
            TransportFailure::Request(error.to_string())
        };
        Error::Transport(failure)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    fn name(&self) -> &str {
        "reqwest"
    }

    async fn get(&self, locator: &Locator) -> Result<HttpResponse> {
        let response = self
            .client
            .get(locator.url().clone())
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status().as_u16();

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_request_error(e))?;

        debug!(locator = %locator, status, bytes = body.len(), "response received");

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
