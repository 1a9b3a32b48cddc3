//! Userfetch Core - fetch and decode a remote user record
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: Core value types (UserRecord, Locator) and the error taxonomy
//! - **ports**: Trait definitions for external dependencies (HttpTransport)
//! - **services**: The UserFetcher, in callback and async form
//! - **adapters**: Concrete implementations (reqwest)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tokio::runtime::Handle;

use adapters::http::ReqwestTransport;
use config::Config;

// Re-export commonly used types at crate root
pub use domain::result::{Error, ErrorKind, OperationResult, TransportFailure};
pub use domain::{Locator, UserRecord, DEFAULT_USER_LOCATOR};
pub use services::UserFetcher;

/// Main context for userfetch operations
///
/// Holds the resolved configuration and a fetcher wired to the real
/// HTTP transport.
pub struct UserFetchContext {
    pub config: Config,
    pub fetcher: UserFetcher,
}

impl UserFetchContext {
    /// Create a context from the settings in `dir`
    pub fn new(dir: &Path, runtime: Handle) -> Result<Self> {
        Self::from_config(Config::load(dir)?, runtime)
    }

    /// Create a context from an already resolved configuration
    pub fn from_config(config: Config, runtime: Handle) -> Result<Self> {
        let transport = ReqwestTransport::with_timeout(config.timeout())?;
        let fetcher = UserFetcher::new(Arc::new(transport), runtime)
            .with_default_locator(config.locator.clone());

        Ok(Self { config, fetcher })
    }
}
