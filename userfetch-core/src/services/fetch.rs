//! User fetch service - retrieve and decode a remote user record
//!
//! One private implementation does the work (validate, one GET, status check,
//! decode). Two thin entry points expose it:
//!
//! - [`UserFetcher::fetch_user`]: `async`, the caller awaits the result
//! - [`UserFetcher::fetch_user_with`]: returns immediately and invokes a
//!   completion closure exactly once from a runtime worker

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::result::{Error, Result};
use crate::domain::{Locator, TransportFailure, UserRecord, DEFAULT_USER_LOCATOR};
use crate::ports::HttpTransport;

/// Fetches [`UserRecord`]s through an [`HttpTransport`]
///
/// Holds no per-call state. Concurrent calls are independent and may
/// complete in any order.
#[derive(Clone)]
pub struct UserFetcher {
    transport: Arc<dyn HttpTransport>,
    runtime: Handle,
    default_locator: String,
}

impl UserFetcher {
    /// Create a fetcher that spawns callback-form work onto `runtime`
    pub fn new(transport: Arc<dyn HttpTransport>, runtime: Handle) -> Self {
        Self {
            transport,
            runtime,
            default_locator: DEFAULT_USER_LOCATOR.to_string(),
        }
    }

    /// Replace the locator used by the `*_default_user` methods
    pub fn with_default_locator(mut self, locator: impl Into<String>) -> Self {
        self.default_locator = locator.into();
        self
    }

    pub fn default_locator(&self) -> &str {
        &self.default_locator
    }

    pub fn transport_name(&self) -> &str {
        self.transport.name()
    }

    /// Fetch the user at `locator`, suspending until the result is ready
    pub async fn fetch_user(&self, locator: &str) -> Result<UserRecord> {
        fetch(self.transport.as_ref(), locator).await
    }

    /// Fetch the user at the default locator
    pub async fn fetch_default_user(&self) -> Result<UserRecord> {
        self.fetch_user(&self.default_locator).await
    }

    /// Fetch the user at `locator` and hand the result to `completion`
    ///
    /// Returns without waiting. Locator validation also runs on the spawned
    /// task, so `completion` is never called before this method returns.
    /// The returned handle resolves once `completion` has run.
    ///
    /// If the task never finishes (its runtime shuts down, or the transport
    /// panics) `completion` still runs once, with a `Transport` error. When the
    /// runtime is already gone at call time that happens before this returns.
    pub fn fetch_user_with<F>(&self, locator: impl Into<String>, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<UserRecord>) + Send + 'static,
    {
        let transport = Arc::clone(&self.transport);
        let locator = locator.into();
        let completion = Completion::new(completion);

        self.runtime.spawn(async move {
            let result = fetch(transport.as_ref(), &locator).await;
            completion.complete(result);
        })
    }

    /// Callback form of [`UserFetcher::fetch_default_user`]
    pub fn fetch_default_user_with<F>(&self, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<UserRecord>) + Send + 'static,
    {
        self.fetch_user_with(self.default_locator.clone(), completion)
    }
}

/// Completion handler that fires on drop if it was never called
struct Completion<F>
where
    F: FnOnce(Result<UserRecord>),
{
    callback: Option<F>,
}

impl<F> Completion<F>
where
    F: FnOnce(Result<UserRecord>),
{
    fn new(callback: F) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    fn complete(mut self, result: Result<UserRecord>) {
        if let Some(callback) = self.callback.take() {
            callback(result);
        }
    }
}

impl<F> Drop for Completion<F>
where
    F: FnOnce(Result<UserRecord>),
{
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            debug!("fetch task ended before completing");
            callback(Err(Error::Transport(TransportFailure::Request(
                "fetch task was cancelled".to_string(),
            ))));
        }
    }
}

async fn fetch(transport: &dyn HttpTransport, raw_locator: &str) -> Result<UserRecord> {
    let locator = Locator::parse(raw_locator)?;
    debug!(locator = %locator, transport = transport.name(), "fetching user");

    let outcome = get_and_decode(transport, &locator).await;
    match &outcome {
        Ok(user) => debug!(locator = %locator, user_id = user.id, "user fetched"),
        Err(e) => debug!(locator = %locator, kind = %e.kind(), error = %e, "user fetch failed"),
    }
    outcome
}

async fn get_and_decode(transport: &dyn HttpTransport, locator: &Locator) -> Result<UserRecord> {
    let response = transport.get(locator).await?;

    if !response.is_success() {
        return Err(Error::status(response.status));
    }

    UserRecord::from_json(&response.body)
}
