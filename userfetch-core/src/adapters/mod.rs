//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - reqwest async client for the HttpTransport port
//! - A local mock HTTP server for exercising the real transport in tests

pub mod http;

#[cfg(test)]
pub mod mock_server;
