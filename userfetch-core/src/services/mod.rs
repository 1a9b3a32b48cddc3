//! Service layer - business logic orchestration

mod fetch;

pub use fetch::UserFetcher;
