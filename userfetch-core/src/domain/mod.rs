//! Core domain entities
//!
//! Pure data structures with validation logic - no I/O or external dependencies.

mod locator;
pub mod result;
mod user;

pub use locator::{Locator, DEFAULT_USER_LOCATOR};
pub use result::{Error, ErrorKind, OperationResult, TransportFailure};
pub use user::UserRecord;
