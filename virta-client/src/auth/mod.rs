//! Login against the charging API.
//!
//! Credentials go out through an [`AuthTransport`]; the returned token is
//! persisted together with a logged-in flag in a key-value store. Failures
//! are returned to the caller as [`AuthError`] and logged.

mod client;
mod error;
#[cfg(test)]
mod mock;
mod session;
mod types;

pub use client::{AuthClientConfig, HttpAuthClient};
pub use error::{AuthError, TransportError};
#[cfg(test)]
pub use mock::MockAuthTransport;
pub use session::{AuthSession, AuthTransport};
pub use types::{AuthToken, Credentials};
