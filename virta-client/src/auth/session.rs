//! Login flow: submit credentials, decode the token, persist the session.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::store::{KeyValueStore, SessionRecord};

use super::error::{AuthError, TransportError};
use super::types::{AuthToken, Credentials};

/// Maximum number of body characters kept on a decode error.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Trait for carrying a login request to the API.
///
/// This abstraction allows the session to be tested with a stub.
#[async_trait]
pub trait AuthTransport: Send + Sync {
    /// Send the credentials and return the raw success body.
    async fn submit(&self, credentials: &Credentials) -> Result<String, TransportError>;
}

/// Login state manager.
///
/// Owns the transport and shares the key-value store with the rest of the
/// application. Concurrent `authenticate` calls are not coordinated: each
/// proceeds independently and the last one to finish wins the store.
pub struct AuthSession<T, S: ?Sized> {
    transport: T,
    store: Arc<S>,
}

impl<T, S> AuthSession<T, S>
where
    T: AuthTransport,
    S: KeyValueStore + ?Sized,
{
    /// Create a new session over the given transport and store.
    pub fn new(transport: T, store: Arc<S>) -> Self {
        Self { transport, store }
    }

    /// Log in with an email and login code.
    ///
    /// On success the token and the logged-in flag are written to the store
    /// as one batch and the token is returned. On any failure the store is
    /// left untouched. Nothing is retried.
    ///
    /// The store write runs inline on the calling task.
    pub async fn authenticate(&self, email: &str, secret: &str) -> Result<AuthToken, AuthError> {
        let credentials = Credentials::new(email, secret);
        debug!(email, "submitting login request");

        let body = self
            .transport
            .submit(&credentials)
            .await
            .inspect_err(|e| warn!(email, error = %e, "login request failed"))?;

        let token = decode_token(&body)
            .inspect_err(|e| warn!(email, error = %e, "login response rejected"))?;

        SessionRecord::logged_in(token.token.as_str())
            .save(self.store.as_ref())
            .inspect_err(|e| warn!(email, error = %e, "failed to persist session"))?;

        info!(email, "logged in");
        Ok(token)
    }

    /// Read the persisted session, if any.
    pub fn current(&self) -> Result<Option<SessionRecord>, AuthError> {
        Ok(SessionRecord::load(self.store.as_ref())?)
    }

    /// The transport this session submits through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The store this session writes to.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}

/// Decode the token from a login response body.
fn decode_token(body: &str) -> Result<AuthToken, AuthError> {
    serde_json::from_str(body).map_err(|e| AuthError::Decode {
        message: e.to_string(),
        body: Some(body.chars().take(MAX_ERROR_BODY_CHARS).collect()),
    })
}
