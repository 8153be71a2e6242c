//! Persisted login state.

use serde_json::Value;

use super::error::StoreError;
use super::KeyValueStore;

/// Store key holding the session token.
pub const TOKEN_KEY: &str = "token";

/// Store key holding the logged-in flag.
pub const LOGGED_IN_KEY: &str = "logged_in";

/// Login state as written to the key-value store.
///
/// Overwritten on every successful authentication and read back at
/// startup. Never deleted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub token: String,
    pub is_logged_in: bool,
}

impl SessionRecord {
    /// Record for a freshly authenticated session.
    pub fn logged_in(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            is_logged_in: true,
        }
    }

    /// Write both keys as one batch.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<(), StoreError> {
        store.set_all(vec![
            (TOKEN_KEY.to_string(), Value::String(self.token.clone())),
            (LOGGED_IN_KEY.to_string(), Value::Bool(self.is_logged_in)),
        ])
    }

    /// Read the record back.
    ///
    /// Returns `None` if no token has ever been stored. A missing
    /// logged-in flag reads as `false`.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<Self>, StoreError> {
        let mut values = store.get_all(&[TOKEN_KEY, LOGGED_IN_KEY])?.into_iter();
        let (token, flag) = (values.next().flatten(), values.next().flatten());

        let token = match token {
            None => return Ok(None),
            Some(Value::String(token)) => token,
            Some(other) => {
                return Err(StoreError::Corrupt {
                    key: TOKEN_KEY.to_string(),
                    message: format!("expected string, found {other}"),
                });
            }
        };

        let is_logged_in = match flag {
            None => false,
            Some(Value::Bool(flag)) => flag,
            Some(other) => {
                return Err(StoreError::Corrupt {
                    key: LOGGED_IN_KEY.to_string(),
                    message: format!("expected bool, found {other}"),
                });
            }
        };

        Ok(Some(Self {
            token,
            is_logged_in,
        }))
    }
}
