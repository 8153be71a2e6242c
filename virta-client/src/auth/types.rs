//! Login request and response payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Email and login code for one login attempt.
///
/// Transient: built per attempt and never persisted. The secret goes on
/// the wire under the service's `code` field.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    #[serde(rename = "code")]
    pub secret: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Token returned by a successful login.
///
/// Extra fields in the response body are ignored.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthToken(<{} chars>)", self.token.len())
    }
}
