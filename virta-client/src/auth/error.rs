//! Authentication error types.

use crate::store::StoreError;

/// Errors from the transport carrying the login request.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Credentials were rejected
    #[error("unauthorized: email or login code rejected")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Transport could not be reached at all
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

/// Errors from a login attempt.
///
/// Every variant is terminal for the attempt: nothing is retried and
/// nothing is persisted.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The request never produced a usable response
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The response body did not contain a token
    #[error("decode failure: {message}")]
    Decode {
        message: String,
        body: Option<String>,
    },

    /// The token could not be persisted
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

impl AuthError {
    /// True if the failure happened before a response body was available.
    pub fn is_transport(&self) -> bool {
        matches!(self, AuthError::Transport(_))
    }

    /// True if the response body could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, AuthError::Decode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TransportError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = AuthError::from(TransportError::Unauthorized);
        assert_eq!(
            err.to_string(),
            "transport failure: unauthorized: email or login code rejected"
        );

        let err = AuthError::Decode {
            message: "missing field `token`".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("decode failure"));
        assert!(err.to_string().contains("missing field `token`"));
    }

    #[test]
    fn classification() {
        let transport = AuthError::from(TransportError::Unavailable("offline".into()));
        assert!(transport.is_transport());
        assert!(!transport.is_decode());

        let decode = AuthError::Decode {
            message: "bad".into(),
            body: None,
        };
        assert!(decode.is_decode());
        assert!(!decode.is_transport());
    }
}
