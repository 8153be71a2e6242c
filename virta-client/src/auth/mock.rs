//! Mock login transport for testing without API access.
//!
//! Serves one canned outcome for every request and records the
//! credentials it was given.

use std::sync::Mutex;

use async_trait::async_trait;

use super::error::TransportError;
use super::session::AuthTransport;
use super::types::Credentials;

/// What the mock answers with.
#[derive(Debug, Clone)]
enum MockResponse {
    Body(String),
    Status { status: u16, message: String },
    Unavailable(String),
}

/// Mock transport that answers every login with the same canned outcome.
#[derive(Debug)]
pub struct MockAuthTransport {
    response: MockResponse,
    requests: Mutex<Vec<Credentials>>,
}

impl MockAuthTransport {
    fn new(response: MockResponse) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer with a raw response body.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self::new(MockResponse::Body(body.into()))
    }

    /// Answer with a well-formed token response.
    pub fn with_token(token: &str) -> Self {
        Self::with_body(serde_json::json!({ "token": token }).to_string())
    }

    /// Answer with an HTTP error status.
    ///
    /// 401 and 403 map to `Unauthorized`, like the real client.
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self::new(MockResponse::Status {
            status,
            message: message.into(),
        })
    }

    /// Fail before any response arrives.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::new(MockResponse::Unavailable(reason.into()))
    }

    /// Credentials received so far, oldest first.
    pub fn requests(&self) -> Vec<Credentials> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait]
impl AuthTransport for MockAuthTransport {
    async fn submit(&self, credentials: &Credentials) -> Result<String, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(credentials.clone());

        match &self.response {
            MockResponse::Body(body) => Ok(body.clone()),
            MockResponse::Status { status: 401 | 403, .. } => Err(TransportError::Unauthorized),
            MockResponse::Status { status, message } => Err(TransportError::Api {
                status: *status,
                message: message.clone(),
            }),
            MockResponse::Unavailable(reason) => Err(TransportError::Unavailable(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_body_and_records_request() {
        let mock = MockAuthTransport::with_token("abc123");
        let body = mock
            .submit(&Credentials::new("a@b.com", "pw"))
            .await
            .unwrap();

        assert_eq!(body, r#"{"token":"abc123"}"#);
        assert_eq!(mock.request_count(), 1);
        assert_eq!(mock.requests()[0].email, "a@b.com");
    }

    #[tokio::test]
    async fn status_errors() {
        let mock = MockAuthTransport::with_status(403, "forbidden");
        let result = mock.submit(&Credentials::new("a@b.com", "pw")).await;
        assert!(matches!(result, Err(TransportError::Unauthorized)));

        let mock = MockAuthTransport::with_status(500, "boom");
        let result = mock.submit(&Credentials::new("a@b.com", "pw")).await;
        assert!(matches!(result, Err(TransportError::Api { status: 500, .. })));
    }

    #[tokio::test]
    async fn unavailable() {
        let mock = MockAuthTransport::unavailable("offline");
        let result = mock.submit(&Credentials::new("a@b.com", "pw")).await;
        assert!(matches!(result, Err(TransportError::Unavailable(_))));
        assert_eq!(mock.request_count(), 1);
    }
}
