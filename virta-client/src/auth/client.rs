//! HTTP client for the login endpoint.

use async_trait::async_trait;

use super::error::TransportError;
use super::session::AuthTransport;
use super::types::Credentials;

/// Default base URL for the charging API.
const DEFAULT_BASE_URL: &str = "https://apitest.virta.fi/v4";

/// Configuration for the login HTTP client.
#[derive(Debug, Clone)]
pub struct AuthClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl AuthClientConfig {
    /// Create a new config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for AuthClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Login client over HTTPS.
///
/// Posts credentials as JSON to `{base_url}/auth` and hands the raw
/// response body back for decoding.
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthClient {
    /// Create a new login client.
    pub fn new(config: AuthClientConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn auth_url(&self) -> String {
        format!("{}/auth", self.base_url)
    }
}

#[async_trait]
impl AuthTransport for HttpAuthClient {
    async fn submit(&self, credentials: &Credentials) -> Result<String, TransportError> {
        let response = self
            .http
            .post(self.auth_url())
            .json(credentials)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(TransportError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}
