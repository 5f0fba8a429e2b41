//! HTTP transport for indexer requests.
//!
//! The fetcher never touches `reqwest` directly; it talks to an
//! [`IndexerTransport`], so tests can substitute a canned transport and the
//! binary wires in [`ReqwestTransport`].

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::domain::FetchError;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Whether to honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment
    pub use_system_proxy: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            use_system_proxy: true,
        }
    }
}

impl HttpConfig {
    /// Create config with custom timeout
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    /// Bypass any proxy configured in the environment
    #[must_use]
    pub fn without_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }
}

// ============================================================================
// Traits
// ============================================================================

/// Sends a JSON document to an endpoint and returns the decoded JSON reply.
#[async_trait]
pub trait IndexerTransport: Send + Sync {
    /// POST `body` to `url`.
    ///
    /// # Errors
    ///
    /// `FetchError::Network` if the request cannot be sent or the status is
    /// not 2xx, `FetchError::Parse` if the reply is not JSON.
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, FetchError>;
}

// ============================================================================
// Reqwest Transport
// ============================================================================

/// Production transport backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: Client,
}

impl ReqwestTransport {
    /// Build the transport with connection pooling.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Network` if the HTTP client fails to initialize
    /// (e.g., TLS backend unavailable).
    pub fn new(config: &HttpConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(config.timeout);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let inner = builder
            .build()
            .map_err(|e| FetchError::network(format!("failed to initialize HTTP client: {e}")))?;

        Ok(Self { inner })
    }
}

#[async_trait]
impl IndexerTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, FetchError> {
        let response = self
            .inner
            .post(url)
            .header("accept", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FetchError::network(format!(
                "Indexer request failed with status {status}: {error_text}"
            )));
        }

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| FetchError::parse(format!("indexer returned invalid JSON: {e}")))
    }
}
