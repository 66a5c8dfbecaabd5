//! Production transport implementation backed by `reqwest`.

use crate::api::transport::{HttpClient, HttpResponse, TransportError, TransportResult};
use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use std::time::Duration;
use url::Url;

/// Transport tuning for [`ReqwestClient`].
///
/// All fields have conservative defaults; construct with
/// `ClientConfig::default()` and override what you need.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// How long to wait for the response head before giving up.
    pub timeout: Duration,
    /// Hard cap on the response body size.
    pub max_body_bytes: usize,
    /// Value sent in the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_body_bytes: 10 * 1024 * 1024, // 10MB
            user_agent: default_user_agent(),
        }
    }
}

/// Returns the default user agent string, e.g. "feedload/0.1.0".
///
/// The version is read from Cargo.toml at compile time so it is always in
/// sync with the package version.
fn default_user_agent() -> String {
    format!("feedload/{}", env!("CARGO_PKG_VERSION"))
}

/// [`HttpClient`] implementation over a shared [`reqwest::Client`].
///
/// One GET per call, no retries, no status interpretation: every HTTP
/// response - including 4xx and 5xx - is a successful transport outcome.
/// Cloning is cheap (the inner client is reference-counted) and the client
/// is safe for concurrent use.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl ReqwestClient {
    /// Build a client with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`reqwest::Error`] if the TLS backend cannot
    /// be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { inner, config })
    }

    /// Wrap an existing [`reqwest::Client`], sharing its connection pool.
    pub fn with_client(inner: reqwest::Client, config: ClientConfig) -> Self {
        Self { inner, config }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &Url) -> TransportResult {
        let response = tokio::time::timeout(self.config.timeout, self.inner.get(url.clone()).send())
            .await
            .map_err(|_| TransportError::Timeout)?
            .map_err(TransportError::Request)?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = read_limited_bytes(response, self.config.max_body_bytes).await?;

        tracing::debug!(%url, status, bytes = body.len(), "feed response received");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Read the response body as a stream, refusing to buffer past `limit`.
async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Bytes, TransportError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            tracing::warn!(declared = len, limit, "response body over size cap");
            return Err(TransportError::BodyTooLarge(limit));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(TransportError::Request)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            tracing::warn!(received = bytes.len(), limit, "response body over size cap");
            return Err(TransportError::BodyTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(Bytes::from(bytes))
}
