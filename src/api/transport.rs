//! The transport seam the load pipeline is built over.
//!
//! [`HttpClient`] is the single capability the loader depends on: issue one
//! GET, eventually get back either the raw response or a failure. Status
//! policy deliberately does not live here - a 404 is a *successful*
//! transport outcome, and deciding what to do with it belongs to the
//! response mapper.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use thiserror::Error;
use url::Url;

/// Raw successful response: body bytes plus status metadata.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code, unvalidated. Policy is applied downstream.
    pub status: u16,
    /// Response headers, carried opaquely. The pipeline never inspects
    /// them; they are here for callers that need response metadata.
    pub headers: HeaderMap,
    /// The raw payload.
    pub body: Bytes,
}

/// Why the transport failed to complete a request.
///
/// The loader collapses every variant into one connectivity
/// classification, so these distinctions exist for logging only.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network-level error (DNS, connection, TLS, protocol).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The request did not complete within the client's timeout.
    #[error("request timed out")]
    Timeout,
    /// The response body exceeded the client's size cap.
    #[error("response body exceeded {0} bytes")]
    BodyTooLarge(usize),
}

/// Exactly one of these is produced per [`HttpClient::get`] call.
pub type TransportResult = Result<HttpResponse, TransportError>;

/// Capability to issue a single HTTP GET.
///
/// Implementations must not keep global state and must be safe for
/// concurrent invocation; the loader adds no locking of its own. The
/// production implementation is [`ReqwestClient`](crate::api::ReqwestClient);
/// tests substitute a recording spy.
#[async_trait]
pub trait HttpClient {
    /// Issue one GET to `url` and resolve with the raw outcome.
    async fn get(&self, url: &Url) -> TransportResult;
}
