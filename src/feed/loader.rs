//! The caller-facing loading contract and its error taxonomy.

use crate::feed::FeedItem;
use async_trait::async_trait;
use thiserror::Error;

/// Why a load failed, as seen by callers.
///
/// Exactly two kinds are surfaced. Underlying causes (a DNS failure, a
/// serde error, a 500 body) are logged at the point they occur and then
/// discarded; callers decide about retrying on classification alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The transport never produced a usable response (network-level
    /// failure, timeout, oversized body).
    #[error("could not reach the feed host")]
    Connectivity,
    /// The request completed but the response was unusable: wrong status
    /// code, malformed envelope, or a decode failure anywhere in it.
    #[error("feed response was invalid")]
    InvalidData,
}

/// Outcome of one `load` call: every item in document order, or a
/// classified failure. Never a partially-populated success.
pub type LoadResult = Result<Vec<FeedItem>, LoadError>;

/// Anything that can produce a feed on demand.
///
/// Each `load` call is independent and resolves exactly once. The trait
/// deliberately has no other surface: no cancellation, no progress, no
/// caching hooks.
#[async_trait]
pub trait FeedLoader {
    async fn load(&self) -> LoadResult;
}
