//! Remote feed loading pipeline.
//!
//! This crate fetches a remote collection of feed items over HTTP and maps
//! the raw response into a validated, strongly-typed result, shielding
//! callers from transport errors and malformed payloads.
//!
//! # Architecture
//!
//! The pipeline is three small pieces layered over one seam:
//!
//! - [`feed`] - The domain: [`FeedItem`], the [`FeedLoader`] trait, and the
//!   two-kind error taxonomy callers see ([`LoadError`]).
//! - [`api`] - The load pipeline: the [`HttpClient`] transport seam, the
//!   production [`ReqwestClient`], the response mapper, and the
//!   [`RemoteFeedLoader`] orchestrator.
//!
//! # Example
//!
//! ```ignore
//! use feedload::{ClientConfig, FeedLoader, RemoteFeedLoader, ReqwestClient};
//!
//! let client = ReqwestClient::new(ClientConfig::default())?;
//! let loader = RemoteFeedLoader::new(url, client);
//! let items = loader.load().await?;
//! ```

pub mod api;
pub mod feed;

pub use api::{
    ClientConfig, HttpClient, HttpResponse, RemoteFeedLoader, ReqwestClient, TransportError,
    TransportResult,
};
pub use feed::{FeedItem, FeedLoader, LoadError, LoadResult};
