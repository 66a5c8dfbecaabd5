//! The load pipeline: transport seam, production client, response mapper,
//! and the remote loader that orchestrates them.
//!
//! Data flows one way: [`RemoteFeedLoader::load`] asks its [`HttpClient`]
//! for the configured URL, hands the raw outcome to the mapper, and
//! delivers the mapper's verdict untouched. The mapper owns all validation
//! policy; the transport owns none.

mod client;
mod mapper;
mod remote;
mod transport;

pub use client::{ClientConfig, ReqwestClient};
pub use remote::RemoteFeedLoader;
pub use transport::{HttpClient, HttpResponse, TransportError, TransportResult};
