//! The loader that ties transport and mapping together.

use crate::api::mapper;
use crate::api::transport::HttpClient;
use crate::feed::{FeedLoader, LoadError, LoadResult};
use async_trait::async_trait;
use url::Url;

/// Loads a feed from a fixed URL over any [`HttpClient`].
///
/// The loader holds no state besides its configuration, so `load` may be
/// called any number of times; every call issues its own independent
/// request. Concurrent calls share only the client, which the [`HttpClient`]
/// contract already requires to be concurrency-safe.
#[derive(Debug)]
pub struct RemoteFeedLoader<C> {
    url: Url,
    client: C,
}

impl<C> RemoteFeedLoader<C> {
    pub fn new(url: Url, client: C) -> Self {
        Self { url, client }
    }

    /// The URL every `load` call requests.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl<C> FeedLoader for RemoteFeedLoader<C>
where
    C: HttpClient + Send + Sync,
{
    /// Issue one GET and map the outcome.
    ///
    /// A transport failure of any kind becomes [`LoadError::Connectivity`];
    /// the cause is logged here and not surfaced. A transport success is
    /// handed to the response mapper and its verdict returned verbatim.
    async fn load(&self) -> LoadResult {
        match self.client.get(&self.url).await {
            Ok(response) => mapper::map_items(&response.body, response.status),
            Err(err) => {
                tracing::debug!(url = %self.url, error = %err, "feed transport failed");
                Err(LoadError::Connectivity)
            }
        }
    }
}
