use anyhow::{Context, Result};
use clap::Parser;
use feedload::{ClientConfig, FeedLoader, LoadError, RemoteFeedLoader, ReqwestClient};
use std::time::Duration;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "feedload", about = "Fetch a remote image feed and print its items")]
struct Args {
    /// Feed URL to load
    url: Url,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Maximum response body size in bytes
    #[arg(long, default_value_t = 10 * 1024 * 1024)]
    max_body_bytes: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = ClientConfig {
        timeout: Duration::from_secs(args.timeout_secs),
        max_body_bytes: args.max_body_bytes,
        ..ClientConfig::default()
    };
    let client = ReqwestClient::new(config).context("Failed to build HTTP client")?;
    let loader = RemoteFeedLoader::new(args.url, client);

    let items = match loader.load().await {
        Ok(items) => items,
        Err(LoadError::Connectivity) => {
            anyhow::bail!("Could not reach {} - check the URL and your connection", loader.url())
        }
        Err(LoadError::InvalidData) => {
            anyhow::bail!("{} did not return a valid feed", loader.url())
        }
    };

    if items.is_empty() {
        println!("Feed is empty.");
        return Ok(());
    }

    for item in &items {
        let description = item.description.as_deref().unwrap_or("-");
        let location = item.location.as_deref().unwrap_or("-");
        println!("{}  {}  {}  {}", item.id, item.image_url, description, location);
    }
    println!("{} item(s) loaded.", items.len());

    Ok(())
}
