//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};

/// Initializes the HTTP client used for page retrieval.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Overall request timeout from the config
/// - A shorter TCP connect timeout
/// - Default redirect following (up to 10 hops)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let timeout = Duration::from_secs(config.timeout_seconds.max(1));
    let connect_timeout = timeout.min(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS));
    let client = ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
