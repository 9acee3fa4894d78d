//! Page retrieval.
//!
//! One GET per audit: no retries, no caching, no crawling. Redirects are
//! followed by the client. Every failure maps onto [`RetrievalError`] so the
//! caller can fall back to Ticket Mode.

mod request;

use std::sync::Arc;

use log::{debug, info, warn};

use crate::app::NormalizedUrl;
use crate::config::{Config, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::{categorize_reqwest_error, InitializationError, RetrievalError};
use crate::initialization::init_client;

use request::RequestHeaders;

/// Fetches raw markup for a normalized URL.
#[derive(Debug, Clone)]
pub struct Retriever {
    client: Arc<reqwest::Client>,
}

impl Retriever {
    /// Builds a retriever with a client configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::from_client(init_client(config)?))
    }

    pub fn from_client(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }

    /// Retrieves the page body as text.
    ///
    /// # Errors
    ///
    /// - `HttpError(status)` for any non-2xx final response
    /// - `NetworkError` for timeouts, connection failures, unreadable bodies and
    ///   bodies over the size limit
    pub async fn fetch(&self, url: &NormalizedUrl) -> Result<String, RetrievalError> {
        debug!("Fetching {url}");
        let request = RequestHeaders::apply_to_request_builder(self.client.get(url.as_str()));

        let response = request.send().await.map_err(|e| {
            let error = categorize_reqwest_error(&e);
            warn!("Failed to fetch {url}: {error}");
            error
        })?;

        // Any final status outside 2xx fails, including unfollowed 3xx
        let status = response.status();
        if !status.is_success() {
            let error = RetrievalError::HttpError(status.as_u16());
            warn!("Failed to fetch {url}: {error}");
            return Err(error);
        }
        if let Some(length) = response.content_length() {
            if length > MAX_RESPONSE_BODY_SIZE as u64 {
                warn!("Refusing {url}: declared body of {length} bytes is over the limit");
                return Err(body_too_large(length as usize));
            }
        }

        // reqwest decodes the body using the charset from Content-Type
        let body = response.text().await.map_err(|e| {
            let error = categorize_reqwest_error(&e);
            warn!("Failed to read body of {url}: {error}");
            error
        })?;

        if body.len() > MAX_RESPONSE_BODY_SIZE {
            warn!("Refusing {url}: body of {} bytes is over the limit", body.len());
            return Err(body_too_large(body.len()));
        }

        info!("Fetched {url} ({status}, {} bytes)", body.len());
        Ok(body)
    }
}

fn body_too_large(size: usize) -> RetrievalError {
    RetrievalError::NetworkError(format!(
        "response body too large ({size} bytes, limit {MAX_RESPONSE_BODY_SIZE})"
    ))
}
