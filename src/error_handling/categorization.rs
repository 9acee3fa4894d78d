//! Error categorization.
//!
//! This module maps transport errors onto the retrieval error taxonomy.

use super::types::RetrievalError;

/// Categorizes a `reqwest::Error` into a `RetrievalError`.
///
/// Errors carrying an HTTP status become `HttpError`; everything else (timeouts,
/// connection failures, blocked requests, body decoding) is a `NetworkError`
/// with a short human-readable reason.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The matching `RetrievalError`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> RetrievalError {
    if let Some(status) = error.status() {
        return RetrievalError::HttpError(status.as_u16());
    }

    let reason = if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        format!("could not connect: {error}")
    } else if error.is_redirect() {
        format!("redirect failed: {error}")
    } else if error.is_body() || error.is_decode() {
        format!("could not read response body: {error}")
    } else if error.is_builder() {
        format!("could not build request: {error}")
    } else {
        format!("request failed: {error}")
    };

    RetrievalError::NetworkError(reason)
}
