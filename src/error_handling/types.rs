//! Error type definitions.
//!
//! This module defines the error types for initialization, URL normalization and
//! page retrieval. The auditor has no error type: every extractor has a defined
//! "not found" result.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors produced while turning user input into a [`crate::NormalizedUrl`].
///
/// Both variants are reported inline to the user; no fetch is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizationError {
    /// The input was blank after trimming.
    #[error("Enter a URL to audit (example: https://example.com).")]
    EmptyInput,

    /// The input did not parse as an absolute http(s) URL after scheme-prefixing.
    #[error("Enter a valid URL (example: https://example.com): {0}")]
    InvalidUrl(String),
}

/// Errors produced while retrieving page markup.
///
/// Both variants are expected and recoverable: the caller falls back to Ticket Mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetrievalError {
    /// The server answered with a status outside the 2xx range.
    #[error("HTTP {0}")]
    HttpError(u16),

    /// Any transport-level failure, including timeouts and blocked requests.
    #[error("network error: {0}")]
    NetworkError(String),
}

impl RetrievalError {
    /// Returns the HTTP status code if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RetrievalError::HttpError(status) => Some(*status),
            RetrievalError::NetworkError(_) => None,
        }
    }
}
