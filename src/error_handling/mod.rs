//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, normalization and retrieval
//! - Categorization of transport errors into the retrieval taxonomy
//!
//! Retrieval errors are never fatal: the audit session maps them onto the
//! Ticket Mode fallback.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{InitializationError, NormalizationError, RetrievalError};
