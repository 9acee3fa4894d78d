//! Main application modules.
//!
//! This module provides URL normalization, the audit session that owns the
//! shell's state, and rendering of audit outcomes.

pub mod render;
pub mod session;
pub mod url;

// Re-export public API
pub use render::{render_fallback, render_outcome, render_report};
pub use session::{AuditOutcome, AuditSession, RequestToken};
pub use url::{normalize, NormalizedUrl};
