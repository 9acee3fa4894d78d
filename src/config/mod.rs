//! Application configuration and constants.
//!
//! This module provides:
//! - Audit thresholds, scoring weights and network limits
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt, OutputFormat, RuleSetKind};
