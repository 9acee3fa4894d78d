//! seo_inspector library: single-page on-page SEO audits
//!
//! This library fetches one page, extracts its on-page SEO signals (title, meta
//! description, headings, word count, canonical link and more), evaluates them
//! against fixed thresholds and builds a [`Report`] with a status and a
//! recommendation per check. When the page cannot be retrieved it produces a
//! Ticket Mode payload the user can submit for a manual review instead.
//!
//! # Example
//!
//! ```no_run
//! use seo_inspector::{AuditOutcome, AuditSession, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let session = AuditSession::from_config(&Config::default())?;
//!
//! match session.run("example.com").await {
//!     Some(AuditOutcome::Report(report)) => println!("{}", report.overview()),
//!     Some(AuditOutcome::Fallback { ticket, .. }) => println!("{ticket}"),
//!     Some(AuditOutcome::Rejected(error)) => eprintln!("{error}"),
//!     None => {}
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Analysis alone needs no runtime:
//!
//! ```
//! use seo_inspector::{analyze, normalize, Status};
//!
//! let url = normalize("example.com").unwrap();
//! let report = analyze(&url, "<title>Short</title>");
//! assert!(report.critical());
//! assert_eq!(report.findings()[0].status(), Status::Good);
//! ```
//!
//! # Requirements
//!
//! Fetching requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling async library functions within an async context.

pub mod app;
pub mod audit;
pub mod config;
mod error_handling;
pub mod fetch;
pub mod initialization;
mod models;
pub mod parse;
pub mod ticket;

// Re-export public API
pub use app::{normalize, AuditOutcome, AuditSession, NormalizedUrl, RequestToken};
pub use audit::{analyze, Auditor, RuleSet};
pub use config::{Config, LogFormat, LogLevel, OutputFormat, RuleSetKind};
pub use error_handling::{InitializationError, NormalizationError, RetrievalError};
pub use fetch::Retriever;
pub use models::{CheckName, Finding, Report, Status};
pub use parse::{DomExtractor, FeatureSet, ImageAltInfo, MarkupExtractor, PatternExtractor};
pub use ticket::{generate_ticket, generate_ticket_now};
