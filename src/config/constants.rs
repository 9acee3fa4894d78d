//! Configuration constants.
//!
//! This module defines the audit thresholds, scoring weights, network limits and
//! other fixed parameters used throughout the application.

// Audit thresholds
/// Maximum title length (in characters) for a `Good` title.
pub const TITLE_LENGTH_MAX: usize = 60;
/// Minimum meta description length (in characters) for a `Good` description.
pub const META_DESCRIPTION_MIN: usize = 140;
/// Maximum meta description length (in characters) for a `Good` description.
pub const META_DESCRIPTION_MAX: usize = 160;
/// Pages with fewer visible words than this are reported as `Thin`.
pub const MIN_WORD_COUNT: usize = 800;

// Scoring
/// Title length range (inclusive) that earns full title credit in the score.
pub const SCORE_TITLE_RANGE: (usize, usize) = (20, 65);
/// Meta description length range (inclusive) that earns full credit in the score.
pub const SCORE_META_RANGE: (usize, usize) = (70, 160);
pub const SCORE_TITLE_WEIGHT: u32 = 25;
pub const SCORE_META_WEIGHT: u32 = 25;
/// Partial credit for a title or description that is present but outside its range.
pub const SCORE_PARTIAL_WEIGHT: u32 = 12;
pub const SCORE_CANONICAL_WEIGHT: u32 = 12;
pub const SCORE_SINGLE_H1_WEIGHT: u32 = 12;
pub const SCORE_MULTIPLE_H1_WEIGHT: u32 = 6;
pub const SCORE_VIEWPORT_WEIGHT: u32 = 8;
pub const SCORE_SOCIAL_WEIGHT: u32 = 8;
pub const SCORE_KEYWORD_BONUS: u32 = 5;
pub const SCORE_MAX: u32 = 100;
/// Terms that earn the keyword bonus when found in the title or description.
pub const SCORE_KEYWORDS: &[&str] = &["seo", "audit", "inspector", "webmaster"];

// URL validation
/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Network
/// Default fetch timeout in seconds.
/// The transport would otherwise hang until it gives up on its own.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = "SEOInspectorAI/1.0 (+github.com)";

/// Accept header sent with the page request.
pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8";

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Larger responses are treated as a network failure to prevent memory exhaustion
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

// Ticket Mode
pub const TICKET_HEADER: &str = "SEOInspectorAI — Ticket Mode";
pub const TICKET_URL_PLACEHOLDER: &str = "(not provided)";
