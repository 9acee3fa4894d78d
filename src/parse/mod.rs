//! Markup feature extraction.
//!
//! This module extracts the on-page SEO signals the auditor evaluates:
//! - Title and meta description text
//! - H1 count and visible word count
//! - Canonical link, viewport meta and Open Graph / Twitter Card tags
//! - Image alt text coverage
//!
//! Extraction sits behind the [`MarkupExtractor`] trait. [`PatternExtractor`]
//! scans raw markup with regular expressions and is the default;
//! [`DomExtractor`] reads the same features from a `scraper` DOM.

mod dom;
mod extractor;
mod patterns;

// Re-export public API
pub use dom::DomExtractor;
pub use extractor::{FeatureSet, ImageAltInfo, MarkupExtractor};
pub use patterns::PatternExtractor;
