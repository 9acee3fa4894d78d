//! The extractor interface shared by every markup scanner.

use serde::Serialize;

/// Image counts used by the alt-text check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImageAltInfo {
    /// Number of `<img>` elements
    pub total: usize,
    /// Images without a non-empty `alt` attribute
    pub missing_alt: usize,
}

/// Features extracted from one page's markup.
///
/// Every field has a defined "not found" value, so extraction cannot fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeatureSet {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub h1_count: usize,
    pub word_count: usize,
    pub has_canonical: bool,
    pub has_viewport: bool,
    pub has_social_tags: bool,
    pub image_alt: ImageAltInfo,
}

/// Scans raw markup for the features the auditor evaluates.
///
/// Implementations must be total: any string input yields a value for every
/// feature. The auditor only depends on this trait, so the pattern-based
/// scanner can be replaced by a DOM-based one without changing reports for
/// well-formed pages.
pub trait MarkupExtractor {
    /// Text of the first `<title>` element, tags stripped and whitespace collapsed.
    fn title(&self, markup: &str) -> Option<String>;

    /// Trimmed `content` of the first `<meta name="description">` element.
    fn meta_description(&self, markup: &str) -> Option<String>;

    /// Number of opening `<h1>` tags.
    fn h1_count(&self, markup: &str) -> usize;

    /// Whitespace-delimited tokens of visible text (script, style and noscript excluded).
    fn word_count(&self, markup: &str) -> usize;

    /// A `<link rel="canonical">` with a non-empty `href` exists.
    fn has_canonical(&self, markup: &str) -> bool;

    /// A `<meta name="viewport">` exists.
    fn has_viewport(&self, markup: &str) -> bool;

    /// Any `property="og:…"` or `name="twitter:…"` attribute exists.
    fn has_social_tags(&self, markup: &str) -> bool;

    fn image_alt(&self, markup: &str) -> ImageAltInfo;

    /// Extracts every feature in one call.
    fn extract(&self, markup: &str) -> FeatureSet {
        FeatureSet {
            title: self.title(markup),
            meta_description: self.meta_description(markup),
            h1_count: self.h1_count(markup),
            word_count: self.word_count(markup),
            has_canonical: self.has_canonical(markup),
            has_viewport: self.has_viewport(markup),
            has_social_tags: self.has_social_tags(markup),
            image_alt: self.image_alt(markup),
        }
    }
}

/// Collapses runs of whitespace into single spaces and trims the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns `Some(trimmed)` unless the trimmed value is empty.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
