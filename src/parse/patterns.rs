//! Pattern-based markup scanning.
//!
//! Each feature is found with a case-insensitive regular expression over the raw
//! markup. There is no DOM: malformed or nested markup is only handled as far as
//! the patterns tolerate it, which is also what keeps the scanner cheap.

use regex::Regex;
use std::sync::LazyLock;

use super::extractor::{collapse_whitespace, non_empty, ImageAltInfo, MarkupExtractor};

const TITLE_PATTERN: &str = r"(?is)<title\b[^>]*>(.*?)</title\s*>";
const TAG_PATTERN: &str = r"<[^>]*>";
const META_TAG_PATTERN: &str = r"(?i)<meta\b[^>]*>";
const LINK_TAG_PATTERN: &str = r"(?i)<link\b[^>]*>";
const IMG_TAG_PATTERN: &str = r"(?i)<img\b[^>]*>";
const H1_OPEN_PATTERN: &str = r"(?i)<h1\b[^>]*>";
const ATTRIBUTE_PATTERN: &str =
    r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#;
const SOCIAL_PATTERN: &str = r#"(?i)\s(?:property\s*=\s*["']og:|name\s*=\s*["']twitter:)"#;
const HIDDEN_BLOCK_PATTERN: &str = r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>|<noscript\b[^>]*>.*?</noscript\s*>";

/// Helper function to compile a static regex pattern, panicking with a detailed error
/// message if compilation fails. The patterns are compile-time constants.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(TITLE_PATTERN, "TITLE_RE"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(TAG_PATTERN, "TAG_RE"));
static META_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(META_TAG_PATTERN, "META_TAG_RE"));
static LINK_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(LINK_TAG_PATTERN, "LINK_TAG_RE"));
static IMG_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(IMG_TAG_PATTERN, "IMG_TAG_RE"));
static H1_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(H1_OPEN_PATTERN, "H1_OPEN_RE"));
static ATTRIBUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ATTRIBUTE_PATTERN, "ATTRIBUTE_RE"));
static SOCIAL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(SOCIAL_PATTERN, "SOCIAL_RE"));
static HIDDEN_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(HIDDEN_BLOCK_PATTERN, "HIDDEN_BLOCK_RE"));

/// Returns the value of the first attribute called `name` (case-insensitive) in a
/// single tag's source text.
fn attribute<'t>(tag: &'t str, name: &str) -> Option<&'t str> {
    ATTRIBUTE_RE.captures_iter(tag).find_map(|caps| {
        let attr_name = caps.get(1)?.as_str();
        if !attr_name.eq_ignore_ascii_case(name) {
            return None;
        }
        caps.get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str())
    })
}

fn attribute_is(tag: &str, name: &str, expected: &str) -> bool {
    attribute(tag, name).is_some_and(|value| value.trim().eq_ignore_ascii_case(expected))
}

fn strip_tags(fragment: &str) -> String {
    collapse_whitespace(&TAG_RE.replace_all(fragment, " "))
}

/// The regex-backed extractor. This is the default used by the auditor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExtractor;

impl MarkupExtractor for PatternExtractor {
    fn title(&self, markup: &str) -> Option<String> {
        let inner = TITLE_RE.captures(markup)?.get(1)?.as_str();
        non_empty(&strip_tags(inner))
    }

    fn meta_description(&self, markup: &str) -> Option<String> {
        // Only the first matching element counts, even if it has no content
        let tag = META_TAG_RE
            .find_iter(markup)
            .map(|m| m.as_str())
            .find(|tag| attribute_is(tag, "name", "description"))?;
        attribute(tag, "content").and_then(non_empty)
    }

    fn h1_count(&self, markup: &str) -> usize {
        H1_OPEN_RE.find_iter(markup).count()
    }

    fn word_count(&self, markup: &str) -> usize {
        let visible = HIDDEN_BLOCK_RE.replace_all(markup, " ");
        TAG_RE.replace_all(&visible, " ").split_whitespace().count()
    }

    fn has_canonical(&self, markup: &str) -> bool {
        LINK_TAG_RE.find_iter(markup).any(|m| {
            let tag = m.as_str();
            let is_canonical = attribute(tag, "rel").is_some_and(|rel| {
                rel.split_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("canonical"))
            });
            is_canonical && attribute(tag, "href").and_then(non_empty).is_some()
        })
    }

    fn has_viewport(&self, markup: &str) -> bool {
        META_TAG_RE
            .find_iter(markup)
            .any(|m| attribute_is(m.as_str(), "name", "viewport"))
    }

    fn has_social_tags(&self, markup: &str) -> bool {
        SOCIAL_RE.is_match(markup)
    }

    fn image_alt(&self, markup: &str) -> ImageAltInfo {
        IMG_TAG_RE
            .find_iter(markup)
            .fold(ImageAltInfo::default(), |mut info, m| {
                info.total += 1;
                if attribute(m.as_str(), "alt").and_then(non_empty).is_none() {
                    info.missing_alt += 1;
                }
                info
            })
    }
}
