//! DOM-based markup scanning.
//!
//! Parses the markup with `scraper` (html5ever) and reads the same features from
//! the element tree. Slower than [`super::PatternExtractor`] but immune to
//! attribute values that contain `>` and similar pattern pitfalls.

use scraper::{Html, Node, Selector};
use std::sync::LazyLock;

use super::extractor::{collapse_whitespace, non_empty, FeatureSet, ImageAltInfo, MarkupExtractor};

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const META_NAME_SELECTOR_STR: &str = "meta[name]";
const LINK_SELECTOR_STR: &str = "link[rel]";
const H1_SELECTOR_STR: &str = "h1";
const IMG_SELECTOR_STR: &str = "img";
const ANY_SELECTOR_STR: &str = "*";

/// Elements whose text never reaches the reader.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript"];

/// Parses a CSS selector that is a compile-time constant.
///
/// # Panics
///
/// Panics if the selector cannot be parsed (indicates a programming error).
fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));
static META_NAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(META_NAME_SELECTOR_STR, "META_NAME_SELECTOR"));
static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(LINK_SELECTOR_STR, "LINK_SELECTOR"));
static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(H1_SELECTOR_STR, "H1_SELECTOR"));
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(IMG_SELECTOR_STR, "IMG_SELECTOR"));
static ANY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ANY_SELECTOR_STR, "ANY_SELECTOR"));

fn title_of(document: &Html) -> Option<String> {
    let element = document.select(&TITLE_SELECTOR).next()?;
    let text: String = element.text().collect::<Vec<_>>().join(" ");
    non_empty(&collapse_whitespace(&text))
}

/// First `<meta>` whose `name` equals `wanted`, ignoring case.
fn meta_named<'a>(document: &'a Html, wanted: &str) -> Option<scraper::ElementRef<'a>> {
    document.select(&META_NAME_SELECTOR).find(|element| {
        element
            .value()
            .attr("name")
            .is_some_and(|name| name.trim().eq_ignore_ascii_case(wanted))
    })
}

fn meta_description_of(document: &Html) -> Option<String> {
    meta_named(document, "description")?
        .value()
        .attr("content")
        .and_then(non_empty)
}

fn has_canonical_of(document: &Html) -> bool {
    document.select(&LINK_SELECTOR).any(|element| {
        let link = element.value();
        let is_canonical = link.attr("rel").is_some_and(|rel| {
            rel.split_whitespace()
                .any(|token| token.eq_ignore_ascii_case("canonical"))
        });
        is_canonical && link.attr("href").and_then(non_empty).is_some()
    })
}

fn has_social_tags_of(document: &Html) -> bool {
    document.select(&ANY_SELECTOR).any(|element| {
        element.value().attrs().any(|(name, value)| {
            let value = value.trim_start().to_ascii_lowercase();
            (name.eq_ignore_ascii_case("property") && value.starts_with("og:"))
                || (name.eq_ignore_ascii_case("name") && value.starts_with("twitter:"))
        })
    })
}

fn word_count_of(document: &Html) -> usize {
    document
        .root_element()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => {
                let hidden = node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
                });
                (!hidden).then(|| text.split_whitespace().count())
            }
            _ => None,
        })
        .sum()
}

fn image_alt_of(document: &Html) -> ImageAltInfo {
    document
        .select(&IMG_SELECTOR)
        .fold(ImageAltInfo::default(), |mut info, element| {
            info.total += 1;
            if element.value().attr("alt").and_then(non_empty).is_none() {
                info.missing_alt += 1;
            }
            info
        })
}

/// The `scraper`-backed extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomExtractor;

impl MarkupExtractor for DomExtractor {
    fn title(&self, markup: &str) -> Option<String> {
        title_of(&Html::parse_document(markup))
    }

    fn meta_description(&self, markup: &str) -> Option<String> {
        meta_description_of(&Html::parse_document(markup))
    }

    fn h1_count(&self, markup: &str) -> usize {
        Html::parse_document(markup).select(&H1_SELECTOR).count()
    }

    fn word_count(&self, markup: &str) -> usize {
        word_count_of(&Html::parse_document(markup))
    }

    fn has_canonical(&self, markup: &str) -> bool {
        has_canonical_of(&Html::parse_document(markup))
    }

    fn has_viewport(&self, markup: &str) -> bool {
        meta_named(&Html::parse_document(markup), "viewport").is_some()
    }

    fn has_social_tags(&self, markup: &str) -> bool {
        has_social_tags_of(&Html::parse_document(markup))
    }

    fn image_alt(&self, markup: &str) -> ImageAltInfo {
        image_alt_of(&Html::parse_document(markup))
    }

    /// Parses the document once for all features.
    fn extract(&self, markup: &str) -> FeatureSet {
        let document = Html::parse_document(markup);
        FeatureSet {
            title: title_of(&document),
            meta_description: meta_description_of(&document),
            h1_count: document.select(&H1_SELECTOR).count(),
            word_count: word_count_of(&document),
            has_canonical: has_canonical_of(&document),
            has_viewport: meta_named(&document, "viewport").is_some(),
            has_social_tags: has_social_tags_of(&document),
            image_alt: image_alt_of(&document),
        }
    }
}
