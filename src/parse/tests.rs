// Parse module tests.

use super::*;

const WELL_FORMED_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>  Plumbing Repairs   in Leeds </title>
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="Description" content="  Emergency plumbing repairs across Leeds.  ">
  <meta property="og:title" content="Plumbing Repairs">
  <link rel="canonical" href="https://example.com/plumbing">
  <style>body { font-family: sans-serif; }</style>
  <script>var tracking = "do not count these words";</script>
</head>
<body>
  <h1>Plumbing repairs</h1>
  <p>We fix leaks fast.</p>
  <img src="van.jpg" alt="Our van">
  <img src="team.jpg">
  <img src="logo.png" alt="  ">
  <noscript>Enable JavaScript please</noscript>
</body>
</html>"#;

fn pattern() -> PatternExtractor {
    PatternExtractor
}

#[test]
fn test_title_basic() {
    let html = r#"<html><head><title>Test Page</title></head><body></body></html>"#;
    assert_eq!(pattern().title(html), Some("Test Page".to_string()));
}

#[test]
fn test_title_collapses_whitespace() {
    let html = "<title>\n    Test\n\t  Page\n</title>";
    assert_eq!(pattern().title(html), Some("Test Page".to_string()));
}

#[test]
fn test_title_strips_tags_and_ignores_case() {
    let html = r#"<TITLE data-x="1">Hello <b>bold</b> world</TITLE>"#;
    assert_eq!(pattern().title(html), Some("Hello bold world".to_string()));
}

#[test]
fn test_title_missing_or_empty() {
    assert_eq!(pattern().title("<html><head></head></html>"), None);
    assert_eq!(pattern().title("<title>   </title>"), None);
    assert_eq!(pattern().title("<title><span></span></title>"), None);
}

#[test]
fn test_title_first_of_many() {
    let html = "<title>First</title><title>Second</title>";
    assert_eq!(pattern().title(html), Some("First".to_string()));
}

#[test]
fn test_title_does_not_match_titled_tags() {
    // <titles> is not a title element
    assert_eq!(pattern().title("<titles>Nope</titles>"), None);
}

#[test]
fn test_meta_description_basic() {
    let html = r#"<meta name="description" content="A fine page.">"#;
    assert_eq!(
        pattern().meta_description(html),
        Some("A fine page.".to_string())
    );
}

#[test]
fn test_meta_description_case_insensitive_and_single_quotes() {
    let html = r#"<META NAME='DESCRIPTION' CONTENT='  Trimmed text  '>"#;
    assert_eq!(
        pattern().meta_description(html),
        Some("Trimmed text".to_string())
    );
}

#[test]
fn test_meta_description_content_before_name() {
    let html = r#"<meta content="Order does not matter" name="description" />"#;
    assert_eq!(
        pattern().meta_description(html),
        Some("Order does not matter".to_string())
    );
}

#[test]
fn test_meta_description_apostrophe_in_double_quotes() {
    let html = r#"<meta name="description" content="We're open late">"#;
    assert_eq!(
        pattern().meta_description(html),
        Some("We're open late".to_string())
    );
}

#[test]
fn test_meta_description_absent_cases() {
    assert_eq!(pattern().meta_description("<html></html>"), None);
    assert_eq!(
        pattern().meta_description(r#"<meta name="description">"#),
        None
    );
    assert_eq!(
        pattern().meta_description(r#"<meta name="description" content="   ">"#),
        None
    );
    // Other meta names do not count
    assert_eq!(
        pattern().meta_description(r#"<meta name="keywords" content="a, b">"#),
        None
    );
}

#[test]
fn test_meta_description_first_match_wins() {
    let html = r#"<meta name="description"><meta name="description" content="Second">"#;
    assert_eq!(pattern().meta_description(html), None);
}

#[test]
fn test_h1_count() {
    assert_eq!(pattern().h1_count("<p>No headings</p>"), 0);
    assert_eq!(pattern().h1_count("<h1>One</h1>"), 1);
    assert_eq!(
        pattern().h1_count(r#"<H1 class="hero">One</H1><h1>Two</h1>"#),
        2
    );
}

#[test]
fn test_h1_count_unclosed_and_lookalikes() {
    // Unclosed tags still count; <h10> and <h2> are not h1
    assert_eq!(pattern().h1_count("<h1>Open <h1>Open again"), 2);
    assert_eq!(pattern().h1_count("<h10>x</h10><h2>y</h2>"), 0);
}

#[test]
fn test_has_canonical() {
    assert!(pattern().has_canonical(r#"<link rel="canonical" href="https://example.com/">"#));
    assert!(pattern().has_canonical(r#"<LINK HREF='/a' REL='Canonical'>"#));
    assert!(!pattern().has_canonical(r#"<link rel="canonical" href="">"#));
    assert!(!pattern().has_canonical(r#"<link rel="canonical">"#));
    assert!(!pattern().has_canonical(r#"<link rel="stylesheet" href="/a.css">"#));
}

#[test]
fn test_has_viewport() {
    assert!(pattern().has_viewport(r#"<meta name="viewport" content="width=device-width">"#));
    assert!(!pattern().has_viewport(r#"<meta name="description" content="viewport">"#));
}

#[test]
fn test_has_social_tags() {
    assert!(pattern().has_social_tags(r#"<meta property="og:title" content="x">"#));
    assert!(pattern().has_social_tags(r#"<meta name='twitter:card' content="summary">"#));
    assert!(!pattern().has_social_tags(r#"<meta name="description" content="og: nope">"#));
}

#[test]
fn test_word_count_excludes_hidden_blocks() {
    let html = r#"<p>one two</p>
        <script type="text/javascript">three four five</script>
        <STYLE>six</STYLE>
        <noscript>seven eight</noscript>
        <div>nine<br>ten</div>"#;
    assert_eq!(pattern().word_count(html), 4);
}

#[test]
fn test_word_count_empty() {
    assert_eq!(pattern().word_count(""), 0);
    assert_eq!(pattern().word_count("<html><body></body></html>"), 0);
}

#[test]
fn test_image_alt() {
    let html = r#"<img src="a.png" alt="A"><IMG SRC="b.png"><img src="c.png" alt=""><img alt>"#;
    assert_eq!(
        pattern().image_alt(html),
        ImageAltInfo {
            total: 4,
            missing_alt: 3
        }
    );
    assert_eq!(pattern().image_alt("<p>no images</p>"), ImageAltInfo::default());
}

#[test]
fn test_extract_well_formed_page() {
    let features = pattern().extract(WELL_FORMED_PAGE);
    assert_eq!(features.title.as_deref(), Some("Plumbing Repairs in Leeds"));
    assert_eq!(
        features.meta_description.as_deref(),
        Some("Emergency plumbing repairs across Leeds.")
    );
    assert_eq!(features.h1_count, 1);
    assert!(features.has_canonical);
    assert!(features.has_viewport);
    assert!(features.has_social_tags);
    assert_eq!(
        features.image_alt,
        ImageAltInfo {
            total: 3,
            missing_alt: 2
        }
    );
    // Title (4) + h1 (2) + paragraph (4)
    assert_eq!(features.word_count, 10);
}

#[test]
fn test_extract_garbage_is_total() {
    let features = pattern().extract("<<<>>> <title <meta name= <h1");
    assert_eq!(features.title, None);
    assert_eq!(features.meta_description, None);
    assert!(!features.has_canonical);
}

#[test]
fn test_dom_extractor_agrees_on_well_formed_markup() {
    assert_eq!(
        DomExtractor.extract(WELL_FORMED_PAGE),
        PatternExtractor.extract(WELL_FORMED_PAGE)
    );
}

#[test]
fn test_dom_extractor_individual_features() {
    let dom = DomExtractor;
    assert_eq!(dom.title("<title>A  B</title>"), Some("A B".to_string()));
    assert_eq!(dom.h1_count("<h1>a</h1><h1>b</h1>"), 2);
    assert_eq!(dom.meta_description("<p>none</p>"), None);
    assert!(dom.has_viewport(r#"<meta name="VIEWPORT" content="width=device-width">"#));
    assert!(!dom.has_canonical(r#"<link rel="canonical" href="  ">"#));
    assert!(dom.has_social_tags(r#"<meta name="twitter:site" content="@x">"#));
}

#[test]
fn test_dom_extractor_handles_gt_inside_attribute() {
    // The pattern scanner cuts the tag at the first '>'; the DOM does not
    let html = r#"<meta content="a > b" name="description">"#;
    assert_eq!(DomExtractor.meta_description(html), Some("a > b".to_string()));
}

#[test]
fn test_social_tags_require_exact_attribute_name() {
    let html = r#"<meta data-property="og:title" content="x"><meta data-name='twitter:card'>"#;
    assert!(!pattern().has_social_tags(html));
    assert!(!DomExtractor.has_social_tags(html));
    assert!(pattern().has_social_tags("<meta\tproperty=\"og:type\" content=\"website\">"));
}
