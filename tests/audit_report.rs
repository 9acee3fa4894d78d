//! Public API tests for report building.
//!
//! These tests exercise `analyze` and `Auditor` the way a library user would,
//! including property tests for the invariants every report must hold.

use proptest::prelude::*;
use seo_inspector::{
    analyze, normalize, Auditor, CheckName, NormalizedUrl, RuleSet, RuleSetKind, Status,
};

fn url() -> NormalizedUrl {
    normalize("https://example.com/page").unwrap()
}

fn title_page(title_len: usize) -> String {
    format!("<title>{}</title>", "t".repeat(title_len))
}

fn meta_page(len: usize) -> String {
    format!(r#"<meta name="description" content="{}">"#, "m".repeat(len))
}

fn status_of(markup: &str, check: CheckName) -> Option<Status> {
    analyze(&url(), markup).finding(check).map(|f| f.status())
}

#[test]
fn test_title_boundary() {
    assert_eq!(status_of(&title_page(60), CheckName::TitleTag), Some(Status::Good));
    assert_eq!(
        status_of(&title_page(61), CheckName::TitleTag),
        Some(Status::NeedsImprovement)
    );
}

#[test]
fn test_meta_description_boundaries() {
    let check = CheckName::MetaDescription;
    assert_eq!(status_of(&meta_page(139), check), Some(Status::NeedsImprovement));
    assert_eq!(status_of(&meta_page(140), check), Some(Status::Good));
    assert_eq!(status_of(&meta_page(160), check), Some(Status::Good));
    assert_eq!(status_of(&meta_page(161), check), Some(Status::NeedsImprovement));
}

#[test]
fn test_h1_boundaries() {
    let check = CheckName::H1Structure;
    assert_eq!(status_of("<p>none</p>", check), Some(Status::Missing));
    assert_eq!(status_of("<h1>one</h1>", check), Some(Status::Good));
    assert_eq!(
        status_of("<h1>one</h1><h1>two</h1>", check),
        Some(Status::NeedsImprovement)
    );
}

#[test]
fn test_word_count_boundary() {
    let words = |n: usize| format!("<p>{}</p>", vec!["word"; n].join(" "));
    assert_eq!(status_of(&words(799), CheckName::WordCount), Some(Status::Thin));
    assert_eq!(status_of(&words(800), CheckName::WordCount), Some(Status::Good));
}

#[test]
fn test_standard_rules_skip_extended_checks() {
    let report = analyze(&url(), "");
    assert_eq!(report.findings().len(), 5);
    assert!(report.finding(CheckName::Viewport).is_none());
    assert_eq!(report.score(), None);
}

#[test]
fn test_extended_rules_report_every_check_in_order() {
    let report = Auditor::from(RuleSetKind::Extended).analyze(&url(), "");
    let names: Vec<CheckName> = report.findings().iter().map(|f| f.name()).collect();
    assert_eq!(names, RuleSet::extended().checks().to_vec());
    assert_eq!(report.score(), Some(0));
}

#[test]
fn test_report_json_dump() {
    let report = analyze(&url(), "<title>Short</title>");
    let value: serde_json::Value =
        serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();
    assert_eq!(value["url"], "https://example.com/page");
    assert_eq!(value["findings"][0]["name"], "Title Tag");
    assert_eq!(value["findings"][0]["status"], "Good");
    assert_eq!(value["findings"][3]["status"], "Thin");
    assert_eq!(value["critical"], true);
}

proptest! {
    #[test]
    fn prop_analyze_is_total_and_deterministic(markup in ".{0,400}") {
        let first = analyze(&url(), &markup);
        let second = analyze(&url(), &markup);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.findings().len(), 5);
    }

    #[test]
    fn prop_critical_iff_missing_or_thin(
        title in proptest::option::of("[a-z ]{1,80}"),
        h1s in 0usize..4,
        words in 0usize..20,
    ) {
        let mut markup = String::new();
        if let Some(title) = &title {
            markup.push_str(&format!("<title>{title}</title>"));
        }
        for _ in 0..h1s {
            markup.push_str("<h1>Heading</h1>");
        }
        markup.push_str(&format!("<p>{}</p>", vec!["word"; words].join(" ")));

        let report = Auditor::new(RuleSet::extended()).analyze(&url(), &markup);
        let expected = report
            .findings()
            .iter()
            .any(|f| matches!(f.status(), Status::Missing | Status::Thin));
        prop_assert_eq!(report.critical(), expected);
        prop_assert_eq!(report.escalation().is_some(), expected);
        prop_assert!(report.score().is_some_and(|s| s <= 100));
    }
}
