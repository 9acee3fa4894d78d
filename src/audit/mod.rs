//! Report building.
//!
//! The [`Auditor`] turns fetched markup into a [`Report`]: extract a
//! [`FeatureSet`](crate::parse::FeatureSet), evaluate the enabled checks of its
//! [`RuleSet`], then optionally compute the advisory score. Analysis is pure;
//! the same markup always yields the same report.

mod checks;
mod score;

use std::fmt;

use log::debug;

use crate::app::NormalizedUrl;
use crate::config::RuleSetKind;
use crate::models::Report;
use crate::parse::{MarkupExtractor, PatternExtractor};

// Re-export public API
pub use checks::{evaluator, Evaluator, RuleSet};
pub use score::{compute_score, score_label};

/// Evaluates markup against a rule set.
pub struct Auditor {
    rules: RuleSet,
    extractor: Box<dyn MarkupExtractor + Send + Sync>,
}

impl Auditor {
    /// Creates an auditor using the pattern-based extractor.
    pub fn new(rules: RuleSet) -> Self {
        Self::with_extractor(rules, PatternExtractor)
    }

    pub fn with_extractor<E>(rules: RuleSet, extractor: E) -> Self
    where
        E: MarkupExtractor + Send + Sync + 'static,
    {
        Self {
            rules,
            extractor: Box::new(extractor),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Builds the report for `markup` fetched from `url`.
    ///
    /// Never fails: empty or malformed markup yields a report full of
    /// `Missing` findings.
    pub fn analyze(&self, url: &NormalizedUrl, markup: &str) -> Report {
        let features = self.extractor.extract(markup);
        let findings = self.rules.evaluate(&features);
        let score = self.rules.scoring().then(|| compute_score(&features));
        let report = Report::new(url.clone(), findings, score, features);
        debug!(
            "Analyzed {} ({} bytes): {} findings, critical={}",
            url,
            markup.len(),
            report.findings().len(),
            report.critical()
        );
        report
    }
}

impl Default for Auditor {
    fn default() -> Self {
        Self::new(RuleSet::standard())
    }
}

impl From<RuleSetKind> for Auditor {
    fn from(kind: RuleSetKind) -> Self {
        Self::new(RuleSet::from(kind))
    }
}

impl fmt::Debug for Auditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auditor")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

/// Analyzes `markup` with the standard rule set and the pattern extractor.
pub fn analyze(url: &NormalizedUrl, markup: &str) -> Report {
    Auditor::default().analyze(url, markup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::normalize;
    use crate::models::{CheckName, Status, OVERVIEW_ISSUES, OVERVIEW_SUCCESS};
    use crate::parse::DomExtractor;

    fn url() -> NormalizedUrl {
        normalize("https://example.com").unwrap()
    }

    fn page(words: usize) -> String {
        let body = vec!["word"; words].join(" ");
        format!(
            r#"<html><head>
            <title>Good title</title>
            <meta name="description" content="{}">
            <link rel="canonical" href="https://example.com/">
            </head><body><h1>Heading</h1><p>{}</p></body></html>"#,
            "d".repeat(150),
            body
        )
    }

    #[test]
    fn test_short_title_only_page() {
        let report = analyze(&url(), "<title>Short</title>");
        let statuses: Vec<(CheckName, Status)> = report
            .findings()
            .iter()
            .map(|f| (f.name(), f.status()))
            .collect();
        assert_eq!(
            statuses,
            vec![
                (CheckName::TitleTag, Status::Good),
                (CheckName::MetaDescription, Status::Missing),
                (CheckName::H1Structure, Status::Missing),
                (CheckName::WordCount, Status::Thin),
                (CheckName::CanonicalUrl, Status::Missing),
            ]
        );
        assert!(report.critical());
        assert_eq!(report.overview(), OVERVIEW_ISSUES);
        assert!(report.escalation().is_some());
        assert_eq!(report.score(), None);
    }

    #[test]
    fn test_empty_markup_is_all_missing() {
        let report = analyze(&url(), "");
        assert_eq!(report.word_count(), 0);
        assert_eq!(
            report.finding(CheckName::TitleTag).map(|f| f.status()),
            Some(Status::Missing)
        );
        assert_eq!(
            report.finding(CheckName::WordCount).map(|f| f.status()),
            Some(Status::Thin)
        );
    }

    #[test]
    fn test_well_formed_long_page_is_not_critical() {
        // "Good title" + "Heading" + 800 body words
        let report = analyze(&url(), &page(797));
        assert_eq!(report.word_count(), 800);
        assert!(!report.critical());
        assert_eq!(report.overview(), OVERVIEW_SUCCESS);
        assert!(report
            .findings()
            .iter()
            .all(|f| f.status() == Status::Good));
        assert!(report.action_items().is_empty());
    }

    #[test]
    fn test_word_count_boundary() {
        let thin = analyze(&url(), &page(796));
        assert_eq!(thin.word_count(), 799);
        assert!(thin.critical());
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let markup = page(40);
        assert_eq!(analyze(&url(), &markup), analyze(&url(), &markup));
    }

    #[test]
    fn test_extended_rules_add_checks_and_score() {
        let auditor = Auditor::from(RuleSetKind::Extended);
        let report = auditor.analyze(&url(), &page(10));
        assert_eq!(report.findings().len(), 8);
        // Title partial (10 chars) + meta 150 + canonical + single h1
        assert_eq!(report.score(), Some(12 + 25 + 12 + 12));
        assert_eq!(report.score_label(), Some("Needs Work"));
        assert_eq!(
            report.finding(CheckName::Viewport).map(|f| f.status()),
            Some(Status::Missing)
        );
    }

    #[test]
    fn test_dom_extractor_auditor_matches_default() {
        let markup = page(25);
        let dom = Auditor::with_extractor(RuleSet::standard(), DomExtractor);
        assert_eq!(dom.analyze(&url(), &markup), analyze(&url(), &markup));
    }

    #[test]
    fn test_critical_iff_missing_or_thin() {
        let pages = [
            String::new(),
            "<title>x</title>".to_string(),
            page(5),
            page(900),
        ];
        for markup in &pages {
            let report = analyze(&url(), markup);
            let expected = report
                .findings()
                .iter()
                .any(|f| matches!(f.status(), Status::Missing | Status::Thin));
            assert_eq!(report.critical(), expected);
        }
    }
}
