//! Audit result types: check names, statuses, findings and reports.

use std::fmt;

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

use crate::app::NormalizedUrl;
use crate::parse::FeatureSet;

/// Outcome of one check, from most to least severe: `Missing`, `Thin`,
/// `NeedsImprovement`, `Good`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, EnumIterMacro)]
pub enum Status {
    /// Element or attribute absent
    Missing,
    /// Present but insufficient (content depth only)
    Thin,
    /// Present but out of range
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Good,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Missing => "Missing",
            Status::Thin => "Thin",
            Status::NeedsImprovement => "Needs Improvement",
            Status::Good => "Good",
        }
    }

    /// `Missing` and `Thin` make a report critical.
    pub fn is_critical(&self) -> bool {
        matches!(self, Status::Missing | Status::Thin)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of checks. Declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, EnumIterMacro)]
pub enum CheckName {
    #[serde(rename = "Title Tag")]
    TitleTag,
    #[serde(rename = "Meta Description")]
    MetaDescription,
    #[serde(rename = "H1 Structure")]
    H1Structure,
    #[serde(rename = "Word Count")]
    WordCount,
    #[serde(rename = "Canonical URL")]
    CanonicalUrl,
    Viewport,
    #[serde(rename = "Social Tags")]
    SocialTags,
    #[serde(rename = "Image Alt Text")]
    ImageAltText,
}

impl CheckName {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckName::TitleTag => "Title Tag",
            CheckName::MetaDescription => "Meta Description",
            CheckName::H1Structure => "H1 Structure",
            CheckName::WordCount => "Word Count",
            CheckName::CanonicalUrl => "Canonical URL",
            CheckName::Viewport => "Viewport",
            CheckName::SocialTags => "Social Tags",
            CheckName::ImageAltText => "Image Alt Text",
        }
    }
}

impl fmt::Display for CheckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One evaluated check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    name: CheckName,
    status: Status,
    recommendation: String,
}

impl Finding {
    pub fn new(name: CheckName, status: Status, recommendation: impl Into<String>) -> Self {
        Self {
            name,
            status,
            recommendation: recommendation.into(),
        }
    }

    pub fn name(&self) -> CheckName {
        self.name
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }
}

/// Overview shown when at least one finding is `Missing` or `Thin`.
pub const OVERVIEW_ISSUES: &str = "Quick SEO overview for this URL. We found gaps in the basics that are \
likely holding this page back in search. That is common and fixable: start with anything marked \
Missing or Thin below.";

/// Overview shown when no finding is `Missing` or `Thin`.
pub const OVERVIEW_SUCCESS: &str = "Quick SEO overview for this URL. Nice work: the on-page basics \
are in place. Fine-tune anything marked Needs Improvement to squeeze out the rest.";

/// Escalation section appended to critical reports.
pub const ESCALATION_MESSAGE: &str = "Some of these gaps need hands-on work. For a deeper, \
human-run SEO review and implementation, submit this URL through Ticket Mode.";

/// The full output of one audit.
///
/// `critical` is computed once at construction; the overview text and the
/// escalation section are both derived from it, so they cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    url: NormalizedUrl,
    overview: &'static str,
    findings: Vec<Finding>,
    word_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<u8>,
    critical: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    escalation: Option<&'static str>,
    features: FeatureSet,
}

impl Report {
    pub(crate) fn new(
        url: NormalizedUrl,
        findings: Vec<Finding>,
        score: Option<u8>,
        features: FeatureSet,
    ) -> Self {
        let critical = findings.iter().any(|f| f.status().is_critical());
        let (overview, escalation) = if critical {
            (OVERVIEW_ISSUES, Some(ESCALATION_MESSAGE))
        } else {
            (OVERVIEW_SUCCESS, None)
        };
        Self {
            url,
            overview,
            findings,
            word_count: features.word_count,
            score,
            critical,
            escalation,
            features,
        }
    }

    pub fn url(&self) -> &NormalizedUrl {
        &self.url
    }

    pub fn overview(&self) -> &str {
        self.overview
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn finding(&self, name: CheckName) -> Option<&Finding> {
        self.findings.iter().find(|f| f.name() == name)
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn score(&self) -> Option<u8> {
        self.score
    }

    pub fn score_label(&self) -> Option<&'static str> {
        self.score.map(crate::audit::score_label)
    }

    pub fn critical(&self) -> bool {
        self.critical
    }

    pub fn escalation(&self) -> Option<&str> {
        self.escalation
    }

    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    /// Recommendations of every finding that is not `Good`, in report order.
    pub fn action_items(&self) -> Vec<&str> {
        self.findings
            .iter()
            .filter(|f| f.status() != Status::Good)
            .map(Finding::recommendation)
            .collect()
    }

    /// Key/value summary of the extracted features for diagnostic display.
    pub fn snapshot(&self) -> Vec<(&'static str, String)> {
        let yes_no = |flag: bool| (if flag { "Yes" } else { "No" }).to_string();
        let features = &self.features;
        vec![
            ("Title", features.title.clone().unwrap_or_else(|| "—".into())),
            (
                "Meta description",
                features
                    .meta_description
                    .clone()
                    .unwrap_or_else(|| "—".into()),
            ),
            ("Canonical", yes_no(features.has_canonical)),
            ("H1 count", features.h1_count.to_string()),
            ("Word count", features.word_count.to_string()),
            ("Viewport meta", yes_no(features.has_viewport)),
            ("OpenGraph/Twitter tags", yes_no(features.has_social_tags)),
            (
                "Images missing alt",
                format!(
                    "{} of {}",
                    features.image_alt.missing_alt, features.image_alt.total
                ),
            ),
        ]
    }

    /// Pretty-printed JSON dump of the report.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
