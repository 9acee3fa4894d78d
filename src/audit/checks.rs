//! Check evaluation and rule sets.
//!
//! Every [`CheckName`] maps to one evaluation function from a [`FeatureSet`] to
//! a [`Finding`]. A [`RuleSet`] is the set of enabled checks plus the scoring
//! switch.

use crate::config::{
    RuleSetKind, META_DESCRIPTION_MAX, META_DESCRIPTION_MIN, MIN_WORD_COUNT, TITLE_LENGTH_MAX,
};
use crate::models::{CheckName, Finding, Status};
use crate::parse::FeatureSet;

/// Evaluation function for a single check.
pub type Evaluator = fn(&FeatureSet) -> Finding;

/// Returns the evaluation function for `check`.
pub fn evaluator(check: CheckName) -> Evaluator {
    match check {
        CheckName::TitleTag => evaluate_title,
        CheckName::MetaDescription => evaluate_meta_description,
        CheckName::H1Structure => evaluate_h1,
        CheckName::WordCount => evaluate_word_count,
        CheckName::CanonicalUrl => evaluate_canonical,
        CheckName::Viewport => evaluate_viewport,
        CheckName::SocialTags => evaluate_social_tags,
        CheckName::ImageAltText => evaluate_image_alt,
    }
}

fn evaluate_title(features: &FeatureSet) -> Finding {
    let name = CheckName::TitleTag;
    match features.title.as_deref().map(|t| t.chars().count()) {
        None => Finding::new(
            name,
            Status::Missing,
            "Add a clear, descriptive title that includes your primary keyword.",
        ),
        Some(len) if len > TITLE_LENGTH_MAX => Finding::new(
            name,
            Status::NeedsImprovement,
            format!(
                "Your title is {len} characters. Shorten it to {TITLE_LENGTH_MAX} or fewer and \
                 keep your primary keyword near the beginning."
            ),
        ),
        Some(_) => Finding::new(
            name,
            Status::Good,
            "Your title length looks good. Make sure it includes your primary keyword and a strong benefit.",
        ),
    }
}

fn evaluate_meta_description(features: &FeatureSet) -> Finding {
    let name = CheckName::MetaDescription;
    match features.meta_description.as_deref().map(|d| d.chars().count()) {
        None => Finding::new(
            name,
            Status::Missing,
            format!(
                "Add a {META_DESCRIPTION_MIN}–{META_DESCRIPTION_MAX} character meta description \
                 with your primary keyword and a clear call to action."
            ),
        ),
        Some(len) if !(META_DESCRIPTION_MIN..=META_DESCRIPTION_MAX).contains(&len) => {
            Finding::new(
                name,
                Status::NeedsImprovement,
                format!(
                    "Your meta description is {len} characters. Adjust it to between \
                     {META_DESCRIPTION_MIN} and {META_DESCRIPTION_MAX} characters."
                ),
            )
        }
        Some(_) => Finding::new(
            name,
            Status::Good,
            "Your meta description length looks good. Make sure it explains the page and invites clicks.",
        ),
    }
}

fn evaluate_h1(features: &FeatureSet) -> Finding {
    let name = CheckName::H1Structure;
    match features.h1_count {
        0 => Finding::new(
            name,
            Status::Missing,
            "Add a single H1 headline that clearly describes the main topic of the page.",
        ),
        1 => Finding::new(
            name,
            Status::Good,
            "Your H1 usage looks good. Ensure it includes your main keyword and speaks to user intent.",
        ),
        count => Finding::new(
            name,
            Status::NeedsImprovement,
            format!(
                "Found {count} H1 tags. Use only one H1 per page and move the others to H2 or H3."
            ),
        ),
    }
}

fn evaluate_word_count(features: &FeatureSet) -> Finding {
    let name = CheckName::WordCount;
    let words = features.word_count;
    if words < MIN_WORD_COUNT {
        Finding::new(
            name,
            Status::Thin,
            format!(
                "Your page has about {words} words. Aim for at least {MIN_WORD_COUNT} \
                 high-quality, relevant words to compete in organic search."
            ),
        )
    } else {
        Finding::new(
            name,
            Status::Good,
            format!(
                "Your content length ({words} words) is strong. Focus on clarity, structure, and keyword alignment."
            ),
        )
    }
}

fn evaluate_canonical(features: &FeatureSet) -> Finding {
    let name = CheckName::CanonicalUrl;
    if features.has_canonical {
        Finding::new(
            name,
            Status::Good,
            "Canonical tag found. Ensure it points to the preferred version of this page.",
        )
    } else {
        Finding::new(
            name,
            Status::Missing,
            "Add a canonical link tag to avoid duplicate content issues and name the preferred URL.",
        )
    }
}

fn evaluate_viewport(features: &FeatureSet) -> Finding {
    let name = CheckName::Viewport;
    if features.has_viewport {
        Finding::new(name, Status::Good, "Viewport meta tag present.")
    } else {
        Finding::new(
            name,
            Status::Missing,
            "Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"> so the page renders on mobile.",
        )
    }
}

fn evaluate_social_tags(features: &FeatureSet) -> Finding {
    let name = CheckName::SocialTags;
    if features.has_social_tags {
        Finding::new(name, Status::Good, "Social sharing tags present.")
    } else {
        Finding::new(
            name,
            Status::Missing,
            "Add OpenGraph and Twitter card tags for cleaner sharing and higher trust.",
        )
    }
}

fn evaluate_image_alt(features: &FeatureSet) -> Finding {
    let name = CheckName::ImageAltText;
    let info = features.image_alt;
    if info.missing_alt > 0 {
        Finding::new(
            name,
            Status::NeedsImprovement,
            format!(
                "{} of {} images have no alt text. Describe each meaningful image in its alt attribute.",
                info.missing_alt, info.total
            ),
        )
    } else if info.total == 0 {
        Finding::new(name, Status::Good, "No images found.")
    } else {
        Finding::new(name, Status::Good, "Every image has alt text.")
    }
}

/// The enabled checks and whether a score is computed.
///
/// Checks always run in [`CheckName`] declaration order, whatever order they
/// were supplied in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    checks: Vec<CheckName>,
    scoring: bool,
}

impl RuleSet {
    pub fn new(checks: impl IntoIterator<Item = CheckName>, scoring: bool) -> Self {
        let mut checks: Vec<CheckName> = checks.into_iter().collect();
        checks.sort();
        checks.dedup();
        Self { checks, scoring }
    }

    /// Title, meta description, H1, word count and canonical; no score.
    pub fn standard() -> Self {
        Self::new(
            [
                CheckName::TitleTag,
                CheckName::MetaDescription,
                CheckName::H1Structure,
                CheckName::WordCount,
                CheckName::CanonicalUrl,
            ],
            false,
        )
    }

    /// Every check, with scoring.
    pub fn extended() -> Self {
        use strum::IntoEnumIterator;
        Self::new(CheckName::iter(), true)
    }

    pub fn checks(&self) -> &[CheckName] {
        &self.checks
    }

    pub fn scoring(&self) -> bool {
        self.scoring
    }

    pub fn is_enabled(&self, check: CheckName) -> bool {
        self.checks.contains(&check)
    }

    /// Evaluates every enabled check.
    pub fn evaluate(&self, features: &FeatureSet) -> Vec<Finding> {
        self.checks
            .iter()
            .map(|check| evaluator(*check)(features))
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<RuleSetKind> for RuleSet {
    fn from(kind: RuleSetKind) -> Self {
        match kind {
            RuleSetKind::Standard => Self::standard(),
            RuleSetKind::Extended => Self::extended(),
        }
    }
}
