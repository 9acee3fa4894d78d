//! Advisory 0–100 score.
//!
//! The score is derived from the same features as the findings but never
//! changes a finding's status.

use crate::config::{
    SCORE_CANONICAL_WEIGHT, SCORE_KEYWORDS, SCORE_KEYWORD_BONUS, SCORE_MAX, SCORE_META_RANGE,
    SCORE_META_WEIGHT, SCORE_MULTIPLE_H1_WEIGHT, SCORE_PARTIAL_WEIGHT, SCORE_SINGLE_H1_WEIGHT,
    SCORE_SOCIAL_WEIGHT, SCORE_TITLE_RANGE, SCORE_TITLE_WEIGHT, SCORE_VIEWPORT_WEIGHT,
};
use crate::parse::FeatureSet;

fn length_credit(text: Option<&str>, (min, max): (usize, usize), full: u32) -> u32 {
    match text.map(|t| t.chars().count()) {
        Some(len) if (min..=max).contains(&len) => full,
        Some(_) => SCORE_PARTIAL_WEIGHT,
        None => 0,
    }
}

fn has_keyword(text: Option<&str>) -> bool {
    text.is_some_and(|t| {
        let lower = t.to_lowercase();
        SCORE_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
    })
}

/// Computes the weighted score, capped at 100.
pub fn compute_score(features: &FeatureSet) -> u8 {
    let title = features.title.as_deref();
    let description = features.meta_description.as_deref();

    let mut score = length_credit(title, SCORE_TITLE_RANGE, SCORE_TITLE_WEIGHT)
        + length_credit(description, SCORE_META_RANGE, SCORE_META_WEIGHT);

    if features.has_canonical {
        score += SCORE_CANONICAL_WEIGHT;
    }
    score += match features.h1_count {
        0 => 0,
        1 => SCORE_SINGLE_H1_WEIGHT,
        _ => SCORE_MULTIPLE_H1_WEIGHT,
    };
    if features.has_viewport {
        score += SCORE_VIEWPORT_WEIGHT;
    }
    if features.has_social_tags {
        score += SCORE_SOCIAL_WEIGHT;
    }
    if has_keyword(title) {
        score += SCORE_KEYWORD_BONUS;
    }
    if has_keyword(description) {
        score += SCORE_KEYWORD_BONUS;
    }

    // Capped at SCORE_MAX (100), so the cast cannot truncate
    score.min(SCORE_MAX) as u8
}

/// Human label for a score.
pub fn score_label(score: u8) -> &'static str {
    match score {
        85.. => "Strong",
        65..=84 => "Decent",
        45..=64 => "Needs Work",
        _ => "Critical",
    }
}
