use std::collections::{BTreeMap, BTreeSet};

use crate::ranking::confidence::ConfidenceLevel;
use crate::PlatformKind;

/// Platforms scoring at or above this are reported as strengths.
pub const STRENGTH_THRESHOLD: f64 = 70.0;
/// Scored platforms below this are reported as weaknesses.
pub const WEAKNESS_THRESHOLD: f64 = 50.0;

pub fn strengths(scores: &BTreeMap<PlatformKind, f64>) -> Vec<String> {
    scores
        .iter()
        .filter(|(_, score)| **score >= STRENGTH_THRESHOLD)
        .map(|(kind, _)| kind.label().to_string())
        .collect()
}

pub fn weaknesses(scores: &BTreeMap<PlatformKind, f64>) -> Vec<String> {
    scores
        .iter()
        .filter(|(_, score)| **score < WEAKNESS_THRESHOLD)
        .map(|(kind, _)| kind.label().to_string())
        .collect()
}

/// Data-quality warnings surfaced next to the score.
pub fn warnings(
    available: &BTreeSet<PlatformKind>,
    missing: &BTreeSet<PlatformKind>,
    level: ConfidenceLevel,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if level == ConfidenceLevel::Low {
        warnings.push(format!(
            "Low confidence: Only {} platform(s) available",
            available.len()
        ));
    }

    if missing.contains(&PlatformKind::Resume) {
        warnings.push("Missing resume - critical for evaluation".to_string());
    }

    if PlatformKind::CODING.iter().all(|kind| missing.contains(kind)) {
        warnings.push("No coding platforms - cannot assess technical skills".to_string());
    }

    if PlatformKind::PROFESSIONAL
        .iter()
        .all(|kind| missing.contains(kind))
    {
        warnings.push("No professional profile - limited background info".to_string());
    }

    if available.len() < 3 {
        warnings.push("Limited data - consider requesting more information".to_string());
    }

    warnings
}

/// Recommendation tier from final-score bands, qualified when the evidence is
/// thin.
pub fn recommendation(final_score: f64, level: ConfidenceLevel) -> String {
    let mut recommendation = if final_score >= 80.0 {
        "Highly Recommended - Strong candidate".to_string()
    } else if final_score >= 70.0 {
        "Recommended - Good candidate".to_string()
    } else if final_score >= 60.0 {
        "Consider - Decent candidate".to_string()
    } else if final_score >= 50.0 {
        "Marginal - Significant gaps".to_string()
    } else {
        "Not Recommended - Does not meet criteria".to_string()
    };

    if matches!(level, ConfidenceLevel::Low | ConfidenceLevel::Moderate) {
        recommendation.push_str(&format!(" ({level} confidence - limited data)"));
    }

    recommendation
}
