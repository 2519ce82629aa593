use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ranking::adjustments::AdjustmentBreakdown;
use crate::ranking::confidence::ConfidenceLevel;
use crate::ranking::{RankedCandidate, ScoringWeights};
use crate::PlatformKind;

/// Display-facing ranking report. Numbers are rounded here for presentation;
/// all internal computation keeps full precision.
#[derive(Debug, Serialize)]
pub struct RankingReport {
    pub generated_at: DateTime<Utc>,
    pub total_candidates: usize,
    pub scoring_method: &'static str,
    pub weights_used: ScoringWeights,
    pub rankings: Vec<RankingEntry>,
}

#[derive(Debug, Serialize)]
pub struct RankingEntry {
    pub rank: usize,
    pub candidate_id: String,
    pub final_score: f64,
    pub base_score: f64,
    pub confidence: f64,
    pub confidence_level: ConfidenceLevel,
    pub confidence_interval: [f64; 2],
    /// Data completeness as a percentage of the six platforms.
    pub completeness: f64,
    pub available_platforms: Vec<PlatformKind>,
    pub missing_platforms: Vec<PlatformKind>,
    pub platform_scores: BTreeMap<PlatformKind, f64>,
    pub adjusted_weights: BTreeMap<PlatformKind, f64>,
    pub adjustments: AdjustmentBreakdown,
    pub adjustment_notes: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendation: String,
    pub warnings: Vec<String>,
}

impl RankingReport {
    pub fn new(weights: &ScoringWeights, ranked: &[RankedCandidate]) -> Self {
        Self {
            generated_at: Utc::now(),
            total_candidates: ranked.len(),
            scoring_method: "adaptive with confidence adjustment",
            weights_used: *weights,
            rankings: ranked.iter().map(RankingEntry::from_ranked).collect(),
        }
    }
}

impl RankingEntry {
    fn from_ranked(ranked: &RankedCandidate) -> Self {
        let result = &ranked.result;
        Self {
            rank: ranked.rank,
            candidate_id: result.candidate_id.clone(),
            final_score: round2(result.final_score),
            base_score: round2(result.base_score),
            confidence: round2(result.confidence),
            confidence_level: result.confidence_level,
            confidence_interval: [
                round1(result.confidence_interval.0),
                round1(result.confidence_interval.1),
            ],
            completeness: round1(result.completeness * 100.0),
            available_platforms: result.available_platforms.iter().copied().collect(),
            missing_platforms: result.missing_platforms.iter().copied().collect(),
            platform_scores: result
                .platform_scores
                .iter()
                .map(|score| (score.kind, round2(score.value)))
                .collect(),
            adjusted_weights: result
                .adjusted_weights
                .iter()
                .map(|(kind, weight)| (*kind, round3(*weight)))
                .collect(),
            adjustments: AdjustmentBreakdown {
                confidence: round2(result.adjustments.confidence),
                bonuses: round2(result.adjustments.bonuses),
                compensatory: round2(result.adjustments.compensatory),
                penalties: round2(result.adjustments.penalties),
            },
            adjustment_notes: result.adjustment_notes.clone(),
            strengths: result.strengths.clone(),
            weaknesses: result.weaknesses.clone(),
            recommendation: result.recommendation.clone(),
            warnings: result.warnings.clone(),
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::RankingEngine;
    use crate::{CandidateProfile, GithubAttributes, JobRequirements, PlatformAttributes};

    #[test]
    fn report_rounds_for_display() {
        let engine = RankingEngine::with_default_weights(JobRequirements::default());
        let profiles = vec![CandidateProfile::new(
            "rounding",
            vec![PlatformAttributes::Github(GithubAttributes {
                public_repos: 7,
                total_stars: 12,
                followers: 33,
                ..GithubAttributes::default()
            })],
        )];
        let ranked = engine.rank(&profiles, None);
        let report = RankingReport::new(engine.weights(), &ranked);

        assert_eq!(report.total_candidates, 1);
        let entry = &report.rankings[0];
        assert_eq!(entry.rank, 1);
        // weights are shown to 3 decimals and scores to 2
        for weight in entry.adjusted_weights.values() {
            assert!((weight * 1000.0).fract().abs() < 1e-9);
        }
        assert!((entry.final_score * 100.0).fract().abs() < 1e-9);
    }

    #[test]
    fn report_serializes_with_snake_case_platforms() {
        let engine = RankingEngine::with_default_weights(JobRequirements::default());
        let profiles = vec![CandidateProfile::new(
            "ser",
            vec![PlatformAttributes::Github(GithubAttributes::default())],
        )];
        let ranked = engine.rank(&profiles, None);
        let json = serde_json::to_value(RankingReport::new(engine.weights(), &ranked)).unwrap();
        let entry = &json["rankings"][0];
        assert_eq!(entry["available_platforms"][0], "github");
        assert!(entry["adjusted_weights"]["github"].is_number());
        assert_eq!(entry["confidence_level"], "Low");
    }
}
