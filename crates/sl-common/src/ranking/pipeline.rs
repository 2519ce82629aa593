use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::error::ConfigError;
use crate::ranking::adjustments::{
    availability_bonuses, compensatory_bonuses, data_penalties, AdjustmentBreakdown,
};
use crate::ranking::assemble;
use crate::ranking::confidence::{
    completeness, confidence_for, confidence_interval, ConfidenceLevel,
};
use crate::ranking::weights::ScoringWeights;
use crate::scoring::{score_platform, PlatformScore};
use crate::{CandidateProfile, JobRequirements, PlatformKind};

/// Fully assembled scoring outcome for one candidate. Built once per ranking
/// request and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateScoreResult {
    pub candidate_id: String,
    pub final_score: f64,
    pub base_score: f64,
    pub confidence: f64,
    pub confidence_level: ConfidenceLevel,
    pub confidence_interval: (f64, f64),
    pub completeness: f64,
    pub available_platforms: BTreeSet<PlatformKind>,
    pub missing_platforms: BTreeSet<PlatformKind>,
    pub platform_scores: Vec<PlatformScore>,
    pub adjusted_weights: BTreeMap<PlatformKind, f64>,
    pub adjustments: AdjustmentBreakdown,
    pub adjustment_notes: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendation: String,
}

impl CandidateScoreResult {
    /// Terminal result for candidates rejected by the minimum-data gate or
    /// carrying no usable configured weight.
    fn insufficient(
        candidate_id: String,
        available: BTreeSet<PlatformKind>,
        missing: BTreeSet<PlatformKind>,
        reason: &str,
    ) -> Self {
        Self {
            candidate_id,
            final_score: 0.0,
            base_score: 0.0,
            confidence: 0.0,
            confidence_level: ConfidenceLevel::None,
            confidence_interval: (0.0, 0.0),
            completeness: 0.0,
            available_platforms: available,
            missing_platforms: missing,
            platform_scores: Vec::new(),
            adjusted_weights: BTreeMap::new(),
            adjustments: AdjustmentBreakdown::default(),
            adjustment_notes: Vec::new(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            warnings: vec![format!("Insufficient data: {reason}")],
            recommendation: String::new(),
        }
    }
}

/// One slot in a finished ranking.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    /// 1-based position.
    pub rank: usize,
    pub result: CandidateScoreResult,
}

/// The adaptive ranking engine: immutable weights and job context shared by
/// every candidate scored under one request. Scoring is pure and stateless,
/// so a batch fans out across worker threads with no coordination.
pub struct RankingEngine {
    weights: ScoringWeights,
    requirements: JobRequirements,
}

impl RankingEngine {
    /// Weight validation happens here, at configuration load; bad weights
    /// never reach per-candidate scoring.
    pub fn new(weights: ScoringWeights, requirements: JobRequirements) -> Result<Self, ConfigError> {
        weights.validate()?;
        Ok(Self {
            weights,
            requirements,
        })
    }

    pub fn with_default_weights(requirements: JobRequirements) -> Self {
        Self {
            weights: ScoringWeights::default(),
            requirements,
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Run the full scoring pipeline for one candidate.
    pub fn score_candidate(&self, profile: &CandidateProfile) -> CandidateScoreResult {
        let available = profile.available_kinds();
        let missing: BTreeSet<PlatformKind> = PlatformKind::iter()
            .filter(|kind| !available.contains(kind))
            .collect();

        // Minimum-data gate: hard business rule, not a soft penalty.
        if available.is_empty() {
            return CandidateScoreResult::insufficient(
                profile.id.clone(),
                available,
                missing,
                "No data available",
            );
        }
        if !PlatformKind::CRITICAL
            .iter()
            .any(|kind| available.contains(kind))
        {
            let reason = format!(
                "Need at least one of: {}",
                PlatformKind::CRITICAL
                    .iter()
                    .map(|kind| kind.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            return CandidateScoreResult::insufficient(
                profile.id.clone(),
                available,
                missing,
                &reason,
            );
        }

        let platform_scores: Vec<PlatformScore> = profile
            .platforms
            .iter()
            .map(|attrs| score_platform(attrs, &self.requirements))
            .collect();
        let score_map: BTreeMap<PlatformKind, f64> = platform_scores
            .iter()
            .map(|score| (score.kind, score.value))
            .collect();

        let adjusted_weights = match self.weights.redistribute(&available) {
            Ok(weights) => weights,
            Err(err) => {
                debug!(candidate = %profile.id, error = %err, "candidate has no usable weight");
                return CandidateScoreResult::insufficient(
                    profile.id.clone(),
                    available,
                    missing,
                    "Available platforms carry no configured weight",
                );
            }
        };

        let base_score: f64 = adjusted_weights
            .iter()
            .map(|(kind, weight)| score_map.get(kind).copied().unwrap_or(0.0) * weight)
            .sum();

        let confidence = confidence_for(available.len());
        let confidence_level = ConfidenceLevel::for_platform_count(available.len());

        let confidence_adjusted = base_score * confidence;
        let confidence_delta = confidence_adjusted - base_score;

        let (bonuses, bonus_notes) = availability_bonuses(&available);
        let (compensatory, compensatory_notes) = compensatory_bonuses(&available, &score_map);
        let (penalties, penalty_notes) = data_penalties(&available);

        let final_score =
            (confidence_adjusted + bonuses + compensatory - penalties).clamp(0.0, 100.0);

        let mut adjustment_notes = bonus_notes;
        adjustment_notes.extend(compensatory_notes);
        adjustment_notes.extend(penalty_notes);

        CandidateScoreResult {
            candidate_id: profile.id.clone(),
            final_score,
            base_score,
            confidence,
            confidence_level,
            confidence_interval: confidence_interval(final_score, confidence_level),
            completeness: completeness(available.len()),
            available_platforms: available.clone(),
            missing_platforms: missing.clone(),
            platform_scores,
            adjusted_weights,
            adjustments: AdjustmentBreakdown {
                confidence: confidence_delta,
                bonuses,
                compensatory,
                penalties,
            },
            adjustment_notes,
            strengths: assemble::strengths(&score_map),
            weaknesses: assemble::weaknesses(&score_map),
            warnings: assemble::warnings(&available, &missing, confidence_level),
            recommendation: assemble::recommendation(final_score, confidence_level),
        }
    }

    /// Score a batch of candidates independently and return a stable ranking:
    /// final score descending, candidate id ascending on ties, truncated to
    /// `top` when requested.
    pub fn rank(
        &self,
        profiles: &[CandidateProfile],
        top: Option<usize>,
    ) -> Vec<RankedCandidate> {
        let mut results: Vec<CandidateScoreResult> = profiles
            .par_iter()
            .map(|profile| self.score_candidate(profile))
            .collect();

        results.sort_by(|a, b| {
            match b
                .final_score
                .partial_cmp(&a.final_score)
                .unwrap_or(Ordering::Equal)
            {
                Ordering::Equal => a.candidate_id.cmp(&b.candidate_id),
                other => other,
            }
        });

        if let Some(top) = top {
            results.truncate(top);
        }

        results
            .into_iter()
            .enumerate()
            .map(|(index, result)| RankedCandidate {
                rank: index + 1,
                result,
            })
            .collect()
    }
}
