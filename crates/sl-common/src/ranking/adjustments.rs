use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::PlatformKind;

/// Platform score above which a platform counts as a strength that can
/// compensate for weakness elsewhere.
pub const STRONG_SCORE: f64 = 70.0;
/// Platform score below which a present platform counts as weak.
pub const WEAK_SCORE: f64 = 50.0;
/// Candidates with fewer platforms than this draw the incomplete-data penalty.
pub const RECOMMENDED_PLATFORMS: usize = 2;

/// Numeric contribution of each adjustment category, kept for auditability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AdjustmentBreakdown {
    /// Delta applied by the confidence multiplier (zero or negative).
    pub confidence: f64,
    pub bonuses: f64,
    pub compensatory: f64,
    pub penalties: f64,
}

fn score_of(scores: &BTreeMap<PlatformKind, f64>, kind: PlatformKind) -> f64 {
    scores.get(&kind).copied().unwrap_or(0.0)
}

/// Bonuses for good platform combinations, evaluated on availability alone.
pub fn availability_bonuses(available: &BTreeSet<PlatformKind>) -> (f64, Vec<String>) {
    let mut bonus = 0.0;
    let mut notes = Vec::new();

    if available.contains(&PlatformKind::Resume) {
        bonus += 5.0;
        notes.push("+5 for having resume".to_string());
    }

    let has_coding_site = available.contains(&PlatformKind::Leetcode)
        || available.contains(&PlatformKind::Codeforces);
    if available.contains(&PlatformKind::Github) && has_coding_site {
        bonus += 3.0;
        notes.push("+3 for GitHub + coding platform".to_string());
    }

    if available.contains(&PlatformKind::Resume) && available.contains(&PlatformKind::Linkedin) {
        bonus += 2.0;
        notes.push("+2 for complete professional profile".to_string());
    }

    (bonus, notes)
}

/// Bonuses rewarding a strong platform that offsets a specific weak or
/// missing one. A missing platform satisfies the weak side of a rule but can
/// never be the strong side (its score reads as 0).
pub fn compensatory_bonuses(
    available: &BTreeSet<PlatformKind>,
    scores: &BTreeMap<PlatformKind, f64>,
) -> (f64, Vec<String>) {
    let mut bonus = 0.0;
    let mut notes = Vec::new();

    let github = score_of(scores, PlatformKind::Github);
    if github > STRONG_SCORE {
        if !available.contains(&PlatformKind::Leetcode)
            || score_of(scores, PlatformKind::Leetcode) < WEAK_SCORE
        {
            bonus += 5.0;
            notes.push("+5 strong GitHub compensates for LeetCode".to_string());
        }
        if !available.contains(&PlatformKind::Codeforces)
            || score_of(scores, PlatformKind::Codeforces) < WEAK_SCORE
        {
            bonus += 3.0;
            notes.push("+3 strong GitHub compensates for Codeforces".to_string());
        }
    }

    if score_of(scores, PlatformKind::Resume) > STRONG_SCORE
        && !available.contains(&PlatformKind::Linkedin)
    {
        bonus += 3.0;
        notes.push("+3 strong resume compensates for LinkedIn".to_string());
    }

    // Average over the positive coding-site scores only; a site scoring zero
    // does not drag the average, and no positive score means no compensation.
    let coding: Vec<f64> = [PlatformKind::Leetcode, PlatformKind::Codeforces]
        .iter()
        .map(|kind| score_of(scores, *kind))
        .filter(|score| *score > 0.0)
        .collect();
    if !coding.is_empty() {
        let avg = coding.iter().sum::<f64>() / coding.len() as f64;
        if avg > STRONG_SCORE && github < WEAK_SCORE {
            bonus += 4.0;
            notes.push("+4 strong coding platforms compensate for GitHub".to_string());
        }
    }

    (bonus, notes)
}

/// Penalties for insufficient data. The -5 critical-platform penalty overlaps
/// with the hard minimum-data gate but is kept as an independent check.
pub fn data_penalties(available: &BTreeSet<PlatformKind>) -> (f64, Vec<String>) {
    let mut penalty = 0.0;
    let mut notes = Vec::new();

    if available.len() < RECOMMENDED_PLATFORMS {
        penalty += 10.0;
        notes.push(format!(
            "-10 for having only {} platform(s)",
            available.len()
        ));
    }

    if !available.contains(&PlatformKind::Resume) && !available.contains(&PlatformKind::Github) {
        penalty += 5.0;
        notes.push("-5 for missing both resume and GitHub".to_string());
    }

    (penalty, notes)
}
