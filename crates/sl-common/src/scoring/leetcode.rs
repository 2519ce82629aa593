use super::clamp_score;
use crate::LeetcodeAttributes;

/// Solved-problem count at which the volume component maxes out.
const MAX_SOLVED: f64 = 500.0;

/// Global-ranking tiers, best first. Lower ranking is better, so the bound is
/// exclusive: ranking below the limit earns the points.
const RANKING_TIERS: &[(u64, f64)] = &[
    (100_000, 10.0),
    (500_000, 7.0),
    (1_000_000, 5.0),
    (2_000_000, 3.0),
];

/// LeetCode profile score: solved 50, difficulty mix 30, acceptance 10,
/// global ranking 10.
pub fn score(lc: &LeetcodeAttributes) -> f64 {
    let mut score = 0.0;

    score += (lc.total_solved as f64 / MAX_SOLVED * 50.0).min(50.0);

    let difficulty_weighted =
        (lc.easy_solved as f64 + lc.medium_solved as f64 * 2.0 + lc.hard_solved as f64 * 3.0) / 6.0;
    score += (difficulty_weighted / 200.0 * 30.0).min(30.0);

    score += (lc.acceptance_rate / 100.0 * 10.0).min(10.0);

    if let Some(ranking) = lc.ranking {
        score += RANKING_TIERS
            .iter()
            .find(|(limit, _)| ranking < *limit)
            .map(|(_, points)| *points)
            .unwrap_or(0.0);
    }

    clamp_score(score)
}
