use super::clamp_score;
use crate::CodeforcesAttributes;

/// Legendary Grandmaster threshold; ratings above it no longer add points.
const MAX_RATING: f64 = 3500.0;
/// Contest count at which participation points max out.
const MAX_CONTESTS: f64 = 100.0;

const RANK_TIER_POINTS: &[(&str, f64)] = &[
    ("legendary grandmaster", 20.0),
    ("international grandmaster", 18.0),
    ("grandmaster", 16.0),
    ("international master", 14.0),
    ("master", 12.0),
    ("candidate master", 10.0),
    ("expert", 8.0),
    ("specialist", 6.0),
    ("pupil", 4.0),
    ("newbie", 2.0),
];

/// Codeforces profile score: rating 40, contests 30, rank tier 20,
/// contribution 10.
pub fn score(cf: &CodeforcesAttributes) -> f64 {
    let mut score = 0.0;

    score += (cf.rating as f64 / MAX_RATING * 40.0).min(40.0);
    score += (cf.contests_participated as f64 / MAX_CONTESTS * 30.0).min(30.0);
    score += rank_tier_points(cf.rank.as_deref());
    score += (cf.contribution as f64 / 10.0).clamp(0.0, 10.0);

    clamp_score(score)
}

fn rank_tier_points(rank: Option<&str>) -> f64 {
    let Some(rank) = rank else { return 0.0 };
    let rank = rank.trim().to_lowercase();
    RANK_TIER_POINTS
        .iter()
        .find(|(name, _)| *name == rank)
        .map(|(_, points)| *points)
        .unwrap_or(0.0)
}
