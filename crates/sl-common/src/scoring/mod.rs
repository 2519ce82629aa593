pub mod assessment;
pub mod codeforces;
pub mod github;
pub mod leetcode;
pub mod linkedin;
pub mod resume;

use serde::Serialize;

use crate::{JobRequirements, PlatformAttributes, PlatformKind};

/// A platform's 0-100 score for one (candidate, platform, job) triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlatformScore {
    pub kind: PlatformKind,
    pub value: f64,
}

/// Score one platform's attribute record against the job context.
pub fn score_platform(attrs: &PlatformAttributes, job: &JobRequirements) -> PlatformScore {
    let value = match attrs {
        PlatformAttributes::Codeforces(cf) => codeforces::score(cf),
        PlatformAttributes::Leetcode(lc) => leetcode::score(lc),
        PlatformAttributes::Github(gh) => github::score(gh, job),
        PlatformAttributes::Linkedin(li) => linkedin::score(li, job),
        PlatformAttributes::Resume(re) => resume::score(re, job),
        PlatformAttributes::Assessment(a) => assessment::score(a),
    };
    PlatformScore {
        kind: attrs.kind(),
        value,
    }
}

/// Ordered tier lookup: thresholds sorted highest-first, first threshold the
/// value meets wins, `fallback` otherwise.
pub(crate) fn lookup_tier(table: &[(f64, f64)], value: f64, fallback: f64) -> f64 {
    table
        .iter()
        .find(|(min, _)| value >= *min)
        .map(|(_, points)| *points)
        .unwrap_or(fallback)
}

/// Every scorer clamps its own output even if sub-score rounding overshoots.
pub(crate) fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}
