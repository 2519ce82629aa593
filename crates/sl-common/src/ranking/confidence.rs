use serde::{Deserialize, Serialize};

use crate::PlatformKind;

pub const MIN_CONFIDENCE: f64 = 0.70;
pub const MAX_CONFIDENCE: f64 = 1.00;

/// Qualitative confidence in a score, driven purely by how many platforms
/// contributed evidence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
pub enum ConfidenceLevel {
    High,
    Good,
    Moderate,
    Low,
    None,
}

impl ConfidenceLevel {
    pub fn for_platform_count(available: usize) -> Self {
        match available {
            0 => ConfidenceLevel::None,
            1 => ConfidenceLevel::Low,
            2 => ConfidenceLevel::Moderate,
            3 | 4 => ConfidenceLevel::Good,
            _ => ConfidenceLevel::High,
        }
    }

    /// Symmetric error margin around the final score.
    pub fn margin(&self) -> f64 {
        match self {
            ConfidenceLevel::High => 3.0,
            ConfidenceLevel::Good => 5.0,
            ConfidenceLevel::Moderate => 8.0,
            ConfidenceLevel::Low => 12.0,
            ConfidenceLevel::None => 0.0,
        }
    }
}

/// Fraction of the six platforms present.
pub fn completeness(available: usize) -> f64 {
    available as f64 / PlatformKind::COUNT as f64
}

/// Confidence multiplier: `0.70 + 0.30 · completeness`.
pub fn confidence_for(available: usize) -> f64 {
    MIN_CONFIDENCE + (MAX_CONFIDENCE - MIN_CONFIDENCE) * completeness(available)
}

/// Interval around the final score, clipped to the score range.
pub fn confidence_interval(score: f64, level: ConfidenceLevel) -> (f64, f64) {
    let margin = level.margin();
    ((score - margin).max(0.0), (score + margin).min(100.0))
}
