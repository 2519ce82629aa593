use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::error::{ConfigError, WeightError};
use crate::PlatformKind;

/// Stock weights, mirroring how hiring teams weigh the platforms by default.
pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    codeforces: 0.15,
    leetcode: 0.20,
    github: 0.25,
    linkedin: 0.15,
    resume: 0.15,
    assessment: 0.10,
};

/// Tolerance for the sum-to-one validation.
const SUM_TOLERANCE: f64 = 1e-5;

/// Configured per-platform weights. Must sum to 1.0 over all six platforms;
/// validated once at configuration load, never at score time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub codeforces: f64,
    pub leetcode: f64,
    pub github: f64,
    pub linkedin: f64,
    pub resume: f64,
    pub assessment: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl ScoringWeights {
    pub fn weight_for(&self, kind: PlatformKind) -> f64 {
        match kind {
            PlatformKind::Codeforces => self.codeforces,
            PlatformKind::Leetcode => self.leetcode,
            PlatformKind::Github => self.github,
            PlatformKind::Linkedin => self.linkedin,
            PlatformKind::Resume => self.resume,
            PlatformKind::Assessment => self.assessment,
        }
    }

    pub fn sum(&self) -> f64 {
        PlatformKind::iter().map(|kind| self.weight_for(kind)).sum()
    }

    /// Reject configurations that must never reach per-candidate scoring.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in PlatformKind::iter() {
            let value = self.weight_for(kind);
            if value < 0.0 {
                return Err(ConfigError::NegativeWeight {
                    platform: kind,
                    value,
                });
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(ConfigError::WeightSum(sum));
        }
        Ok(())
    }

    /// Rescale the configured weights so they sum to 1.0 over only the
    /// platforms that actually have data. Missing platforms get no entry.
    pub fn redistribute(
        &self,
        available: &BTreeSet<PlatformKind>,
    ) -> Result<BTreeMap<PlatformKind, f64>, WeightError> {
        if available.is_empty() {
            return Err(WeightError::NoUsableData);
        }

        let total: f64 = available.iter().map(|kind| self.weight_for(*kind)).sum();
        if total == 0.0 {
            return Err(WeightError::NoUsableData);
        }

        Ok(available
            .iter()
            .map(|kind| (*kind, self.weight_for(*kind) / total))
            .collect())
    }
}
