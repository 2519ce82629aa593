use thiserror::Error;

use crate::PlatformKind;

/// Fatal configuration problems, rejected at load time so they never reach
/// per-candidate scoring.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("scoring weights must sum to 1.0, got {0}")]
    WeightSum(f64),
    #[error("negative weight {value} configured for {platform}")]
    NegativeWeight { platform: PlatformKind, value: f64 },
}

/// Per-candidate weight redistribution failure. Never aborts a batch; the
/// pipeline converts it into the insufficient-data result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeightError {
    #[error("no available platform carries usable configured weight")]
    NoUsableData,
}
