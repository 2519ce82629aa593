pub mod adjustments;
pub mod assemble;
pub mod confidence;
pub mod pipeline;
pub mod weights;

pub use pipeline::{CandidateScoreResult, RankedCandidate, RankingEngine};
pub use weights::ScoringWeights;
