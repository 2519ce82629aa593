use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;
use thiserror::Error;
use tracing::{info, warn};

use sl_common::error::ConfigError;
use sl_common::ranking::{RankingEngine, ScoringWeights};
use sl_common::report::RankingReport;
use sl_common::{CandidateProfile, JobRequirements};

#[derive(Debug, Parser)]
#[command(
    name = "shortlist",
    about = "Rank job candidates from normalized per-platform attribute records"
)]
struct Cli {
    /// Directory of candidate profile JSON files (one candidate per file)
    #[arg(long, env = "SL_CANDIDATES_DIR", default_value = "data/candidates")]
    candidates_dir: PathBuf,

    /// Job requirements JSON file; defaults apply when omitted
    #[arg(long, env = "SL_JOB_FILE")]
    job: Option<PathBuf>,

    /// Scoring weights JSON file; stock weights apply when omitted
    #[arg(long, env = "SL_WEIGHTS_FILE")]
    weights: Option<PathBuf>,

    /// Keep only the top N candidates in the report
    #[arg(long)]
    top: Option<usize>,

    /// Where the JSON ranking report is written
    #[arg(long, default_value = "adaptive_ranking_report.json")]
    output: PathBuf,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn main() -> ExitCode {
    dotenv().ok();
    sl_common::logging::init_tracing("shortlist");

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "ranking run failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let requirements: JobRequirements = match &cli.job {
        Some(path) => read_json(path)?,
        None => JobRequirements::default(),
    };
    let weights: ScoringWeights = match &cli.weights {
        Some(path) => read_json(path)?,
        None => ScoringWeights::default(),
    };

    let engine = RankingEngine::new(weights, requirements)?;
    let profiles = load_profiles(&cli.candidates_dir)?;
    info!(
        candidates = profiles.len(),
        dir = %cli.candidates_dir.display(),
        "loaded candidate profiles"
    );

    let ranked = engine.rank(&profiles, cli.top);
    for entry in &ranked {
        info!(
            rank = entry.rank,
            candidate = %entry.result.candidate_id,
            final_score = format_args!("{:.2}", entry.result.final_score),
            confidence_level = %entry.result.confidence_level,
            "ranked candidate"
        );
    }

    let report = RankingReport::new(engine.weights(), &ranked);
    let json = serde_json::to_string_pretty(&report)?;
    fs::write(&cli.output, json).map_err(|source| CliError::Write {
        path: cli.output.clone(),
        source,
    })?;
    info!(report = %cli.output.display(), "wrote ranking report");

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every `*.json` profile in the directory. A file that fails to parse
/// is logged and skipped; one bad candidate never aborts the batch.
fn load_profiles(dir: &Path) -> Result<Vec<CandidateProfile>, CliError> {
    let entries = fs::read_dir(dir).map_err(|source| CliError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut profiles = Vec::with_capacity(paths.len());
    for path in paths {
        match read_json::<CandidateProfile>(&path) {
            Ok(mut profile) => {
                if profile.id.is_empty() {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        profile.id = stem.to_string();
                    }
                }
                profiles.push(profile);
            }
            Err(err) => {
                warn!(file = %path.display(), error = %err, "skipping unreadable candidate file");
            }
        }
    }

    Ok(profiles)
}
