pub mod error;
pub mod logging;
pub mod ranking;
pub mod report;
pub mod scoring;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// The six independent evidence sources a candidate may carry data for.
///
/// Ordering follows the report column order and is used for deterministic
/// iteration wherever platform sets are walked.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PlatformKind {
    Codeforces,
    Leetcode,
    Github,
    Linkedin,
    Resume,
    Assessment,
}

impl PlatformKind {
    pub const COUNT: usize = 6;

    /// Platforms carrying baseline signal; a candidate missing all of these
    /// is rejected by the minimum-data gate.
    pub const CRITICAL: [PlatformKind; 2] = [PlatformKind::Resume, PlatformKind::Github];

    /// Platforms treated as evidence of coding ability.
    pub const CODING: [PlatformKind; 3] = [
        PlatformKind::Codeforces,
        PlatformKind::Leetcode,
        PlatformKind::Github,
    ];

    /// Platforms describing professional background.
    pub const PROFESSIONAL: [PlatformKind; 2] = [PlatformKind::Linkedin, PlatformKind::Resume];

    /// Human-readable label for strengths/weaknesses lists.
    pub fn label(&self) -> &'static str {
        match self {
            PlatformKind::Codeforces => "Codeforces",
            PlatformKind::Leetcode => "LeetCode",
            PlatformKind::Github => "GitHub",
            PlatformKind::Linkedin => "LinkedIn",
            PlatformKind::Resume => "Resume",
            PlatformKind::Assessment => "Assessment",
        }
    }
}

/// Education tier used by the resume scorer and the job's minimum requirement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "PhD")]
    PhD,
    #[serde(rename = "Master's")]
    Masters,
    #[serde(rename = "Bachelor's")]
    Bachelors,
    #[serde(rename = "High School")]
    HighSchool,
    #[default]
    #[serde(rename = "Unknown")]
    Unknown,
}

impl EducationLevel {
    /// Ordering rank for minimum-requirement comparison. `Unknown` has no
    /// rank: an unknown tier on either side skips the check entirely.
    pub fn rank(&self) -> Option<u8> {
        match self {
            EducationLevel::HighSchool => Some(0),
            EducationLevel::Bachelors => Some(1),
            EducationLevel::Masters => Some(2),
            EducationLevel::PhD => Some(3),
            EducationLevel::Unknown => None,
        }
    }
}

/// Job-side context consumed by the per-platform scorers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRequirements {
    pub required_skills: Vec<String>,
    pub min_education: EducationLevel,
    pub min_experience_years: f64,
    pub domain_keywords: Vec<String>,
}

impl Default for JobRequirements {
    fn default() -> Self {
        Self {
            required_skills: Vec::new(),
            min_education: EducationLevel::Bachelors,
            min_experience_years: 0.0,
            domain_keywords: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeforcesAttributes {
    pub rating: u32,
    pub contests_participated: u32,
    pub rank: Option<String>,
    pub contribution: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeetcodeAttributes {
    pub total_solved: u32,
    pub easy_solved: u32,
    pub medium_solved: u32,
    pub hard_solved: u32,
    pub acceptance_rate: f64,
    /// Global ranking; lower is better. Absent means no evidence.
    pub ranking: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositorySummary {
    pub name: String,
    pub description: Option<String>,
    pub topics: Vec<String>,
    pub stars: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubAttributes {
    pub public_repos: u32,
    pub total_stars: u32,
    pub followers: u32,
    pub languages: Vec<String>,
    pub top_repositories: Vec<RepositorySummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedinAttributes {
    pub has_full_name: bool,
    pub has_headline: bool,
    pub has_summary: bool,
    pub has_location: bool,
    pub has_photo: bool,
    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub connections: u32,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeAttributes {
    pub education_level: EducationLevel,
    pub total_experience_years: f64,
    pub technical_skills: Vec<String>,
    pub certifications: Vec<String>,
    pub projects: Vec<String>,
}

/// One graded assessment item. Multiple-choice answers are exact-match,
/// coding items are graded by test-pass ratio, free-form items receive a
/// fixed default credit absent manual review (which is out of engine scope).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssessmentItem {
    MultipleChoice {
        selected: Option<String>,
        correct: String,
        points: f64,
    },
    Coding {
        tests_passed: u32,
        tests_total: u32,
        points: f64,
    },
    FreeForm {
        points: f64,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentAttributes {
    pub items: Vec<AssessmentItem>,
}

/// One platform's raw normalized attribute record, keyed by platform.
///
/// A candidate profile simply not containing a variant for a platform is
/// what "missing" means; present-with-zero-values is a different state and
/// scores as such.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "snake_case")]
pub enum PlatformAttributes {
    Codeforces(CodeforcesAttributes),
    Leetcode(LeetcodeAttributes),
    Github(GithubAttributes),
    Linkedin(LinkedinAttributes),
    Resume(ResumeAttributes),
    Assessment(AssessmentAttributes),
}

impl PlatformAttributes {
    pub fn kind(&self) -> PlatformKind {
        match self {
            PlatformAttributes::Codeforces(_) => PlatformKind::Codeforces,
            PlatformAttributes::Leetcode(_) => PlatformKind::Leetcode,
            PlatformAttributes::Github(_) => PlatformKind::Github,
            PlatformAttributes::Linkedin(_) => PlatformKind::Linkedin,
            PlatformAttributes::Resume(_) => PlatformKind::Resume,
            PlatformAttributes::Assessment(_) => PlatformKind::Assessment,
        }
    }
}

/// Everything the engine knows about one candidate: an identifier and the
/// attribute records of whichever platforms had data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub platforms: Vec<PlatformAttributes>,
}

impl CandidateProfile {
    pub fn new(id: impl Into<String>, platforms: Vec<PlatformAttributes>) -> Self {
        Self {
            id: id.into(),
            platforms,
        }
    }

    /// First record for the given platform, if any.
    pub fn platform(&self, kind: PlatformKind) -> Option<&PlatformAttributes> {
        self.platforms.iter().find(|p| p.kind() == kind)
    }

    pub fn available_kinds(&self) -> BTreeSet<PlatformKind> {
        self.platforms.iter().map(|p| p.kind()).collect()
    }
}
