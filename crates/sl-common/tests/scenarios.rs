use sl_common::ranking::confidence::ConfidenceLevel;
use sl_common::ranking::RankingEngine;
use sl_common::{
    AssessmentAttributes, AssessmentItem, CandidateProfile, CodeforcesAttributes,
    EducationLevel, GithubAttributes, JobRequirements, LinkedinAttributes, PlatformAttributes,
    PlatformKind, ResumeAttributes,
};

fn close(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance
}

/// Reference scenario: Codeforces 78.3 and GitHub 59.3 as the only platforms.
#[test]
fn two_platform_reference_scenario() {
    // rating 3500 -> 40, contests 80 -> 24, candidate master -> 10,
    // contribution 43 -> 4.3
    let codeforces = CodeforcesAttributes {
        rating: 3500,
        contests_participated: 80,
        rank: Some("candidate master".into()),
        contribution: 43,
    };
    // repos 10 -> 3, stars 1000 -> 25, followers 63 -> 6.3, languages 5 -> 10,
    // one quality repo of one -> 15
    let github = GithubAttributes {
        public_repos: 10,
        total_stars: 1000,
        followers: 63,
        languages: vec![
            "rust".into(),
            "python".into(),
            "go".into(),
            "c".into(),
            "zig".into(),
        ],
        top_repositories: vec![sl_common::RepositorySummary {
            name: "ranker".into(),
            description: Some("adaptive scoring toolkit".into()),
            topics: vec!["ranking".into()],
            stars: 900,
        }],
    };

    let engine = RankingEngine::with_default_weights(JobRequirements {
        min_education: EducationLevel::Unknown,
        ..JobRequirements::default()
    });
    let result = engine.score_candidate(&CandidateProfile::new(
        "ref-two-platform",
        vec![
            PlatformAttributes::Codeforces(codeforces),
            PlatformAttributes::Github(github),
        ],
    ));

    let cf = result
        .platform_scores
        .iter()
        .find(|s| s.kind == PlatformKind::Codeforces)
        .unwrap()
        .value;
    let gh = result
        .platform_scores
        .iter()
        .find(|s| s.kind == PlatformKind::Github)
        .unwrap()
        .value;
    assert!(close(cf, 78.3, 1e-9), "codeforces scored {cf}");
    assert!(close(gh, 59.3, 1e-9), "github scored {gh}");

    assert!(close(
        result.adjusted_weights[&PlatformKind::Codeforces],
        0.375,
        1e-9
    ));
    assert!(close(
        result.adjusted_weights[&PlatformKind::Github],
        0.625,
        1e-9
    ));

    assert!(close(result.base_score, 66.42, 0.01), "base {}", result.base_score);
    assert!(close(result.confidence, 0.80, 1e-12));
    assert_eq!(result.confidence_level, ConfidenceLevel::Moderate);

    // +3 GitHub + coding platform is the only adjustment that fires
    assert_eq!(result.adjustments.bonuses, 3.0);
    assert_eq!(result.adjustments.compensatory, 0.0);
    assert_eq!(result.adjustments.penalties, 0.0);

    assert!(close(result.final_score, 56.14, 0.01), "final {}", result.final_score);
    assert!(close(result.confidence_interval.0, 48.1, 0.05));
    assert!(close(result.confidence_interval.1, 64.1, 0.05));
}

/// Reference scenario: all six platforms present but mostly weak.
#[test]
fn full_coverage_low_score_scenario() {
    let platforms = vec![
        PlatformAttributes::Codeforces(CodeforcesAttributes::default()),
        PlatformAttributes::Leetcode(Default::default()),
        // repos 10 -> 3, stars 10 -> 10, followers 21 -> 2.1
        PlatformAttributes::Github(GithubAttributes {
            public_repos: 10,
            total_stars: 10,
            followers: 21,
            ..GithubAttributes::default()
        }),
        // completeness 20, network floor 2, one skill -> 1
        PlatformAttributes::Linkedin(LinkedinAttributes {
            has_full_name: true,
            has_headline: true,
            has_summary: true,
            has_location: true,
            has_photo: true,
            skills: vec!["sql".into()],
            ..LinkedinAttributes::default()
        }),
        // masters 22 + experience 22 + skills 6 + neutral 7.5 + neutral 5
        // + certs 3 + projects 5
        PlatformAttributes::Resume(ResumeAttributes {
            education_level: EducationLevel::Masters,
            total_experience_years: 6.0,
            technical_skills: (0..6).map(|i| format!("skill-{i}")).collect(),
            certifications: vec!["cka".into(), "aws".into()],
            projects: (0..5).map(|i| format!("project-{i}")).collect(),
        }),
        PlatformAttributes::Assessment(AssessmentAttributes {
            items: vec![AssessmentItem::Coding {
                tests_passed: 3,
                tests_total: 4,
                points: 100.0,
            }],
        }),
    ];

    let engine = RankingEngine::with_default_weights(JobRequirements::default());
    let result = engine.score_candidate(&CandidateProfile::new("ref-full", platforms));

    let score_of = |kind: PlatformKind| {
        result
            .platform_scores
            .iter()
            .find(|s| s.kind == kind)
            .unwrap()
            .value
    };
    assert!(close(score_of(PlatformKind::Codeforces), 0.0, 1e-9));
    assert!(close(score_of(PlatformKind::Leetcode), 0.0, 1e-9));
    assert!(close(score_of(PlatformKind::Github), 15.1, 1e-9));
    assert!(close(score_of(PlatformKind::Linkedin), 23.0, 1e-9));
    assert!(close(score_of(PlatformKind::Resume), 70.5, 1e-9));
    assert!(close(score_of(PlatformKind::Assessment), 75.0, 1e-9));

    assert!(close(result.base_score, 25.30, 0.01));
    assert!(close(result.confidence, 1.00, 1e-12));
    assert_eq!(result.confidence_level, ConfidenceLevel::High);

    // resume +5, GitHub + coding +3, resume + LinkedIn +2
    assert_eq!(result.adjustments.bonuses, 10.0);
    assert_eq!(result.adjustments.compensatory, 0.0);
    assert_eq!(result.adjustments.penalties, 0.0);

    assert!(close(result.final_score, 35.30, 0.01));
    assert!(close(result.confidence_interval.0, 32.3, 0.05));
    assert!(close(result.confidence_interval.1, 38.3, 0.05));

    assert_eq!(result.strengths, vec!["Resume", "Assessment"]);
    assert_eq!(
        result.weaknesses,
        vec!["Codeforces", "LeetCode", "GitHub", "LinkedIn"]
    );
    assert!(result.warnings.is_empty());
}

/// Batch ranking stays ordered and isolates gated candidates at the bottom.
#[test]
fn batch_ranking_with_mixed_data() {
    let strong = CandidateProfile::new(
        "strong",
        vec![
            PlatformAttributes::Resume(ResumeAttributes {
                education_level: EducationLevel::PhD,
                total_experience_years: 11.0,
                technical_skills: (0..10).map(|i| format!("s{i}")).collect(),
                certifications: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                projects: (0..5).map(|i| format!("p{i}")).collect(),
            }),
            PlatformAttributes::Github(GithubAttributes {
                public_repos: 50,
                total_stars: 1200,
                followers: 150,
                languages: (0..5).map(|i| format!("l{i}")).collect(),
                ..GithubAttributes::default()
            }),
        ],
    );
    let gated = CandidateProfile::new(
        "gated",
        vec![PlatformAttributes::Codeforces(CodeforcesAttributes {
            rating: 3000,
            ..CodeforcesAttributes::default()
        })],
    );
    let sparse = CandidateProfile::new(
        "sparse",
        vec![PlatformAttributes::Github(GithubAttributes {
            total_stars: 20,
            ..GithubAttributes::default()
        })],
    );

    let engine = RankingEngine::with_default_weights(JobRequirements {
        min_education: EducationLevel::Unknown,
        ..JobRequirements::default()
    });
    let ranked = engine.rank(&[gated.clone(), sparse.clone(), strong.clone()], None);

    let ids: Vec<&str> = ranked
        .iter()
        .map(|r| r.result.candidate_id.as_str())
        .collect();
    assert_eq!(ids, vec!["strong", "sparse", "gated"]);
    assert_eq!(ranked[2].result.final_score, 0.0);
    assert_eq!(ranked[2].result.confidence_level, ConfidenceLevel::None);

    // single-platform candidate drew the sparse-data penalty
    assert_eq!(ranked[1].result.adjustments.penalties, 10.0);
    assert_eq!(ranked[1].result.confidence_level, ConfidenceLevel::Low);
}
