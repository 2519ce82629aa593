use super::{clamp_score, lookup_tier};
use crate::{GithubAttributes, JobRequirements, RepositorySummary};

const STAR_TIERS: &[(f64, f64)] = &[
    (1000.0, 25.0),
    (500.0, 22.0),
    (100.0, 18.0),
    (50.0, 14.0),
    (10.0, 10.0),
    (1.0, 5.0),
];

/// Domain-relevance points a single repository can earn.
const MAX_POINTS_PER_REPO: f64 = 5.0;

/// GitHub profile score: repos 15, stars 25, followers 10, language diversity
/// 10, required-skill match 10, quality-repo ratio 15, domain relevance 15.
pub fn score(gh: &GithubAttributes, job: &JobRequirements) -> f64 {
    let mut score = 0.0;

    score += (gh.public_repos as f64 / 50.0 * 15.0).min(15.0);
    score += lookup_tier(STAR_TIERS, gh.total_stars as f64, 0.0);
    score += (gh.followers as f64 / 100.0 * 10.0).min(10.0);
    score += (gh.languages.len() as f64 / 5.0 * 10.0).min(10.0);

    if !job.required_skills.is_empty() {
        let languages: Vec<String> = gh.languages.iter().map(|l| l.to_lowercase()).collect();
        let matches = job
            .required_skills
            .iter()
            .filter(|skill| languages.contains(&skill.to_lowercase()))
            .count();
        score += (matches as f64 / job.required_skills.len() as f64 * 10.0).min(10.0);
    }

    if !gh.top_repositories.is_empty() {
        let quality = gh
            .top_repositories
            .iter()
            .filter(|repo| is_quality_repo(repo))
            .count();
        score += (quality as f64 / gh.top_repositories.len() as f64 * 15.0).min(15.0);
    }

    if !job.domain_keywords.is_empty() {
        score += domain_relevance(&gh.top_repositories, &job.domain_keywords);
    }

    clamp_score(score)
}

/// A repository counts as quality work when it is described and shows either
/// traction or curation.
fn is_quality_repo(repo: &RepositorySummary) -> bool {
    let described = repo.description.as_deref().is_some_and(|d| !d.is_empty());
    described && (repo.stars > 0 || !repo.topics.is_empty())
}

fn domain_relevance(repos: &[RepositorySummary], keywords: &[String]) -> f64 {
    let mut points = 0.0;
    for repo in repos {
        let text = format!(
            "{} {} {}",
            repo.name,
            repo.description.as_deref().unwrap_or(""),
            repo.topics.join(" ")
        )
        .to_lowercase();
        let matches = keywords
            .iter()
            .filter(|keyword| text.contains(&keyword.to_lowercase()))
            .count();
        if matches > 0 {
            points += (matches as f64 * 2.0).min(MAX_POINTS_PER_REPO);
        }
    }
    points.min(15.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, description: Option<&str>, topics: &[&str], stars: u32) -> RepositorySummary {
        RepositorySummary {
            name: name.into(),
            description: description.map(|d| d.to_string()),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            stars,
        }
    }

    fn ml_job() -> JobRequirements {
        JobRequirements {
            required_skills: vec!["Python".into(), "Rust".into()],
            domain_keywords: vec!["machine learning".into(), "gan".into()],
            ..JobRequirements::default()
        }
    }

    #[test]
    fn star_tiers_are_table_driven() {
        for (stars, expected) in [(0, 0.0), (1, 5.0), (10, 10.0), (99, 10.0), (500, 22.0), (5000, 25.0)] {
            let gh = GithubAttributes {
                total_stars: stars,
                ..GithubAttributes::default()
            };
            assert_eq!(score(&gh, &JobRequirements::default()), expected, "stars={stars}");
        }
    }

    #[test]
    fn required_skill_match_uses_language_list() {
        let gh = GithubAttributes {
            languages: vec!["python".into(), "C++".into()],
            ..GithubAttributes::default()
        };
        // diversity 2/5*10 = 4, skill match 1/2*10 = 5
        assert!((score(&gh, &ml_job()) - 9.0).abs() < 1e-9);
    }

    #[test]
    fn quality_ratio_needs_description_and_signal() {
        let gh = GithubAttributes {
            top_repositories: vec![
                repo("a", Some("described, starred"), &[], 3),
                repo("b", Some("described, no signal"), &[], 0),
                repo("c", None, &["topic"], 50),
                repo("d", Some("described, topics"), &["cv"], 0),
            ],
            ..GithubAttributes::default()
        };
        // 2 of 4 quality repos -> 7.5 points
        assert!((score(&gh, &JobRequirements::default()) - 7.5).abs() < 1e-9);
    }

    #[test]
    fn domain_relevance_caps_per_repo_and_total() {
        let heavy = repo(
            "gan-lab",
            Some("machine learning playground for gan research"),
            &["machine learning", "gan"],
            10,
        );
        let gh = GithubAttributes {
            top_repositories: vec![heavy.clone(), heavy.clone(), heavy.clone(), heavy],
            ..GithubAttributes::default()
        };
        let job = JobRequirements {
            domain_keywords: vec!["machine learning".into(), "gan".into()],
            ..JobRequirements::default()
        };
        // per repo: 2 matches * 2 = 4 points, 4 repos -> 16, capped at 15;
        // plus quality ratio 15
        assert!((score(&gh, &job) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn empty_profile_scores_zero() {
        assert_eq!(score(&GithubAttributes::default(), &ml_job()), 0.0);
    }
}
