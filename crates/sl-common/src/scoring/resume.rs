use super::{clamp_score, lookup_tier};
use crate::{EducationLevel, JobRequirements, ResumeAttributes};

/// Penalty when the candidate's known education tier falls below the job's
/// known minimum.
const BELOW_MINIMUM_EDUCATION_PENALTY: f64 = 10.0;

/// Experience tiers applied once the job's minimum is met; the fallback
/// rewards merely meeting a zero-year requirement.
const EXPERIENCE_TIERS: &[(f64, f64)] = &[(10.0, 25.0), (5.0, 22.0), (3.0, 18.0), (1.0, 15.0)];

/// Resume score: education 30, experience 25, skill count 10, required-skill
/// match 15, domain keywords 10, certifications and projects 10.
pub fn score(resume: &ResumeAttributes, job: &JobRequirements) -> f64 {
    let mut score = 0.0;

    score += education_tier_points(resume.education_level);
    if let (Some(candidate), Some(required)) =
        (resume.education_level.rank(), job.min_education.rank())
    {
        if candidate < required {
            score -= BELOW_MINIMUM_EDUCATION_PENALTY;
        }
    }

    let years = resume.total_experience_years;
    if years >= job.min_experience_years {
        score += lookup_tier(EXPERIENCE_TIERS, years, 12.0);
    } else {
        score += (years * 3.0).min(10.0);
    }

    let skills: Vec<String> = resume
        .technical_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    score += (skills.len() as f64 / 10.0 * 10.0).min(10.0);

    if job.required_skills.is_empty() {
        score += 7.5;
    } else {
        let matched = job
            .required_skills
            .iter()
            .filter(|req| skills.contains(&req.to_lowercase()))
            .count();
        score += matched as f64 / job.required_skills.len() as f64 * 15.0;
    }

    if job.domain_keywords.is_empty() {
        score += 5.0;
    } else {
        let all_text = format!(
            "{} {} {}",
            resume.technical_skills.join(" "),
            resume.projects.join(" "),
            resume.certifications.join(" ")
        )
        .to_lowercase();
        let matched = job
            .domain_keywords
            .iter()
            .filter(|keyword| all_text.contains(&keyword.to_lowercase()))
            .count();
        score += (matched as f64 / job.domain_keywords.len() as f64 * 10.0).min(10.0);
    }

    score += (resume.certifications.len() as f64 * 1.5).min(5.0);
    score += (resume.projects.len() as f64 * 1.0).min(5.0);

    clamp_score(score)
}

fn education_tier_points(level: EducationLevel) -> f64 {
    match level {
        EducationLevel::PhD => 30.0,
        EducationLevel::Masters => 22.0,
        EducationLevel::Bachelors => 15.0,
        EducationLevel::HighSchool => 5.0,
        EducationLevel::Unknown => 0.0,
    }
}
