use super::{clamp_score, lookup_tier};
use crate::{JobRequirements, LinkedinAttributes};

const NETWORK_TIERS: &[(f64, f64)] = &[(500.0, 10.0), (200.0, 8.0), (100.0, 6.0), (50.0, 4.0)];

const PHD_KEYWORDS: &[&str] = &["phd", "ph.d", "doctorate"];
const MASTER_KEYWORDS: &[&str] = &["master", "msc", "m.sc", "ms", "m.s", "mtech", "mba"];
const BACHELOR_KEYWORDS: &[&str] = &["bachelor", "bsc", "b.sc", "bs", "btech", "be", "b.e"];

/// LinkedIn profile score: completeness 25, experience 20 (+5 domain bonus),
/// education 15 (+10 degree bonus), network 10, skills 10 (+10 match).
pub fn score(li: &LinkedinAttributes, job: &JobRequirements) -> f64 {
    let mut score = 0.0;

    score += completeness_points(li);
    score += experience_points(li, job);
    score += education_points(li);
    score += lookup_tier(NETWORK_TIERS, li.connections as f64, 2.0);
    score += skill_points(li, job);

    clamp_score(score)
}

/// Fixed per-field credits, max 25.
fn completeness_points(li: &LinkedinAttributes) -> f64 {
    let mut points = 0.0;
    if li.has_full_name {
        points += 4.0;
    }
    if li.has_headline {
        points += 5.0;
    }
    if li.has_summary {
        points += 5.0;
    }
    if li.has_location {
        points += 3.0;
    }
    if li.has_photo {
        points += 3.0;
    }
    if !li.experiences.is_empty() {
        points += 5.0;
    }
    points
}

fn experience_points(li: &LinkedinAttributes, job: &JobRequirements) -> f64 {
    if li.experiences.is_empty() {
        return 0.0;
    }

    let valid = li
        .experiences
        .iter()
        .filter(|exp| exp.company.is_some() && exp.title.is_some())
        .count();
    let mut points = (valid as f64 / 3.0 * 20.0).min(20.0);

    if !job.domain_keywords.is_empty() {
        let text = li
            .experiences
            .iter()
            .map(|exp| {
                format!(
                    "{} {}",
                    exp.title.as_deref().unwrap_or(""),
                    exp.description.as_deref().unwrap_or("")
                )
                .to_lowercase()
            })
            .collect::<Vec<_>>()
            .join(" ");
        let matches = job
            .domain_keywords
            .iter()
            .filter(|keyword| text.contains(&keyword.to_lowercase()))
            .count();
        if matches > 0 {
            points += (matches as f64 * 2.0).min(5.0);
        }
    }

    points
}

fn education_points(li: &LinkedinAttributes) -> f64 {
    if li.education.is_empty() {
        return 0.0;
    }

    let valid = li.education.iter().filter(|edu| edu.school.is_some()).count();
    let base = (valid as f64 / 2.0 * 15.0).min(15.0);

    let text = li
        .education
        .iter()
        .map(|edu| {
            format!(
                "{} {}",
                edu.degree.as_deref().unwrap_or(""),
                edu.field_of_study.as_deref().unwrap_or("")
            )
            .to_lowercase()
        })
        .collect::<Vec<_>>()
        .join(" ");

    let degree_bonus = if PHD_KEYWORDS.iter().any(|k| text.contains(k)) {
        10.0
    } else if MASTER_KEYWORDS.iter().any(|k| text.contains(k)) {
        7.0
    } else if BACHELOR_KEYWORDS.iter().any(|k| text.contains(k)) {
        4.0
    } else {
        0.0
    };

    base + degree_bonus
}

fn skill_points(li: &LinkedinAttributes, job: &JobRequirements) -> f64 {
    let mut points = (li.skills.len() as f64 / 10.0 * 10.0).min(10.0);

    let all_required: Vec<String> = job
        .required_skills
        .iter()
        .chain(job.domain_keywords.iter())
        .map(|s| s.to_lowercase())
        .collect();
    if !all_required.is_empty() {
        let skills: Vec<String> = li.skills.iter().map(|s| s.to_lowercase()).collect();
        let matches = all_required.iter().filter(|req| skills.contains(req)).count();
        points += (matches as f64 / all_required.len() as f64 * 10.0).min(10.0);
    }

    points
}
