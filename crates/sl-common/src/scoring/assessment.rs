use super::clamp_score;
use crate::{AssessmentAttributes, AssessmentItem};

/// Credit granted to free-form/behavioral answers absent manual review.
const FREE_FORM_DEFAULT_CREDIT: f64 = 0.5;

/// Neutral score when an assessment record carries no gradeable points.
const NEUTRAL_SCORE: f64 = 50.0;

/// Assessment score: points earned over total points, scaled to 0-100.
pub fn score(assessment: &AssessmentAttributes) -> f64 {
    let mut earned = 0.0;
    let mut total = 0.0;

    for item in &assessment.items {
        match item {
            AssessmentItem::MultipleChoice {
                selected,
                correct,
                points,
            } => {
                total += points;
                if selected.as_deref() == Some(correct.as_str()) {
                    earned += points;
                }
            }
            AssessmentItem::Coding {
                tests_passed,
                tests_total,
                points,
            } => {
                total += points;
                if *tests_total > 0 {
                    let ratio = (*tests_passed).min(*tests_total) as f64 / *tests_total as f64;
                    earned += points * ratio;
                }
            }
            AssessmentItem::FreeForm { points } => {
                total += points;
                earned += points * FREE_FORM_DEFAULT_CREDIT;
            }
        }
    }

    if total <= 0.0 {
        return NEUTRAL_SCORE;
    }

    clamp_score(earned / total * 100.0)
}
