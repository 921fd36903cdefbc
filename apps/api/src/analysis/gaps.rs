use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::rules::{
    GapTemplate, CERTIFICATION_TERMS, GAP_ACHIEVEMENTS, GAP_ACTION_VERBS, GAP_CERTIFICATIONS,
    GAP_SOFT_SKILLS, GAP_WEAK_PHRASES, MIN_SOFT_SKILLS, SOFT_SKILL_TERMS,
};
use crate::models::analysis::ContentGap;

lazy_static! {
    // Runs on the original-case text.
    static ref DOCUMENT_QUANTIFIER: Regex =
        Regex::new(r"\d+%|\$\d+|\d+\+|increased by \d+|reduced \d+|managed \d+").unwrap();
}

impl GapTemplate {
    fn to_gap(&self) -> ContentGap {
        ContentGap {
            kind: self.kind,
            title: self.title.to_string(),
            description: self.description.to_string(),
            examples: self.examples.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Document-level gaps, in fixed order: achievements, verbs, certifications, soft skills.
pub fn content_gaps(text: &str) -> Vec<ContentGap> {
    let lower = text.to_lowercase();
    let mut gaps = Vec::new();

    if !DOCUMENT_QUANTIFIER.is_match(text) {
        gaps.push(GAP_ACHIEVEMENTS.to_gap());
    }

    if GAP_WEAK_PHRASES.iter().any(|p| lower.contains(p)) {
        gaps.push(GAP_ACTION_VERBS.to_gap());
    }

    if !CERTIFICATION_TERMS.iter().any(|t| lower.contains(t)) {
        gaps.push(GAP_CERTIFICATIONS.to_gap());
    }

    let soft_skills = SOFT_SKILL_TERMS.iter().filter(|s| lower.contains(*s)).count();
    if soft_skills < MIN_SOFT_SKILLS {
        gaps.push(GAP_SOFT_SKILLS.to_gap());
    }

    gaps
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::analysis::GapKind;

    fn kinds(text: &str) -> Vec<GapKind> {
        content_gaps(text).into_iter().map(|g| g.kind).collect()
    }

    #[test]
    fn test_bare_text_has_all_gaps_in_order() {
        assert_eq!(
            kinds("Responsible for the front desk"),
            vec![
                GapKind::QuantifiableAchievements,
                GapKind::ActionVerbs,
                GapKind::Certifications,
                GapKind::SoftSkills,
            ]
        );
    }

    #[test]
    fn test_strong_resume_has_no_gaps() {
        let text = "Cut churn 30%. AWS Certified. Known for leadership and communication.";
        assert!(content_gaps(text).is_empty());
    }

    #[test]
    fn test_currency_counts_as_quantified() {
        assert!(!kinds("Saved $4000 in licenses").contains(&GapKind::QuantifiableAchievements));
    }

    #[test]
    fn test_plain_numbers_are_not_enough() {
        // a bare year is not a metric
        assert!(kinds("Joined in 2019").contains(&GapKind::QuantifiableAchievements));
    }

    #[test]
    fn test_single_soft_skill_is_a_gap() {
        assert!(kinds("Strong teamwork").contains(&GapKind::SoftSkills));
        assert!(!kinds("Teamwork and Collaboration").contains(&GapKind::SoftSkills));
    }

    #[test]
    fn test_gap_carries_template_text() {
        let gap = content_gaps("")
            .into_iter()
            .find(|g| g.kind == GapKind::Certifications)
            .unwrap();
        assert_eq!(gap.title, "Add Relevant Certifications");
        assert_eq!(gap.examples.len(), 4);
    }
}
