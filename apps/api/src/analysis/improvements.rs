use crate::analysis::rules::{
    ImprovementTemplate, IMPROVE_ADDITIONAL, IMPROVE_CONTACT, IMPROVE_EDUCATION,
    IMPROVE_EXPERIENCE, IMPROVE_SKILLS,
};
use crate::analysis::scoring::Signals;
use crate::models::analysis::SectionImprovement;

impl ImprovementTemplate {
    fn to_improvement(&self) -> SectionImprovement {
        SectionImprovement {
            section: self.section.to_string(),
            priority: self.priority,
            suggestions: self.suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// One block per missing section, then the always-present "additional sections" block.
pub fn section_improvements(signals: &Signals) -> Vec<SectionImprovement> {
    let checks = [
        (signals.has_contact_info, &IMPROVE_CONTACT),
        (signals.has_work_experience, &IMPROVE_EXPERIENCE),
        (signals.has_education, &IMPROVE_EDUCATION),
        (signals.has_skills, &IMPROVE_SKILLS),
    ];

    checks
        .into_iter()
        .filter(|(present, _)| !present)
        .map(|(_, template)| template.to_improvement())
        .chain(std::iter::once(IMPROVE_ADDITIONAL.to_improvement()))
        .collect()
}
