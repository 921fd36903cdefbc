use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::rules::{EDUCATION_TERMS, EXPERIENCE_TERMS, SKILLS_TERMS};

lazy_static! {
    static ref EMAIL: Regex =
        Regex::new(r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap();
    static ref PHONE_PATTERNS: [Regex; 3] = [
        // 123-456-7890, 123.456.7890, 1234567890
        Regex::new(r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b").unwrap(),
        // (123) 456-7890
        Regex::new(r"\(\d{3}\)\s?\d{3}[-.\s]?\d{4}").unwrap(),
        // +44 20 7946 0958
        Regex::new(r"\+\d{1,3}[-.\s]?\d{1,4}[-.\s]?\d{1,4}[-.\s]?\d{1,9}").unwrap(),
    ];
}

/// Which of the standard resume sections appear in the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionPresence {
    pub experience: bool,
    pub education: bool,
    pub skills: bool,
}

/// True if the text contains an email address or a phone number.
pub fn has_contact_info(text: &str) -> bool {
    EMAIL.is_match(text) || PHONE_PATTERNS.iter().any(|re| re.is_match(text))
}

pub fn section_presence(text: &str) -> SectionPresence {
    let lower = text.to_lowercase();
    let mentions = |terms: &[&str]| terms.iter().any(|term| lower.contains(term));
    SectionPresence {
        experience: mentions(EXPERIENCE_TERMS),
        education: mentions(EDUCATION_TERMS),
        skills: mentions(SKILLS_TERMS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_counts_as_contact() {
        assert!(has_contact_info("Reach me at Jane.Doe+jobs@Example.COM today"));
    }

    #[test]
    fn test_phone_formats_count_as_contact() {
        assert!(has_contact_info("Phone: 555-123-4567"));
        assert!(has_contact_info("Phone: 555.123.4567"));
        assert!(has_contact_info("Phone: (555) 123-4567"));
        assert!(has_contact_info("Tel +44 20 7946 0958"));
    }

    #[test]
    fn test_no_contact_details() {
        assert!(!has_contact_info("Jane Doe\nSoftware Engineer\nBerlin"));
        assert!(!has_contact_info("jane at example dot com"));
    }

    #[test]
    fn test_section_presence_case_insensitive() {
        let presence = section_presence("WORK HISTORY\nAcme\nEducation\nB.Sc.");
        assert_eq!(
            presence,
            SectionPresence {
                experience: true,
                education: true,
                skills: false,
            }
        );
    }

    #[test]
    fn test_section_presence_substring_terms() {
        // "expertise" is a skills term, "university" an education term
        let presence = section_presence("Expertise in compilers, University of Oslo");
        assert!(presence.skills);
        assert!(presence.education);
        assert!(!presence.experience);
    }

    #[test]
    fn test_section_presence_empty() {
        assert_eq!(section_presence(""), SectionPresence::default());
    }
}
