//! Recommendation Composer - turns scored signals into ordered advice sentences.

use crate::analysis::scoring::Signals;

const NEEDS_WORK: &str = "Your resume needs significant improvement for ATS compatibility.";
const MODERATE: &str = "Your resume is moderately ATS-friendly but could be improved.";
const ADD_CONTACT: &str = "Add clear contact information including email and phone number.";
const ADD_EXPERIENCE: &str = "Include a dedicated work experience or employment history section.";
const ADD_EDUCATION: &str = "Add an education section with your degrees and certifications.";
const ADD_SKILLS: &str = "Include a skills section highlighting your technical and soft skills.";
const KEYWORDS_LOW: &str = "Include more industry-relevant keywords and skills in your resume.";
const KEYWORDS_HIGH: &str = "Your keyword density might be too high - ensure natural language flow.";
const READABILITY_LOW: &str = "Simplify your language to improve readability.";
const READABILITY_HIGH: &str =
    "Consider adding more detailed descriptions to showcase your experience.";
const TABLES: &str = "Avoid complex tables - use simple bullet points instead.";
const SPECIAL_CHARS: &str = "Remove excessive special characters and use standard formatting.";
const TOO_SHORT: &str = "Your resume might be too brief - consider adding more details.";
const TOO_LONG: &str = "Your resume might be too long - try to be more concise.";

/// Shown instead of recommendations when no text could be extracted.
pub const EXTRACTION_FAILED: &str =
    "Unable to analyze resume - file may be corrupted or in unsupported format.";

const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 1000;

/// Recommendation sentences in fixed evaluation order. Only true conditions contribute.
pub fn recommendations(signals: &Signals, overall_score: f64) -> Vec<&'static str> {
    let mut out = Vec::new();

    if overall_score < 60.0 {
        out.push(NEEDS_WORK);
    } else if overall_score < 80.0 {
        out.push(MODERATE);
    }

    if !signals.has_contact_info {
        out.push(ADD_CONTACT);
    }
    if !signals.has_work_experience {
        out.push(ADD_EXPERIENCE);
    }
    if !signals.has_education {
        out.push(ADD_EDUCATION);
    }
    if !signals.has_skills {
        out.push(ADD_SKILLS);
    }

    if signals.keyword_density < 20.0 {
        out.push(KEYWORDS_LOW);
    } else if signals.keyword_density > 80.0 {
        out.push(KEYWORDS_HIGH);
    }

    if signals.readability_score < 30.0 {
        out.push(READABILITY_LOW);
    } else if signals.readability_score > 90.0 {
        out.push(READABILITY_HIGH);
    }

    if signals.has_tables {
        out.push(TABLES);
    }
    if signals.has_special_characters {
        out.push(SPECIAL_CHARS);
    }

    if signals.word_count < MIN_WORDS {
        out.push(TOO_SHORT);
    } else if signals.word_count > MAX_WORDS {
        out.push(TOO_LONG);
    }

    out
}

/// Semicolon-joined form stored on the result.
pub fn compose(signals: &Signals, overall_score: f64) -> String {
    recommendations(signals, overall_score).join("; ")
}
