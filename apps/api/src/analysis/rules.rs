//! Fixed heuristic tables used by the detectors and critics.
//!
//! Every phrase is lowercase; matching is case-insensitive substring search
//! against lowercased text.

use crate::models::analysis::{GapKind, Severity};

// ────────────────────────────────────────────────────────────────────────────
// Section detection
// ────────────────────────────────────────────────────────────────────────────

pub const EXPERIENCE_TERMS: &[&str] = &[
    "experience",
    "work history",
    "employment",
    "professional experience",
    "career",
];

pub const EDUCATION_TERMS: &[&str] = &[
    "education",
    "academic",
    "degree",
    "university",
    "college",
    "school",
];

pub const SKILLS_TERMS: &[&str] = &[
    "skills",
    "technical skills",
    "competencies",
    "proficiencies",
    "expertise",
];

// ────────────────────────────────────────────────────────────────────────────
// Line critique
// ────────────────────────────────────────────────────────────────────────────

/// Weak phrase and the stronger verbs to suggest instead, in scan order.
pub const WEAK_PHRASES: &[(&str, &[&str])] = &[
    ("responsible for", &["Led", "Managed", "Oversaw", "Directed"]),
    ("duties included", &["Achieved", "Delivered", "Executed", "Accomplished"]),
    ("worked on", &["Developed", "Built", "Created", "Implemented"]),
    ("helped with", &["Collaborated on", "Contributed to", "Assisted in", "Supported"]),
    ("worked with", &["Partnered with", "Collaborated with", "Coordinated with"]),
    ("was involved in", &["Participated in", "Contributed to", "Played a key role in"]),
    ("did", &["Executed", "Performed", "Completed", "Delivered"]),
    ("made", &["Created", "Developed", "Built", "Established"]),
];

/// How many alternatives the weak-verb suggestion names.
pub const WEAK_VERB_SUGGESTION_LIMIT: usize = 3;

pub const ACHIEVEMENT_WORDS: &[&str] = &[
    "increased",
    "decreased",
    "improved",
    "reduced",
    "grew",
    "achieved",
    "delivered",
    "completed",
];

pub const QUANTIFICATION_EXAMPLES: &[&str] = &[
    "25% increase",
    "$50K savings",
    "10+ projects",
    "3 years experience",
];

/// Words that make a line a candidate for keyword suggestions.
pub const KEYWORD_TRIGGER_WORDS: &[&str] = &["skills", "experience", "expertise", "proficient"];

/// Top-weighted catalog keywords checked per line.
pub const LINE_KEYWORD_POOL: usize = 8;
/// Keywords named per missing-keywords issue.
pub const LINE_KEYWORD_SUGGESTIONS: usize = 4;

/// Generic self-description and a concrete rewrite, in scan order.
pub const GENERIC_PHRASES: &[(&str, &str)] = &[
    ("team player", "Collaborated effectively with cross-functional teams"),
    ("hard worker", "Delivered consistent high-quality results"),
    ("detail oriented", "Maintained 99%+ accuracy in data analysis"),
    ("fast learner", "Rapidly acquired new technical skills"),
    ("go-getter", "Proactively identified and pursued opportunities"),
];

/// Lines shorter than this (in characters, after trimming) are not critiqued.
pub const MIN_LINE_CHARS: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Document-level gaps
// ────────────────────────────────────────────────────────────────────────────

/// Weak phrases checked across the whole document (subset of `WEAK_PHRASES`).
pub const GAP_WEAK_PHRASES: &[&str] = &["responsible for", "duties included", "worked on", "helped with"];

pub const CERTIFICATION_TERMS: &[&str] = &["certified", "certification", "license", "credential"];

pub const SOFT_SKILL_TERMS: &[&str] = &[
    "leadership",
    "communication",
    "problem solving",
    "teamwork",
    "collaboration",
];

pub const MIN_SOFT_SKILLS: usize = 2;

pub struct GapTemplate {
    pub kind: GapKind,
    pub title: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

pub const GAP_ACHIEVEMENTS: GapTemplate = GapTemplate {
    kind: GapKind::QuantifiableAchievements,
    title: "Add Quantifiable Achievements",
    description: "Include numbers, percentages, and metrics to show your impact",
    examples: &[
        "Increased sales by 25%",
        "Managed a team of 8 people",
        "Reduced costs by $50,000",
        "Improved efficiency by 30%",
    ],
};

pub const GAP_ACTION_VERBS: GapTemplate = GapTemplate {
    kind: GapKind::ActionVerbs,
    title: "Use Stronger Action Verbs",
    description: "Replace weak phrases with powerful action verbs",
    examples: &[
        "Led",
        "Developed",
        "Implemented",
        "Achieved",
        "Optimized",
        "Streamlined",
        "Spearheaded",
        "Delivered",
    ],
};

pub const GAP_CERTIFICATIONS: GapTemplate = GapTemplate {
    kind: GapKind::Certifications,
    title: "Add Relevant Certifications",
    description: "Include professional certifications, licenses, and credentials",
    examples: &[
        "PMP Certification",
        "AWS Certified",
        "Google Analytics Certified",
        "CPA License",
    ],
};

pub const GAP_SOFT_SKILLS: GapTemplate = GapTemplate {
    kind: GapKind::SoftSkills,
    title: "Highlight Soft Skills",
    description: "Include important soft skills that employers value",
    examples: &[
        "Leadership",
        "Communication",
        "Problem Solving",
        "Team Collaboration",
        "Adaptability",
        "Critical Thinking",
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Section improvements
// ────────────────────────────────────────────────────────────────────────────

pub struct ImprovementTemplate {
    pub section: &'static str,
    pub priority: Severity,
    pub suggestions: &'static [&'static str],
}

pub const IMPROVE_CONTACT: ImprovementTemplate = ImprovementTemplate {
    section: "Contact Information",
    priority: Severity::High,
    suggestions: &[
        "Add your full name at the top of the resume",
        "Include a professional email address",
        "Add your phone number with area code",
        "Include your city and state (zip code optional)",
        "Add LinkedIn profile URL",
        "Consider adding your professional website or portfolio",
    ],
};

pub const IMPROVE_EXPERIENCE: ImprovementTemplate = ImprovementTemplate {
    section: "Work Experience",
    priority: Severity::High,
    suggestions: &[
        "Create a \"Work Experience\" or \"Professional Experience\" section",
        "List jobs in reverse chronological order",
        "Include job title, company name, location, and dates",
        "Use 3-5 bullet points per job describing achievements",
        "Start each bullet point with an action verb",
        "Quantify your accomplishments with numbers and percentages",
    ],
};

pub const IMPROVE_EDUCATION: ImprovementTemplate = ImprovementTemplate {
    section: "Education",
    priority: Severity::Medium,
    suggestions: &[
        "Add an \"Education\" section",
        "Include degree type, major, school name, and graduation year",
        "Add GPA if it's 3.5 or higher",
        "Include relevant coursework for entry-level positions",
        "Add academic honors or awards if applicable",
    ],
};

pub const IMPROVE_SKILLS: ImprovementTemplate = ImprovementTemplate {
    section: "Skills",
    priority: Severity::High,
    suggestions: &[
        "Create a \"Skills\" or \"Technical Skills\" section",
        "List both hard and soft skills",
        "Include programming languages, software, and tools",
        "Add industry-specific skills and certifications",
        "Use keywords from the job description",
        "Consider categorizing skills (e.g., Technical, Languages, Certifications)",
    ],
};

pub const IMPROVE_ADDITIONAL: ImprovementTemplate = ImprovementTemplate {
    section: "Additional Sections to Consider",
    priority: Severity::Low,
    suggestions: &[
        "Professional Summary - 2-3 lines highlighting your value proposition",
        "Certifications - List relevant professional certifications",
        "Projects - Showcase relevant personal or professional projects",
        "Awards & Recognition - Include professional achievements",
        "Volunteer Experience - Add relevant volunteer work",
        "Publications - Include relevant articles or papers",
    ],
};
