use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::industry::Industry;

pub const ANALYSIS_VERSION: &str = "1.0";

// ────────────────────────────────────────────────────────────────────────────
// Line-level critique
// ────────────────────────────────────────────────────────────────────────────

/// Priority of a finding. Serialized as `priority` for presentation compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Issue class plus the payload specific to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IssueKind {
    WeakVerb { alternatives: Vec<String> },
    MissingQuantification { examples: Vec<String> },
    MissingKeywords { keywords: Vec<String> },
    GenericPhrase { alternative: String },
}

impl IssueKind {
    pub fn name(&self) -> &'static str {
        match self {
            IssueKind::WeakVerb { .. } => "weak_verb",
            IssueKind::MissingQuantification { .. } => "missing_quantification",
            IssueKind::MissingKeywords { .. } => "missing_keywords",
            IssueKind::GenericPhrase { .. } => "generic_phrase",
        }
    }
}

/// One located finding within a line. `start..end` are character offsets
/// into the trimmed `line_text` of the owning [`LineIssue`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextIssue {
    #[serde(flatten)]
    pub kind: IssueKind,
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub suggestion: String,
    #[serde(rename = "priority")]
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineIssue {
    /// 1-based, counted over the raw extracted text including blank lines.
    pub line_number: usize,
    pub line_text: String,
    pub issues: Vec<TextIssue>,
}

// ────────────────────────────────────────────────────────────────────────────
// Document-level findings
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapKind {
    QuantifiableAchievements,
    ActionVerbs,
    Certifications,
    SoftSkills,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentGap {
    #[serde(rename = "type")]
    pub kind: GapKind,
    pub title: String,
    pub description: String,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionImprovement {
    pub section: String,
    pub priority: Severity,
    pub suggestions: Vec<String>,
}

/// Structured findings attached to every result. Field names match the
/// `additional_data` object consumed by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalFindings {
    /// `[keyword, weight]` pairs, weight-descending, at most 10.
    pub missing_keywords: Vec<(String, f64)>,
    pub present_keywords: Vec<(String, f64)>,
    pub content_gaps: Vec<ContentGap>,
    pub section_improvements: Vec<SectionImprovement>,
    pub text_issues: Vec<LineIssue>,
    pub industry: Industry,
}

// ────────────────────────────────────────────────────────────────────────────
// Scores
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    F,
    D,
    C,
    B,
    A,
}

/// Presentation color band for a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreColor {
    Success,
    Warning,
    Danger,
}

/// Points contributed by each signal to the composite score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositeScore {
    pub sections: f64,      // 0-40
    pub keywords: f64,      // 0-25
    pub readability: f64,   // 5-20
    pub technical: f64,     // 0-15
}

impl CompositeScore {
    pub fn total(&self) -> f64 {
        (self.sections + self.keywords + self.readability + self.technical).clamp(0.0, 100.0)
    }
}

/// Per-component percentages for the result gauges (each 0-100).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub section_score: f64,
    pub keyword_score: f64,
    pub readability_score: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub total_issues: usize,
    pub high_priority_issues: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Result
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of analyzing one document for one industry. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub industry: Industry,
    pub extracted_text: String,
    pub word_count: usize,

    pub overall_score: f64,
    pub grade: Grade,
    pub score_color: ScoreColor,
    pub score_components: CompositeScore,
    pub score_breakdown: ScoreBreakdown,

    pub has_contact_info: bool,
    pub has_work_experience: bool,
    pub has_education: bool,
    pub has_skills: bool,

    pub keyword_density: f64,
    pub readability_score: f64,

    pub has_images: bool,
    pub has_tables: bool,
    pub has_special_characters: bool,

    /// Semicolon-joined recommendation sentences.
    pub recommendations: String,
    pub additional_data: AdditionalFindings,
    pub review_summary: ReviewSummary,

    pub analysis_version: String,
    pub analyzed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_issue_serializes_flat_with_type_and_priority() {
        let issue = TextIssue {
            kind: IssueKind::GenericPhrase {
                alternative: "Collaborated effectively with cross-functional teams".to_string(),
            },
            start: 2,
            end: 13,
            text: "team player".to_string(),
            suggestion: "Replace".to_string(),
            severity: Severity::Low,
        };
        let value = serde_json::to_value(&issue).unwrap();
        assert_eq!(value["type"], json!("generic_phrase"));
        assert_eq!(value["priority"], json!("low"));
        assert_eq!(value["start"], json!(2));
        assert_eq!(
            value["alternative"],
            json!("Collaborated effectively with cross-functional teams")
        );
    }

    #[test]
    fn test_keyword_pairs_serialize_as_arrays() {
        let findings = AdditionalFindings {
            missing_keywords: vec![("Python".to_string(), 2.0)],
            ..Default::default()
        };
        let value = serde_json::to_value(&findings).unwrap();
        assert_eq!(value["missing_keywords"], json!([["Python", 2.0]]));
        assert_eq!(value["industry"], json!("general"));
    }

    #[test]
    fn test_grade_ordering() {
        assert!(Grade::A > Grade::B);
        assert!(Grade::D > Grade::F);
    }

    #[test]
    fn test_composite_total_is_clamped() {
        let c = CompositeScore {
            sections: 40.0,
            keywords: 25.0,
            readability: 20.0,
            technical: 30.0,
        };
        assert_eq!(c.total(), 100.0);
    }
}
