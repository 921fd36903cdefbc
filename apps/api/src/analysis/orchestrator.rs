//! Analysis Orchestrator - runs every detector over one document and bundles
//! the outcome into a single immutable [`AnalysisResult`].
//!
//! Pipeline:
//! 1. Extract text (failure -> terminal zero-score result, stop)
//! 2. Word count, contact/section flags, keyword density, readability, formatting flags
//! 3. Composite score, grade, color band
//! 4. Recommendations
//! 5. Missing/present keywords, content gaps, section improvements, line critique

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::analysis::readability::ReadabilityFormula;
use crate::analysis::scoring::{self, Signals};
use crate::analysis::{
    formatting, gaps, improvements, keywords, line_critic, recommendations, sections,
};
use crate::catalog::KeywordCatalog;
use crate::extraction::extract_text;
use crate::models::analysis::{
    AdditionalFindings, AnalysisResult, CompositeScore, LineIssue, ReviewSummary, ScoreBreakdown,
    Severity, ANALYSIS_VERSION,
};
use crate::models::document::Document;
use crate::models::industry::Industry;

/// Runs analyses against one catalog snapshot with an injected readability formula.
/// Cheap to build per request; holds no mutable state.
#[derive(Clone)]
pub struct Analyzer {
    catalog: Arc<KeywordCatalog>,
    readability: Arc<dyn ReadabilityFormula>,
}

impl Analyzer {
    pub fn new(catalog: Arc<KeywordCatalog>, readability: Arc<dyn ReadabilityFormula>) -> Self {
        Self {
            catalog,
            readability,
        }
    }

    /// Analyzes a document. Never fails: unreadable documents produce a
    /// zero-score result carrying a fixed explanation.
    pub fn analyze(&self, document: &Document, industry: Industry) -> AnalysisResult {
        let text = extract_text(document);
        self.analyze_text(text, industry)
    }

    /// Same as [`Analyzer::analyze`] for text that is already extracted.
    pub fn analyze_text(&self, text: String, industry: Industry) -> AnalysisResult {
        if text.trim().is_empty() {
            warn!("No text to analyze for industry {industry}; returning failure result");
            return failed_result(industry);
        }

        let presence = sections::section_presence(&text);
        let flags = formatting::inspect(&text);
        let signals = Signals {
            has_contact_info: sections::has_contact_info(&text),
            has_work_experience: presence.experience,
            has_education: presence.education,
            has_skills: presence.skills,
            keyword_density: keywords::keyword_density(&self.catalog, &text, industry),
            readability_score: self.readability.score(&text),
            has_tables: flags.has_tables,
            has_special_characters: flags.has_special_characters,
            has_images: flags.has_images,
            word_count: text.split_whitespace().count(),
        };

        let score_components = scoring::composite(&signals);
        let overall_score = score_components.total();

        let coverage = keywords::missing_keywords(&self.catalog, &text, industry);
        let text_issues = line_critic::critique(&self.catalog, &text, industry);
        let review_summary = summarize(&text_issues);

        info!(
            "Analyzed resume: industry={industry} words={} score={overall_score:.1} line_issues={}",
            signals.word_count, review_summary.total_issues
        );

        AnalysisResult {
            industry,
            word_count: signals.word_count,
            overall_score,
            grade: scoring::grade(overall_score),
            score_color: scoring::score_color(overall_score),
            score_components,
            score_breakdown: scoring::breakdown(&signals),
            has_contact_info: signals.has_contact_info,
            has_work_experience: signals.has_work_experience,
            has_education: signals.has_education,
            has_skills: signals.has_skills,
            keyword_density: signals.keyword_density,
            readability_score: signals.readability_score,
            has_images: signals.has_images,
            has_tables: signals.has_tables,
            has_special_characters: signals.has_special_characters,
            recommendations: recommendations::compose(&signals, overall_score),
            additional_data: AdditionalFindings {
                missing_keywords: coverage.missing,
                present_keywords: coverage.present,
                content_gaps: gaps::content_gaps(&text),
                section_improvements: improvements::section_improvements(&signals),
                text_issues,
                industry,
            },
            review_summary,
            analysis_version: ANALYSIS_VERSION.to_string(),
            analyzed_at: Utc::now(),
            extracted_text: text,
        }
    }
}

fn summarize(text_issues: &[LineIssue]) -> ReviewSummary {
    let all = text_issues.iter().flat_map(|line| line.issues.iter());
    ReviewSummary {
        total_issues: all.clone().count(),
        high_priority_issues: all.filter(|i| i.severity == Severity::High).count(),
    }
}

fn failed_result(industry: Industry) -> AnalysisResult {
    AnalysisResult {
        industry,
        extracted_text: String::new(),
        word_count: 0,
        overall_score: 0.0,
        grade: scoring::grade(0.0),
        score_color: scoring::score_color(0.0),
        score_components: CompositeScore::default(),
        score_breakdown: ScoreBreakdown::default(),
        has_contact_info: false,
        has_work_experience: false,
        has_education: false,
        has_skills: false,
        keyword_density: 0.0,
        readability_score: 0.0,
        has_images: false,
        has_tables: false,
        has_special_characters: false,
        recommendations: recommendations::EXTRACTION_FAILED.to_string(),
        additional_data: AdditionalFindings {
            industry,
            ..AdditionalFindings::default()
        },
        review_summary: ReviewSummary::default(),
        analysis_version: ANALYSIS_VERSION.to_string(),
        analyzed_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::analysis::readability::FleschReadingEase;
    use crate::models::analysis::{Grade, IssueKind, ScoreColor};
    use crate::models::document::DocumentFormat;

    /// Returns a fixed score so band arithmetic is predictable.
    struct FixedReadability(f64);

    impl ReadabilityFormula for FixedReadability {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn score(&self, _text: &str) -> f64 {
            self.0
        }
    }

    fn analyzer(readability: f64) -> Analyzer {
        Analyzer::new(
            Arc::new(KeywordCatalog::with_defaults()),
            Arc::new(FixedReadability(readability)),
        )
    }

    const RESUME: &str = "Jane Doe\n\
        jane.doe@example.com | (555) 123-4567\n\
        \n\
        Professional Experience\n\
        Sales Manager, Acme Corp\n\
        Responsible for managing a team of account executives.\n\
        Increased sales across the northeast territory.\n\
        \n\
        Education\n\
        B.A. Economics, State University\n\
        \n\
        Skills\n\
        CRM, Salesforce, Negotiation, Lead Generation, team player";

    #[test]
    fn test_corrupt_document_yields_failure_result() {
        let doc = Document::new(b"not really a pdf".to_vec(), DocumentFormat::Pdf);
        let result = analyzer(50.0).analyze(&doc, Industry::Tech);
        assert_eq!(result.extracted_text, "");
        assert_eq!(result.overall_score, 0.0);
        assert_eq!(result.recommendations, recommendations::EXTRACTION_FAILED);
        assert_eq!(result.grade, Grade::F);
        assert_eq!(result.score_color, ScoreColor::Danger);
        assert_eq!(result.additional_data.industry, Industry::Tech);
        assert!(result.additional_data.text_issues.is_empty());
    }

    #[test]
    fn test_unsupported_format_yields_failure_result() {
        let doc = Document::new(RESUME.as_bytes().to_vec(), DocumentFormat::Unsupported);
        let result = analyzer(50.0).analyze(&doc, Industry::Sales);
        assert_eq!(result.overall_score, 0.0);
        assert_eq!(result.recommendations, recommendations::EXTRACTION_FAILED);
    }

    #[test]
    fn test_full_resume_signals() {
        let result = analyzer(50.0).analyze_text(RESUME.to_string(), Industry::Sales);

        assert!(result.has_contact_info);
        assert!(result.has_work_experience);
        assert!(result.has_education);
        assert!(result.has_skills);
        assert!(!result.has_tables);
        assert!(!result.has_images);
        assert_eq!(result.readability_score, 50.0);
        assert_eq!(result.word_count, RESUME.split_whitespace().count());
        assert_eq!(result.analysis_version, "1.0");

        // sales weights total 21.4; CRM, Salesforce, Negotiation and Lead Generation
        // match for 6.8. "Sales Manager" does not contain "Sales Management".
        let expected_density = 6.8 / 21.4 * 100.0;
        assert!((result.keyword_density - expected_density).abs() < 1e-9);

        let expected = scoring::composite(&Signals {
            has_contact_info: true,
            has_work_experience: true,
            has_education: true,
            has_skills: true,
            keyword_density: expected_density,
            readability_score: 50.0,
            ..Signals::default()
        })
        .total();
        assert!((result.overall_score - expected).abs() < 1e-9);
        assert_eq!(result.overall_score, result.score_components.total());
    }

    #[test]
    fn test_full_resume_findings() {
        let result = analyzer(50.0).analyze_text(RESUME.to_string(), Industry::Sales);
        let findings = &result.additional_data;

        assert_eq!(findings.industry, Industry::Sales);
        assert!(findings
            .present_keywords
            .contains(&("Salesforce".to_string(), 1.6)));
        assert_eq!(findings.missing_keywords[0], ("Sales Management".to_string(), 2.0));

        // only the always-present block; every section was found
        assert_eq!(findings.section_improvements.len(), 1);

        let weak = findings
            .text_issues
            .iter()
            .find(|l| l.line_number == 6)
            .unwrap();
        assert_eq!(weak.issues[0].kind.name(), "weak_verb");
        assert_eq!(weak.issues[0].start, 0);

        let quant = findings
            .text_issues
            .iter()
            .find(|l| l.line_number == 7)
            .unwrap();
        assert!(matches!(
            quant.issues[0].kind,
            IssueKind::MissingQuantification { .. }
        ));

        assert!(result.review_summary.total_issues >= 3);
        assert!(result.review_summary.high_priority_issues >= 1);
        assert!(result.recommendations.contains("too brief"));
    }

    #[test]
    fn test_empty_catalog_degrades_keyword_signals() {
        let analyzer = Analyzer::new(
            Arc::new(KeywordCatalog::new()),
            Arc::new(FleschReadingEase),
        );
        let result = analyzer.analyze_text(RESUME.to_string(), Industry::Finance);
        assert_eq!(result.keyword_density, 0.0);
        assert!(result.additional_data.missing_keywords.is_empty());
        assert!(result.additional_data.present_keywords.is_empty());
        assert!(result.overall_score > 0.0);
    }

    #[test]
    fn test_whitespace_only_text_is_failure() {
        let result = analyzer(50.0).analyze_text("  \n\t ".to_string(), Industry::General);
        assert_eq!(result.overall_score, 0.0);
        assert_eq!(result.recommendations, recommendations::EXTRACTION_FAILED);
    }

    #[test]
    fn test_result_serializes_with_additional_data_shape() {
        let result = analyzer(50.0).analyze_text(RESUME.to_string(), Industry::Sales);
        let value = serde_json::to_value(&result).unwrap();
        for key in [
            "missing_keywords",
            "present_keywords",
            "content_gaps",
            "section_improvements",
            "text_issues",
            "industry",
        ] {
            assert!(value["additional_data"].get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["grade"], serde_json::json!(format!("{:?}", result.grade)));
    }
}
