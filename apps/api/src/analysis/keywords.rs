//! Keyword scoring against the industry catalog.
//!
//! Matching is plain case-insensitive substring search: no tokenization, no
//! stemming. "SQL" therefore also matches inside "SQLite".

use crate::catalog::KeywordCatalog;
use crate::models::industry::Industry;

/// Rows considered for the missing/present split.
pub const KEYWORD_ANALYSIS_LIMIT: usize = 20;
/// Same, when falling back to the `general` rows.
pub const GENERAL_ANALYSIS_LIMIT: usize = 15;
/// Missing keywords reported back.
pub const MISSING_REPORT_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordCoverage {
    /// Weight-descending, at most `MISSING_REPORT_LIMIT`.
    pub missing: Vec<(String, f64)>,
    /// Weight-descending, complete.
    pub present: Vec<(String, f64)>,
}

/// Weighted share (0-100) of the industry's keywords found in `text`.
///
/// Uses the `general` rows when the industry has none; 0 when both are empty.
pub fn keyword_density(catalog: &KeywordCatalog, text: &str, industry: Industry) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let rows = catalog.entries_or_general(industry);
    if rows.is_empty() {
        return 0.0;
    }

    let lower = text.to_lowercase();
    let (matched, total) = rows.iter().fold((0.0_f64, 0.0_f64), |(matched, total), row| {
        let hit = lower.contains(&row.keyword.to_lowercase());
        (matched + if hit { row.weight } else { 0.0 }, total + row.weight)
    });

    if total <= 0.0 {
        return 0.0;
    }
    (matched / total * 100.0).clamp(0.0, 100.0)
}

/// Splits the top-weighted keywords into those missing from and present in `text`.
pub fn missing_keywords(catalog: &KeywordCatalog, text: &str, industry: Industry) -> KeywordCoverage {
    let lower = text.to_lowercase();
    let mut coverage = KeywordCoverage::default();

    for row in catalog.top_by_weight(industry, KEYWORD_ANALYSIS_LIMIT, GENERAL_ANALYSIS_LIMIT) {
        let pair = (row.keyword.clone(), row.weight);
        if lower.contains(&row.keyword.to_lowercase()) {
            coverage.present.push(pair);
        } else {
            coverage.missing.push(pair);
        }
    }

    coverage.missing.truncate(MISSING_REPORT_LIMIT);
    coverage
}
