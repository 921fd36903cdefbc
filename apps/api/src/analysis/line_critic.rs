//! Line Critic - per-line scan that produces located, typed issues for highlighting.
//!
//! Offsets are character (not byte) offsets into the trimmed line. Matching
//! runs on a lowercased copy; [`LoweredLine`] keeps the map back to the
//! original characters so spans stay exact even when lowercasing changes length.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::rules::{
    ACHIEVEMENT_WORDS, GENERIC_PHRASES, KEYWORD_TRIGGER_WORDS, LINE_KEYWORD_POOL,
    LINE_KEYWORD_SUGGESTIONS, MIN_LINE_CHARS, QUANTIFICATION_EXAMPLES, WEAK_PHRASES,
    WEAK_VERB_SUGGESTION_LIMIT,
};
use crate::catalog::KeywordCatalog;
use crate::models::analysis::{IssueKind, LineIssue, Severity, TextIssue};
use crate::models::industry::Industry;
use crate::models::keyword::KeywordEntry;

lazy_static! {
    static ref QUANTIFIER: Regex =
        Regex::new(r"\d+%|\$[\d,]+|\d+\+|\d+ (years|months|people|clients|projects)").unwrap();
}

const QUANTIFY_SUGGESTION: &str =
    "Add specific numbers, percentages, or metrics to quantify this achievement";

/// Lowercased copy of a line plus, for every byte of the copy, the index of
/// the original character it came from.
struct LoweredLine<'a> {
    original: &'a str,
    lower: String,
    origin: Vec<usize>,
    char_len: usize,
}

impl<'a> LoweredLine<'a> {
    fn new(original: &'a str) -> Self {
        let mut lower = String::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len());
        let mut char_len = 0;
        for (idx, c) in original.chars().enumerate() {
            for lc in c.to_lowercase() {
                lower.push(lc);
                origin.extend(std::iter::repeat(idx).take(lc.len_utf8()));
            }
            char_len = idx + 1;
        }
        Self {
            original,
            lower,
            origin,
            char_len,
        }
    }

    fn contains(&self, needle: &str) -> bool {
        self.lower.contains(needle)
    }

    /// Character span in the original line of the first match of `needle`.
    fn find(&self, needle: &str) -> Option<(usize, usize)> {
        if needle.is_empty() {
            return None;
        }
        let byte_start = self.lower.find(needle)?;
        let byte_end = byte_start + needle.len();
        let start = self.origin[byte_start];
        let end = self.origin[byte_end - 1] + 1;
        Some((start, end))
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.original.chars().skip(start).take(end - start).collect()
    }

    fn whole_line_issue(&self, kind: IssueKind, suggestion: String) -> TextIssue {
        TextIssue {
            kind,
            start: 0,
            end: self.char_len,
            text: self.original.to_string(),
            suggestion,
            severity: Severity::Medium,
        }
    }
}

/// Critiques every line of `text` against the industry's top keywords.
pub fn critique(catalog: &KeywordCatalog, text: &str, industry: Industry) -> Vec<LineIssue> {
    let pool = catalog.top_by_weight(industry, LINE_KEYWORD_POOL, LINE_KEYWORD_POOL);
    critique_lines(text, &pool)
}

/// Scans each line for weak verbs, unquantified achievements, missing
/// keywords and generic phrases. Lines without issues are omitted; line
/// numbers are 1-based over the raw text.
pub fn critique_lines(text: &str, keyword_pool: &[&KeywordEntry]) -> Vec<LineIssue> {
    text.split('\n')
        .enumerate()
        .filter_map(|(idx, raw)| {
            let line = raw.trim();
            if line.chars().count() < MIN_LINE_CHARS {
                return None;
            }
            let issues = critique_line(line, keyword_pool);
            (!issues.is_empty()).then(|| LineIssue {
                line_number: idx + 1,
                line_text: line.to_string(),
                issues,
            })
        })
        .collect()
}

fn critique_line(line: &str, keyword_pool: &[&KeywordEntry]) -> Vec<TextIssue> {
    let lowered = LoweredLine::new(line);
    let mut issues = Vec::new();

    for (phrase, alternatives) in WEAK_PHRASES {
        if let Some((start, end)) = lowered.find(phrase) {
            let named = &alternatives[..alternatives.len().min(WEAK_VERB_SUGGESTION_LIMIT)];
            issues.push(TextIssue {
                kind: IssueKind::WeakVerb {
                    alternatives: alternatives.iter().map(|a| a.to_string()).collect(),
                },
                start,
                end,
                text: lowered.slice(start, end),
                suggestion: format!("Replace with stronger verbs like: {}", named.join(", ")),
                severity: Severity::High,
            });
        }
    }

    let has_achievement = ACHIEVEMENT_WORDS.iter().any(|w| lowered.contains(w));
    if has_achievement && !QUANTIFIER.is_match(&lowered.lower) {
        issues.push(lowered.whole_line_issue(
            IssueKind::MissingQuantification {
                examples: QUANTIFICATION_EXAMPLES.iter().map(|e| e.to_string()).collect(),
            },
            QUANTIFY_SUGGESTION.to_string(),
        ));
    }

    if KEYWORD_TRIGGER_WORDS.iter().any(|w| lowered.contains(w)) {
        let missing: Vec<String> = keyword_pool
            .iter()
            .filter(|entry| !lowered.contains(&entry.keyword.to_lowercase()))
            .take(LINE_KEYWORD_SUGGESTIONS)
            .map(|entry| entry.keyword.clone())
            .collect();
        if !missing.is_empty() {
            let suggestion = format!("Consider adding relevant keywords: {}", missing.join(", "));
            issues.push(
                lowered.whole_line_issue(IssueKind::MissingKeywords { keywords: missing }, suggestion),
            );
        }
    }

    for (phrase, replacement) in GENERIC_PHRASES {
        if let Some((start, end)) = lowered.find(phrase) {
            issues.push(TextIssue {
                kind: IssueKind::GenericPhrase {
                    alternative: replacement.to_string(),
                },
                start,
                end,
                text: lowered.slice(start, end),
                suggestion: format!("Replace with specific example: \"{replacement}\""),
                severity: Severity::Low,
            });
        }
    }

    issues
}
