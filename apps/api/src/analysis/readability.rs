//! Readability scoring.
//!
//! The formula is injected at startup as `Arc<dyn ReadabilityFormula>`; the
//! analyzer never decides which one to use. Any finite output is valid data,
//! including negative scores and scores above 100.

/// A pure text -> score readability formula.
pub trait ReadabilityFormula: Send + Sync {
    fn name(&self) -> &'static str;
    fn score(&self, text: &str) -> f64;
}

/// Flesch Reading Ease:
/// `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`.
///
/// Higher is easier. Rounded to two decimals; text without words scores 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct FleschReadingEase;

impl ReadabilityFormula for FleschReadingEase {
    fn name(&self) -> &'static str {
        "flesch_reading_ease"
    }

    fn score(&self, text: &str) -> f64 {
        let words: Vec<&str> = text
            .split_whitespace()
            .filter(|w| w.chars().any(char::is_alphanumeric))
            .collect();
        if words.is_empty() {
            return 0.0;
        }

        let word_count = words.len() as f64;
        let sentences = sentence_count(text) as f64;
        let syllables: usize = words.iter().map(|w| syllable_count(w)).sum();

        let score =
            206.835 - 1.015 * (word_count / sentences) - 84.6 * (syllables as f64 / word_count);
        (score * 100.0).round() / 100.0
    }
}

/// Runs of text ended by `.`, `!` or `?` that contain at least one letter or digit.
/// Never less than one.
fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .count()
        .max(1)
}

/// Vowel-group heuristic with a silent trailing `e`. Never less than one.
fn syllable_count(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if letters.is_empty() {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut groups = 0;
    let mut prev_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = vowel;
    }

    // "make" -> 1, but "table" keeps its "le" syllable
    let n = letters.len();
    if n > 2 && letters[n - 1] == 'e' && letters[n - 2] != 'l' && !is_vowel(letters[n - 2]) {
        groups -= 1;
    }
    groups.max(1)
}
