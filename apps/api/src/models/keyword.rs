use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::industry::Industry;

/// Upper bound on a keyword weight (inclusive). Lower bound is exclusive zero.
pub const MAX_KEYWORD_WEIGHT: f64 = 5.0;
pub const MAX_KEYWORD_LEN: usize = 100;

/// One catalog row: a weighted keyword for an industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub industry: Industry,
    pub keyword: String,
    pub weight: f64,
}

impl KeywordEntry {
    pub fn new(industry: Industry, keyword: impl Into<String>, weight: f64) -> Self {
        Self {
            industry,
            keyword: keyword.into(),
            weight,
        }
    }

    /// Checks weight range and keyword length. Returns a human-readable reason on failure.
    pub fn validate(&self) -> Result<(), String> {
        let len = self.keyword.trim().chars().count();
        if len == 0 {
            return Err("keyword must not be empty".to_string());
        }
        if len > MAX_KEYWORD_LEN {
            return Err(format!(
                "keyword '{}' exceeds {MAX_KEYWORD_LEN} characters",
                self.keyword
            ));
        }
        if !(self.weight > 0.0 && self.weight <= MAX_KEYWORD_WEIGHT) {
            return Err(format!(
                "weight {} for '{}' must be in (0, {MAX_KEYWORD_WEIGHT}]",
                self.weight, self.keyword
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct KeywordRow {
    pub industry: String,
    pub keyword: String,
    pub weight: f64,
}
