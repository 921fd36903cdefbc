//! Keyword catalog - weighted reference keywords per industry.
//!
//! The catalog is read-mostly. Analyses hold an `Arc<KeywordCatalog>` snapshot
//! for their whole run; seeding builds a fresh catalog and swaps it in through
//! [`CatalogHandle`], so readers never wait on a seed.

pub mod handlers;
pub mod seed_data;
pub mod store;

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

use crate::models::industry::Industry;
use crate::models::keyword::KeywordEntry;

#[derive(Debug, Clone, Default)]
pub struct KeywordCatalog {
    // Insertion order is kept per industry so weight ties sort stably.
    by_industry: BTreeMap<Industry, Vec<KeywordEntry>>,
}

impl KeywordCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding the shipped default keyword set.
    pub fn with_defaults() -> Self {
        Self::from_entries(seed_data::default_entries())
    }

    pub fn from_entries(entries: impl IntoIterator<Item = KeywordEntry>) -> Self {
        let mut catalog = Self::new();
        catalog.seed(entries);
        catalog
    }

    /// Idempotent upsert keyed by `(industry, keyword)`.
    ///
    /// Entries already present keep their stored weight; entries failing
    /// [`KeywordEntry::validate`] are dropped. Returns the number of rows newly
    /// created, so re-seeding identical entries returns 0.
    pub fn seed(&mut self, entries: impl IntoIterator<Item = KeywordEntry>) -> usize {
        let mut created = 0;
        for entry in entries {
            if let Err(reason) = entry.validate() {
                warn!("Skipping keyword entry: {reason}");
                continue;
            }
            let rows = self.by_industry.entry(entry.industry).or_default();
            if rows.iter().any(|r| r.keyword == entry.keyword) {
                continue;
            }
            rows.push(entry);
            created += 1;
        }
        created
    }

    /// Rows for exactly this industry, in insertion order.
    pub fn entries(&self, industry: Industry) -> &[KeywordEntry] {
        self.by_industry
            .get(&industry)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Rows for `industry`, or the `general` rows when the industry has none.
    pub fn entries_or_general(&self, industry: Industry) -> &[KeywordEntry] {
        let rows = self.entries(industry);
        if rows.is_empty() {
            self.entries(Industry::General)
        } else {
            rows
        }
    }

    /// Highest-weighted rows for `industry`, at most `limit`. Falls back to the
    /// `general` rows (at most `general_limit`) when the industry has none.
    pub fn top_by_weight(
        &self,
        industry: Industry,
        limit: usize,
        general_limit: usize,
    ) -> Vec<&KeywordEntry> {
        let (rows, take) = match self.entries(industry) {
            [] => (self.entries(Industry::General), general_limit),
            rows => (rows, limit),
        };
        let mut ranked: Vec<&KeywordEntry> = rows.iter().collect();
        // sort_by is stable: equal weights keep insertion order
        ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        ranked.truncate(take);
        ranked
    }

    pub fn len(&self) -> usize {
        self.by_industry.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All rows, grouped by industry, each group ordered by keyword.
    pub fn sorted_by_keyword(&self) -> BTreeMap<Industry, Vec<KeywordEntry>> {
        self.by_industry
            .iter()
            .filter(|(_, rows)| !rows.is_empty())
            .map(|(industry, rows)| {
                let mut sorted = rows.clone();
                sorted.sort_by(|a, b| a.keyword.cmp(&b.keyword));
                (*industry, sorted)
            })
            .collect()
    }
}

/// Shared, swappable catalog snapshot.
#[derive(Clone)]
pub struct CatalogHandle {
    current: Arc<RwLock<Arc<KeywordCatalog>>>,
}

impl CatalogHandle {
    pub fn new(catalog: KeywordCatalog) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// Cheap clone of the current catalog; stays valid across later swaps.
    pub async fn snapshot(&self) -> Arc<KeywordCatalog> {
        self.current.read().await.clone()
    }

    pub async fn replace(&self, catalog: KeywordCatalog) {
        *self.current.write().await = Arc::new(catalog);
    }
}
