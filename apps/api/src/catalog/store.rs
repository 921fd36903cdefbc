use anyhow::Result;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::catalog::{CatalogHandle, KeywordCatalog};
use crate::models::industry::Industry;
use crate::models::keyword::{KeywordEntry, KeywordRow};

/// Loads every `job_keywords` row into an in-memory catalog.
/// Rows with an industry tag outside the enumerated set are skipped.
pub async fn load_catalog(pool: &PgPool) -> Result<KeywordCatalog> {
    let rows: Vec<KeywordRow> =
        sqlx::query_as("SELECT industry, keyword, weight FROM job_keywords ORDER BY id")
            .fetch_all(pool)
            .await?;

    let entries = rows.into_iter().filter_map(|row| match row.industry.parse::<Industry>() {
        Ok(industry) => Some(KeywordEntry::new(industry, row.keyword, row.weight)),
        Err(e) => {
            warn!("Skipping catalog row '{}': {e}", row.keyword);
            None
        }
    });
    Ok(KeywordCatalog::from_entries(entries))
}

/// Idempotent upsert keyed by `(industry, keyword)`.
///
/// Existing rows are left untouched (including their weight). Safe to run
/// concurrently: the unique constraint decides which insert wins.
/// Returns the number of rows actually inserted.
pub async fn seed_catalog(pool: &PgPool, entries: &[KeywordEntry]) -> Result<u64> {
    let mut tx = pool.begin().await?;
    let mut created = 0;

    for entry in entries {
        let result = sqlx::query(
            r#"
            INSERT INTO job_keywords (industry, keyword, weight)
            VALUES ($1, $2, $3)
            ON CONFLICT (industry, keyword) DO NOTHING
            "#,
        )
        .bind(entry.industry.as_str())
        .bind(&entry.keyword)
        .bind(entry.weight)
        .execute(&mut *tx)
        .await?;
        created += result.rows_affected();
    }

    tx.commit().await?;
    info!("Seeded keyword catalog: {created} new of {} entries", entries.len());
    Ok(created)
}

/// Seeds the table, then swaps a freshly loaded catalog into `handle`.
pub async fn seed_and_refresh(
    pool: &PgPool,
    handle: &CatalogHandle,
    entries: &[KeywordEntry],
) -> Result<u64> {
    let created = seed_catalog(pool, entries).await?;
    let catalog = load_catalog(pool).await?;
    info!("Keyword catalog refreshed ({} rows)", catalog.len());
    handle.replace(catalog).await;
    Ok(created)
}
