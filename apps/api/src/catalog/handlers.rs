use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::catalog::{seed_data, store};
use crate::errors::AppError;
use crate::models::industry::Industry;
use crate::models::keyword::KeywordEntry;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct KeywordQuery {
    pub industry: Option<String>,
}

#[derive(Serialize)]
pub struct IndustryKeywords {
    pub industry: Industry,
    pub label: &'static str,
    pub keywords: Vec<KeywordEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SeedRequest {
    /// Defaults to the shipped seed table when omitted.
    pub entries: Option<Vec<KeywordEntry>>,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub created: u64,
}

/// GET /api/v1/keywords
pub async fn handle_list_keywords(
    State(state): State<AppState>,
    Query(params): Query<KeywordQuery>,
) -> Result<Json<Vec<IndustryKeywords>>, AppError> {
    let filter = params
        .industry
        .as_deref()
        .map(str::parse::<Industry>)
        .transpose()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let catalog = state.catalog.snapshot().await;
    let grouped: BTreeMap<Industry, Vec<KeywordEntry>> = catalog.sorted_by_keyword();

    let listing = grouped
        .into_iter()
        .filter(|(industry, _)| filter.map_or(true, |f| f == *industry))
        .map(|(industry, keywords)| IndustryKeywords {
            industry,
            label: industry.label(),
            keywords,
        })
        .collect();
    Ok(Json(listing))
}

/// POST /api/v1/keywords/seed
/// An empty body seeds the shipped defaults; a body that is present must parse.
pub async fn handle_seed_keywords(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SeedResponse>, AppError> {
    let entries = parse_seed_request(&body)?
        .entries
        .unwrap_or_else(seed_data::default_entries);

    for entry in &entries {
        entry.validate().map_err(AppError::Validation)?;
    }

    let created = store::seed_and_refresh(&state.db, &state.catalog, &entries).await?;
    Ok(Json(SeedResponse { created }))
}

fn parse_seed_request(body: &[u8]) -> Result<SeedRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SeedRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("invalid seed request: {e}")))
}
