use std::sync::Arc;

use sqlx::PgPool;

use crate::analysis::readability::ReadabilityFormula;
use crate::catalog::CatalogHandle;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Current keyword catalog snapshot, swapped after each seed.
    pub catalog: CatalogHandle,
    /// Pluggable readability formula. Default: FleschReadingEase.
    pub readability: Arc<dyn ReadabilityFormula>,
}
