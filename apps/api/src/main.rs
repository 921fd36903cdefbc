mod analysis;
mod catalog;
mod config;
mod db;
mod errors;
mod extraction;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::analysis::readability::{FleschReadingEase, ReadabilityFormula};
use crate::catalog::{seed_data, store, CatalogHandle};
use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (runs migrations)
    let db = create_pool(&config.database_url).await?;

    // Seed defaults (idempotent), then load the catalog snapshot
    if config.seed_keywords_on_start {
        let created = store::seed_catalog(&db, &seed_data::default_entries()).await?;
        info!("Default keyword seed created {created} rows");
    }
    let catalog = store::load_catalog(&db).await?;
    info!("Keyword catalog loaded: {} entries", catalog.len());

    let readability: Arc<dyn ReadabilityFormula> = Arc::new(FleschReadingEase);
    info!("Readability formula: {}", readability.name());

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        catalog: CatalogHandle::new(catalog),
        readability,
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
