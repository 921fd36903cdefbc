//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::analysis::Analyzer;
use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::models::document::{Document, DocumentFormat};
use crate::models::industry::Industry;
use crate::state::AppState;

struct Upload {
    filename: String,
    bytes: Bytes,
}

/// POST /api/v1/analyses
/// Multipart form: `file` (PDF, DOC or DOCX) and optional `industry` (defaults to general).
/// Unreadable documents still return 200 with a zero-score result.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut upload: Option<Upload> = None;
    let mut industry = Industry::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                upload = Some(Upload { filename, bytes });
            }
            "industry" => {
                let raw = field.text().await?;
                if !raw.trim().is_empty() {
                    industry = raw
                        .parse::<Industry>()
                        .map_err(|e| AppError::Validation(e.to_string()))?;
                }
            }
            _ => {}
        }
    }

    let upload =
        upload.ok_or_else(|| AppError::Validation("multipart field 'file' is required".into()))?;
    let format = DocumentFormat::from_filename(&upload.filename);
    if !format.is_supported() {
        return Err(AppError::UnsupportedMediaType(format!(
            "'{}' is not a PDF, DOC or DOCX file",
            upload.filename
        )));
    }

    info!(
        "Analyzing upload '{}' ({} bytes) for industry {industry}",
        upload.filename,
        upload.bytes.len()
    );

    let document = Document::new(upload.bytes, format);
    let analyzer = Analyzer::new(state.catalog.snapshot().await, state.readability.clone());

    // Extraction and scoring are CPU-bound.
    let result = tokio::task::spawn_blocking(move || analyzer.analyze(&document, industry))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("analysis task failed: {e}")))?;

    Ok(Json(result))
}
