//! Text extraction - turns an uploaded document into plain text.
//!
//! Failure is data here: any parser fault or unsupported format resolves to an
//! empty string plus a `warn!` diagnostic, never an error for the caller.

mod docx;
mod pdf;

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::document::{Document, DocumentFormat};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported document format")]
    UnsupportedFormat,

    #[error("PDF parse failed: {0}")]
    Pdf(String),

    #[error("PDF parser aborted on malformed input")]
    PdfPanic,

    #[error("document archive unreadable: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("document body unreadable: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extracts plain text, or returns an empty string if the document cannot be read.
pub fn extract_text(document: &Document) -> String {
    match try_extract_text(document) {
        Ok(text) => {
            debug!(
                "Extracted {} chars from {:?} document",
                text.len(),
                document.format()
            );
            text
        }
        Err(e) => {
            warn!(
                "Text extraction failed for {:?} document ({} bytes): {e}",
                document.format(),
                document.bytes().len()
            );
            String::new()
        }
    }
}

/// Fallible extraction, dispatched on the declared format.
pub fn try_extract_text(document: &Document) -> Result<String, ExtractionError> {
    match document.format() {
        DocumentFormat::Pdf => pdf::extract(document.bytes()),
        // Legacy .doc goes through the same reader and fails unless it is really OOXML.
        DocumentFormat::Doc | DocumentFormat::Docx => docx::extract(document.bytes()),
        DocumentFormat::Unsupported => Err(ExtractionError::UnsupportedFormat),
    }
}
