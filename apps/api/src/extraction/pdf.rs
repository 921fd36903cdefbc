use std::panic;

use crate::extraction::ExtractionError;

/// Extracts text from a PDF. Pages are trimmed, newline-joined and the result trimmed.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    // pdf-extract panics on some malformed inputs; contain it here.
    let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .map_err(|_| ExtractionError::PdfPanic)?
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
    Ok(join_pages(&pages))
}

fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .map(|page| page.trim())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_join_pages_uses_newlines_and_trims() {
        let joined = join_pages(&pages(&["\n  Jane Doe\nEngineer  \n", "Experience\n", "\n"]));
        assert_eq!(joined, "Jane Doe\nEngineer\nExperience");
    }

    #[test]
    fn test_join_pages_single_page() {
        assert_eq!(join_pages(&pages(&["  Skills: Rust  "])), "Skills: Rust");
    }

    #[test]
    fn test_join_pages_no_pages() {
        assert_eq!(join_pages(&[]), "");
    }

    #[test]
    fn test_not_a_pdf_is_an_error() {
        assert!(extract(b"definitely not a pdf").is_err());
    }
}
