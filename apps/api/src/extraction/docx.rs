use std::io::{Cursor, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use crate::extraction::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts body paragraphs from an OOXML word-processing document,
/// newline-joined and trimmed. Table cells, headers and text boxes are
/// skipped; page breaks produce no text.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;

    let paragraphs = body_paragraphs(&xml)?;
    Ok(paragraphs.join("\n").trim().to_string())
}

fn parent_is_body(stack: &[Vec<u8>]) -> bool {
    stack.last().is_some_and(|name| name == b"body")
}

/// Innermost open element is a run owned by the body-level paragraph.
/// Runs inside text boxes sit under a second `w:p` and are rejected, as are
/// `w:tab` tab-stop definitions under `w:pPr/w:tabs`.
fn in_paragraph_run(stack: &[Vec<u8>]) -> bool {
    stack.last().is_some_and(|name| name == b"r")
        && stack.iter().filter(|name| name.as_slice() == b"p").count() == 1
}

/// `w:br` without a type (or `textWrapping`) is a line break; page and
/// column breaks carry no text.
fn is_line_break(e: &BytesStart) -> bool {
    !e.attributes()
        .flatten()
        .any(|a| a.key.local_name().as_ref() == b"type" && a.value.as_ref() != b"textWrapping")
}

/// Collects the text of each `w:p` that is a direct child of `w:body`.
fn body_paragraphs(xml: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                match name.as_slice() {
                    b"p" if current.is_none() && parent_is_body(&stack) => {
                        current = Some(String::new())
                    }
                    b"t" if current.is_some() && in_paragraph_run(&stack) => in_text = true,
                    _ => {}
                }
                stack.push(name);
            }
            Event::Empty(e) => {
                let run_level = in_paragraph_run(&stack);
                match (current.as_mut(), e.local_name().as_ref()) {
                    (Some(text), b"tab") if run_level => text.push('\t'),
                    (Some(text), b"br") if run_level && is_line_break(&e) => text.push('\n'),
                    (Some(text), b"cr") if run_level => text.push('\n'),
                    (None, b"p") if parent_is_body(&stack) => paragraphs.push(String::new()),
                    _ => {}
                }
            }
            Event::Text(t) if in_text => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&t.unescape()?);
                }
            }
            Event::End(e) => {
                stack.pop();
                match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"p" if parent_is_body(&stack) => {
                        if let Some(text) = current.take() {
                            paragraphs.push(text);
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    use super::*;

    const NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

    fn docx_with_body(body: &str) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_PART, FileOptions::default())
            .unwrap();
        write!(
            writer,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{NS}"><w:body>{body}</w:body></w:document>"#
        )
        .unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_joined_by_newline() {
        let bytes = docx_with_body(
            r#"<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p><w:p><w:r><w:t xml:space="preserve">Work </w:t></w:r><w:r><w:t>Experience</w:t></w:r></w:p>"#,
        );
        assert_eq!(extract(&bytes).unwrap(), "Jane Doe\nWork Experience");
    }

    #[test]
    fn test_tabs_breaks_and_entities() {
        let bytes = docx_with_body(
            r#"<w:p><w:r><w:t>R&amp;D</w:t><w:tab/><w:t>Lead</w:t><w:br/><w:t>2020</w:t></w:r></w:p>"#,
        );
        assert_eq!(extract(&bytes).unwrap(), "R&D\tLead\n2020");
    }

    #[test]
    fn test_empty_paragraphs_kept_between_content() {
        let bytes = docx_with_body(
            r#"<w:p><w:r><w:t>Skills</w:t></w:r></w:p><w:p/><w:p><w:r><w:t>Rust</w:t></w:r></w:p>"#,
        );
        assert_eq!(extract(&bytes).unwrap(), "Skills\n\nRust");
    }

    #[test]
    fn test_table_cells_are_skipped() {
        let bytes = docx_with_body(
            r#"<w:p><w:r><w:t>Summary</w:t></w:r></w:p><w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#,
        );
        assert_eq!(extract(&bytes).unwrap(), "Summary");
    }

    #[test]
    fn test_missing_document_part_is_error() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer.start_file("other.xml", FileOptions::default()).unwrap();
        writer.write_all(b"<x/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        assert!(matches!(extract(&bytes), Err(ExtractionError::Archive(_))));
    }

    #[test]
    fn test_tab_stop_definitions_are_not_text() {
        let bytes = docx_with_body(
            r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="2880"/><w:tab w:val="right" w:pos="9360"/></w:tabs></w:pPr><w:r><w:t>Senior Engineer</w:t></w:r></w:p><w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/><w:tab w:val="left" w:pos="1440"/></w:tabs></w:pPr><w:r><w:t>Acme Corp</w:t></w:r></w:p>"#,
        );
        let text = extract(&bytes).unwrap();
        assert_eq!(text, "Senior Engineer\nAcme Corp");
        assert!(!crate::analysis::formatting::has_tables(&text));
    }

    #[test]
    fn test_text_box_content_is_skipped() {
        let bytes = docx_with_body(
            r#"<w:p><w:r><w:t>Summary</w:t></w:r><w:r><w:drawing><wp:anchor xmlns:wp="urn:wp"><w:txbxContent><w:p><w:r><w:t>BOXED</w:t></w:r></w:p></w:txbxContent></wp:anchor></w:drawing></w:r></w:p><w:p><w:r><w:t>Skills</w:t></w:r></w:p>"#,
        );
        assert_eq!(extract(&bytes).unwrap(), "Summary\nSkills");
    }

    #[test]
    fn test_hyperlink_runs_are_kept() {
        let bytes = docx_with_body(
            r#"<w:p><w:r><w:t xml:space="preserve">Portfolio: </w:t></w:r><w:hyperlink><w:r><w:t>jane.dev</w:t></w:r></w:hyperlink></w:p>"#,
        );
        assert_eq!(extract(&bytes).unwrap(), "Portfolio: jane.dev");
    }

    #[test]
    fn test_page_breaks_emit_nothing() {
        let bytes = docx_with_body(
            r#"<w:p><w:r><w:t>Education</w:t><w:br w:type="page"/><w:t>BSc</w:t><w:br w:type="textWrapping"/><w:t>2019</w:t></w:r></w:p>"#,
        );
        assert_eq!(extract(&bytes).unwrap(), "EducationBSc\n2019");
    }
}
