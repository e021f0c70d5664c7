use std::io::{Cursor, Read};

use quick_xml::events::{BytesRef, Event};
use quick_xml::Reader;

use super::{DocxContent, TableData};
use crate::error::MirexError;

/// Read a docx file (a zip archive) and pull the body paragraphs and
/// tables out of word/document.xml.
pub fn read_docx(bytes: &[u8]) -> Result<DocxContent, MirexError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| MirexError::Docx(format!("word/document.xml not found: {e}")))?
        .read_to_string(&mut document_xml)
        .map_err(|e| MirexError::Docx(format!("failed to read word/document.xml: {e}")))?;

    parse_document_xml(&document_xml)
}

/// Parse WordprocessingML into body paragraphs and tables.
///
/// Tables can nest in OOXML; nested tables are flattened into the cell
/// text of the outer table, which is all the answer-key extractor needs.
pub(crate) fn parse_document_xml(xml: &str) -> Result<DocxContent, MirexError> {
    let mut reader = Reader::from_str(xml);
    let mut content = DocxContent::default();

    let mut table_depth = 0usize;
    let mut current_table = TableData::default();
    let mut current_row: Vec<String> = Vec::new();
    let mut current_cell = String::new();
    let mut current_paragraph = String::new();
    let mut in_body_paragraph = false;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:tbl" => table_depth += 1,
                b"w:tr" if table_depth == 1 => current_row.clear(),
                b"w:tc" if table_depth == 1 => current_cell.clear(),
                b"w:p" if table_depth == 0 => {
                    in_body_paragraph = true;
                    current_paragraph.clear();
                }
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:tbl" => {
                    table_depth = table_depth.saturating_sub(1);
                    if table_depth == 0 {
                        content.tables.push(std::mem::take(&mut current_table));
                    }
                }
                b"w:tr" if table_depth == 1 => {
                    current_table.rows.push(std::mem::take(&mut current_row));
                }
                b"w:tc" if table_depth == 1 => {
                    current_row.push(std::mem::take(&mut current_cell));
                }
                b"w:p" if table_depth == 0 => {
                    in_body_paragraph = false;
                    content
                        .paragraphs
                        .push(std::mem::take(&mut current_paragraph));
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text {
                    let text = e
                        .xml_content()
                        .map_err(|e| MirexError::Docx(format!("bad XML text: {e}")))?;
                    if table_depth > 0 {
                        current_cell.push_str(&text);
                    } else if in_body_paragraph {
                        current_paragraph.push_str(&text);
                    }
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if in_text {
                    if let Some(text) = resolve_entity(&e)? {
                        if table_depth > 0 {
                            current_cell.push_str(&text);
                        } else if in_body_paragraph {
                            current_paragraph.push_str(&text);
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(MirexError::Docx(format!(
                    "XML error at position {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(content)
}

/// Resolve a character or predefined entity reference; anything else is
/// dropped from the extracted text.
fn resolve_entity(r: &BytesRef) -> Result<Option<String>, MirexError> {
    if let Some(ch) = r
        .resolve_char_ref()
        .map_err(|e| MirexError::Docx(format!("bad character reference: {e}")))?
    {
        return Ok(Some(ch.to_string()));
    }
    let name = r
        .decode()
        .map_err(|e| MirexError::Docx(format!("bad entity reference: {e}")))?;
    Ok(match name.as_ref() {
        "amp" => Some("&".to_string()),
        "lt" => Some("<".to_string()),
        "gt" => Some(">".to_string()),
        "apos" => Some("'".to_string()),
        "quot" => Some("\"".to_string()),
        _ => None,
    })
}
