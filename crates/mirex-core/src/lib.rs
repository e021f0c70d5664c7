pub mod error;
pub mod export;
pub mod extraction;
pub mod key;
pub mod model;
pub mod rows;

use error::MirexError;
use model::Conversion;

/// Main API entry point: convert one quiz document into Mirapolis import
/// rows.
///
/// `group` becomes the "group name" column on the first answer row of
/// each question; callers normally pass the source filename without its
/// extension. A document without tables has no answer key to read and is
/// rejected outright.
pub fn convert_docx(docx_bytes: &[u8], group: &str) -> Result<Conversion, MirexError> {
    let content = extraction::docx::read_docx(docx_bytes)?;

    if content.tables.is_empty() {
        return Err(MirexError::NoTables);
    }

    let (answer_key, skipped_cells) = key::extract_answer_key(&content.tables);
    let (rows, question_count) = rows::build_rows(&content.paragraphs, &answer_key, group);

    Ok(Conversion {
        answer_key,
        rows,
        question_count,
        skipped_cells,
    })
}
