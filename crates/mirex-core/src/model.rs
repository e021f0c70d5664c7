use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Correct-answer mapping extracted from the document's tables:
/// question number -> 1-based indices of the correct options.
///
/// Duplicate indices from malformed input are kept as-is; a later table
/// cell for the same question number replaces the earlier entry.
pub type AnswerKey = BTreeMap<u32, Vec<u32>>;

/// A key-table cell pair that failed integer parsing and was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedCell {
    pub cell_text: String,
    pub reason: String,
}

/// Question-level metadata carried on the first answer row of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionMeta {
    /// Import batch name, normally the source filename without extension.
    pub group: String,
    /// Full matched paragraph text; Mirapolis expects it in both the
    /// "question name" and "question text" columns.
    pub text: String,
    /// 4 for multiple correct answers, otherwise 0.
    pub question_type: u32,
}

/// One spreadsheet row: an answer option, with question metadata present
/// only on the first option of each question. Rows without metadata leave
/// every question-level column blank in the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    pub question: Option<QuestionMeta>,
    pub answer_text: String,
    pub correctness: u32,
}

/// Result of converting one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub answer_key: AnswerKey,
    pub rows: Vec<OutputRow>,
    /// Number of question paragraphs seen, including any without answers.
    pub question_count: u32,
    pub skipped_cells: Vec<SkippedCell>,
}
