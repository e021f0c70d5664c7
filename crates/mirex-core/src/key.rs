use crate::extraction::TableData;
use crate::model::{AnswerKey, SkippedCell};

/// Build the answer key from the document's tables.
///
/// Table rows are read in pairs: an even row of question numbers above an
/// odd row of comma-separated correct option indices. A trailing unpaired
/// row is ignored. A cell pair whose answer list fails integer parsing is
/// skipped and recorded; the rest of the table is still processed. Later
/// cells overwrite earlier entries for the same question number.
pub fn extract_answer_key(tables: &[TableData]) -> (AnswerKey, Vec<SkippedCell>) {
    let mut key = AnswerKey::new();
    let mut skipped = Vec::new();

    for table in tables {
        for pair in table.rows.chunks_exact(2) {
            let (question_row, answer_row) = (&pair[0], &pair[1]);
            let width = question_row.len().max(answer_row.len());

            for j in 0..width {
                let question_text = question_row.get(j).map(|c| c.trim()).unwrap_or("");
                let answer_text = answer_row.get(j).map(|c| c.trim()).unwrap_or("");

                if question_text.is_empty()
                    || !question_text.chars().all(|c| c.is_ascii_digit())
                {
                    continue;
                }
                let Ok(question_number) = question_text.parse::<u32>() else {
                    skipped.push(SkippedCell {
                        cell_text: question_text.to_string(),
                        reason: "question number out of range".to_string(),
                    });
                    continue;
                };

                match parse_answer_list(answer_text) {
                    Ok(indices) => {
                        key.insert(question_number, indices);
                    }
                    Err(token) => skipped.push(SkippedCell {
                        cell_text: answer_text.to_string(),
                        reason: format!("'{token}' is not an integer"),
                    }),
                }
            }
        }
    }

    (key, skipped)
}

/// Parse a comma-separated list of option indices ("1, 3" -> [1, 3]).
/// Returns the offending token on failure.
fn parse_answer_list(text: &str) -> Result<Vec<u32>, String> {
    text.split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<u32>().map_err(|_| token.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> TableData {
        TableData {
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn pairs_rows_into_key_entries() {
        let tables = [table(&[&["1", "2"], &["1,2", "3"]])];
        let (key, skipped) = extract_answer_key(&tables);
        assert_eq!(key.get(&1), Some(&vec![1, 2]));
        assert_eq!(key.get(&2), Some(&vec![3]));
        assert!(skipped.is_empty());
    }

    #[test]
    fn non_integer_token_skips_the_cell_pair() {
        let tables = [table(&[&["1"], &["a,b"]])];
        let (key, skipped) = extract_answer_key(&tables);
        assert!(key.is_empty());
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].cell_text, "a,b");
        assert!(skipped[0].reason.contains("'a'"));
    }

    #[test]
    fn partial_failure_keeps_other_columns() {
        let tables = [table(&[&["1", "2"], &["1,x", "2"]])];
        let (key, skipped) = extract_answer_key(&tables);
        assert!(!key.contains_key(&1));
        assert_eq!(key.get(&2), Some(&vec![2]));
        assert_eq!(skipped.len(), 1);
    }

    #[test]
    fn trailing_unpaired_row_is_ignored() {
        let tables = [table(&[&["1"], &["2"], &["3"]])];
        let (key, _) = extract_answer_key(&tables);
        assert_eq!(key.len(), 1);
        assert_eq!(key.get(&1), Some(&vec![2]));
    }

    #[test]
    fn later_cells_overwrite_earlier_entries() {
        let tables = [
            table(&[&["1"], &["1"]]),
            table(&[&["1"], &["2,3"]]),
        ];
        let (key, _) = extract_answer_key(&tables);
        assert_eq!(key.get(&1), Some(&vec![2, 3]));
    }

    #[test]
    fn missing_answer_cell_is_recorded() {
        // Question row wider than answer row: question 2 has no answer cell.
        let tables = [table(&[&["1", "2"], &["1"]])];
        let (key, skipped) = extract_answer_key(&tables);
        assert_eq!(key.get(&1), Some(&vec![1]));
        assert!(!key.contains_key(&2));
        assert_eq!(skipped.len(), 1);
    }

    #[test]
    fn non_digit_question_cells_are_ignored_silently() {
        let tables = [table(&[&["Вопрос", "1"], &["header", "2"]])];
        let (key, skipped) = extract_answer_key(&tables);
        assert_eq!(key.get(&1), Some(&vec![2]));
        assert_eq!(key.len(), 1);
        assert!(skipped.is_empty());
    }

    #[test]
    fn duplicate_indices_are_preserved() {
        let tables = [table(&[&["1"], &["1,1,2"]])];
        let (key, _) = extract_answer_key(&tables);
        assert_eq!(key.get(&1), Some(&vec![1, 1, 2]));
    }

    #[test]
    fn tokens_are_trimmed_before_parsing() {
        let tables = [table(&[&["1"], &[" 1 , 3 "]])];
        let (key, _) = extract_answer_key(&tables);
        assert_eq!(key.get(&1), Some(&vec![1, 3]));
    }

    #[test]
    fn empty_tables_contribute_nothing() {
        let tables = [table(&[])];
        let (key, skipped) = extract_answer_key(&tables);
        assert!(key.is_empty());
        assert!(skipped.is_empty());
    }
}
