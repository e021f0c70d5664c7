use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{AnswerKey, OutputRow, QuestionMeta};

/// Mirapolis type code for multiple-choice questions. Single-choice and
/// keyless questions keep 0, the value the import template defaults to.
const MULTI_CHOICE_TYPE: u32 = 4;

static ANSWER_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\)\s*").unwrap());
static QUESTION_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.").unwrap());

/// Strip one leading "N)" enumeration marker from raw answer text.
pub fn clean_answer(raw: &str) -> String {
    ANSWER_MARKER.replace(raw.trim(), "").trim().to_string()
}

/// Walk body paragraphs in order, pairing each answer option with the most
/// recent question, and produce one output row per option.
///
/// Returns the rows and the number of question paragraphs seen. Question
/// numbers are assigned by order of appearance, independent of the number
/// written in the paragraph text.
pub fn build_rows(
    paragraphs: &[String],
    key: &AnswerKey,
    group: &str,
) -> (Vec<OutputRow>, u32) {
    let mut rows = Vec::new();
    let mut current_question: Option<String> = None;
    let mut question_number = 0u32;
    let mut answer_number = 0u32;

    for paragraph in paragraphs {
        let text = paragraph.trim();
        if text.is_empty() {
            continue;
        }

        if QUESTION_START.is_match(text) {
            current_question = Some(text.to_string());
            question_number += 1;
            answer_number = 0;
            continue;
        }

        let Some(question_text) = current_question.as_deref() else {
            // Preamble before the first question carries no answers.
            continue;
        };

        answer_number += 1;
        let entry = key.get(&question_number);
        let correctness = match entry {
            Some(indices) if indices.contains(&answer_number) => 1,
            _ => 0,
        };

        let question = (answer_number == 1).then(|| QuestionMeta {
            group: group.to_string(),
            text: question_text.to_string(),
            question_type: match entry {
                Some(indices) if indices.len() > 1 => MULTI_CHOICE_TYPE,
                _ => 0,
            },
        });

        rows.push(OutputRow {
            question,
            answer_text: clean_answer(text),
            correctness,
        });
    }

    (rows, question_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraphs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn key(entries: &[(u32, &[u32])]) -> AnswerKey {
        entries
            .iter()
            .map(|(q, indices)| (*q, indices.to_vec()))
            .collect()
    }

    #[test]
    fn clean_answer_strips_leading_marker() {
        assert_eq!(clean_answer("1) Paris"), "Paris");
        assert_eq!(clean_answer("Paris"), "Paris");
        assert_eq!(clean_answer("  2)   Rome  "), "Rome");
    }

    #[test]
    fn clean_answer_strips_only_the_first_marker() {
        assert_eq!(clean_answer("1) 2) twice"), "2) twice");
    }

    #[test]
    fn single_correct_answer_keeps_default_type() {
        let key = key(&[(1, &[2])]);
        let (rows, count) = build_rows(
            &paragraphs(&["1. Capital of France?", "1) London", "2) Paris", "3) Rome"]),
            &key,
            "geo",
        );
        assert_eq!(count, 1);
        let correctness: Vec<u32> = rows.iter().map(|r| r.correctness).collect();
        assert_eq!(correctness, [0, 1, 0]);
        // One correct index: the type stays 0, not 4.
        assert_eq!(rows[0].question.as_ref().unwrap().question_type, 0);
    }

    #[test]
    fn multiple_correct_answers_use_type_4() {
        let key = key(&[(1, &[1, 3])]);
        let (rows, _) = build_rows(
            &paragraphs(&["1. Pick two", "1) a", "2) b", "3) c"]),
            &key,
            "quiz",
        );
        assert_eq!(rows[0].question.as_ref().unwrap().question_type, 4);
        let correctness: Vec<u32> = rows.iter().map(|r| r.correctness).collect();
        assert_eq!(correctness, [1, 0, 1]);
    }

    #[test]
    fn missing_key_entry_defaults_to_zero() {
        let (rows, _) = build_rows(
            &paragraphs(&["1. No key", "1) a", "2) b"]),
            &AnswerKey::new(),
            "quiz",
        );
        assert_eq!(rows[0].question.as_ref().unwrap().question_type, 0);
        assert!(rows.iter().all(|r| r.correctness == 0));
    }

    #[test]
    fn metadata_only_on_first_answer() {
        let key = key(&[(1, &[1])]);
        let (rows, _) = build_rows(
            &paragraphs(&["1. Q", "1) a", "2) b"]),
            &key,
            "group-name",
        );
        let meta = rows[0].question.as_ref().unwrap();
        assert_eq!(meta.group, "group-name");
        assert_eq!(meta.text, "1. Q");
        assert!(rows[1].question.is_none());
    }

    #[test]
    fn preamble_paragraphs_are_dropped() {
        let (rows, count) = build_rows(
            &paragraphs(&["Course intro", "Instructions", "1. Q", "a"]),
            &AnswerKey::new(),
            "quiz",
        );
        assert_eq!(count, 1);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].answer_text, "a");
    }

    #[test]
    fn blank_paragraphs_do_not_advance_counters() {
        let key = key(&[(1, &[1])]);
        let (rows, _) = build_rows(
            &paragraphs(&["1. Q", "", "   ", "1) a"]),
            &key,
            "quiz",
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].correctness, 1);
    }

    #[test]
    fn question_counter_ignores_the_written_number() {
        // Second question is mislabeled "7." but is still question 2.
        let key = key(&[(2, &[1])]);
        let (rows, count) = build_rows(
            &paragraphs(&["1. First", "a", "7. Second", "b"]),
            &key,
            "quiz",
        );
        assert_eq!(count, 2);
        assert_eq!(rows[1].correctness, 1);
    }
}
