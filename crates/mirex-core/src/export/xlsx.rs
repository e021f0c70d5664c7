use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet};

use crate::error::MirexError;
use crate::model::OutputRow;

/// Column headers of the Mirapolis import template, in column order.
pub const HEADERS: [&str; 23] = [
    "Название группы",
    "Код",
    "Название вопроса",
    "Тип",
    "Категория",
    "Время",
    "Текст",
    "Картинка",
    "Разрешить комментарий к ответу",
    "Баллы",
    "Считать по ответам",
    "Попыток",
    "Сообщение при правильном ответе",
    "Сообщение при неправильном ответе",
    "Порядок ответов",
    "Кол-во столбцов",
    "Использовать нейтральные",
    "Макс. кол-во ответов",
    "Ответ",
    "Картинка ответа",
    "Балл",
    "Правильность",
    "Комментарий",
];

// Columns the converter fills in; the rest stay blank in the template.
const COL_GROUP: u16 = 0;
const COL_QUESTION_NAME: u16 = 2;
const COL_TYPE: u16 = 3;
const COL_TEXT: u16 = 6;
const COL_ALLOW_COMMENT: u16 = 8;
const COL_POINTS: u16 = 9;
const COL_COUNT_BY_ANSWERS: u16 = 10;
const COL_ANSWER_ORDER: u16 = 14;
const COL_COLUMNS: u16 = 15;
const COL_USE_NEUTRAL: u16 = 16;
const COL_ANSWER: u16 = 18;
const COL_ANSWER_SCORE: u16 = 20;
const COL_CORRECTNESS: u16 = 21;

/// Write the rows as an xlsx file at `path`, header row first, order
/// preserved.
pub fn write_xlsx(rows: &[OutputRow], path: &Path) -> Result<(), MirexError> {
    let mut workbook = build_workbook(rows)?;
    workbook.save(path)?;
    Ok(())
}

/// Serialize to xlsx bytes without touching the filesystem.
pub fn to_xlsx_bytes(rows: &[OutputRow]) -> Result<Vec<u8>, MirexError> {
    let mut workbook = build_workbook(rows)?;
    Ok(workbook.save_to_buffer()?)
}

fn build_workbook(rows: &[OutputRow]) -> Result<Workbook, MirexError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (i, row) in rows.iter().enumerate() {
        write_row(sheet, (i + 1) as u32, row)?;
    }

    Ok(workbook)
}

fn write_row(sheet: &mut Worksheet, r: u32, row: &OutputRow) -> Result<(), MirexError> {
    if let Some(meta) = &row.question {
        sheet.write_string(r, COL_GROUP, meta.group.as_str())?;
        sheet.write_string(r, COL_QUESTION_NAME, meta.text.as_str())?;
        sheet.write_number(r, COL_TYPE, f64::from(meta.question_type))?;
        sheet.write_string(r, COL_TEXT, meta.text.as_str())?;
        // Template defaults Mirapolis expects on the question row.
        sheet.write_number(r, COL_ALLOW_COMMENT, 1.0)?;
        sheet.write_number(r, COL_POINTS, 1.0)?;
        sheet.write_number(r, COL_COUNT_BY_ANSWERS, 0.0)?;
        sheet.write_number(r, COL_ANSWER_ORDER, 1.0)?;
        sheet.write_number(r, COL_COLUMNS, 1.0)?;
        sheet.write_number(r, COL_USE_NEUTRAL, 0.0)?;
        sheet.write_number(r, COL_ANSWER_SCORE, 1.0)?;
    }
    sheet.write_string(r, COL_ANSWER, row.answer_text.as_str())?;
    sheet.write_number(r, COL_CORRECTNESS, f64::from(row.correctness))?;
    Ok(())
}
