use std::path::{Path, PathBuf};

use mirex_core::error::MirexError;

/// Per-file conversion summary, also used by the batch driver.
pub struct ConvertStats {
    pub question_count: u32,
    pub row_count: usize,
    pub skipped_cells: usize,
}

pub fn run(input_file: PathBuf, out: Option<PathBuf>) -> Result<(), MirexError> {
    let output_path = out.unwrap_or_else(|| input_file.with_extension("xlsx"));
    let stats = convert_file(&input_file, &output_path)?;
    eprintln!(
        "{}: {} question(s), {} row(s) -> {}",
        input_file.display(),
        stats.question_count,
        stats.row_count,
        output_path.display()
    );
    if stats.skipped_cells > 0 {
        eprintln!("  {} key cell(s) skipped", stats.skipped_cells);
    }
    Ok(())
}

/// Convert one document and write its xlsx. Skipped answer-key cells are
/// reported to stderr but do not fail the file.
pub fn convert_file(input: &Path, output: &Path) -> Result<ConvertStats, MirexError> {
    let bytes = std::fs::read(input)?;
    let group = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let conversion = mirex_core::convert_docx(&bytes, &group)?;

    for cell in &conversion.skipped_cells {
        eprintln!(
            "  warning: skipped key cell '{}': {}",
            cell.cell_text, cell.reason
        );
    }

    mirex_core::export::xlsx::write_xlsx(&conversion.rows, output)?;

    Ok(ConvertStats {
        question_count: conversion.question_count,
        row_count: conversion.rows.len(),
        skipped_cells: conversion.skipped_cells.len(),
    })
}
