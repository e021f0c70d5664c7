use std::path::{Path, PathBuf};

use mirex_core::error::MirexError;

use super::convert::{convert_file, ConvertStats};

/// Outcome of one file in a batch run. Failures stay attached to their
/// file instead of aborting the loop.
pub struct FileOutcome {
    pub input: PathBuf,
    pub result: Result<ConvertStats, MirexError>,
}

pub fn run(input_dir: PathBuf) -> Result<(), MirexError> {
    let outcomes = convert_dir(&input_dir)?;

    if outcomes.is_empty() {
        eprintln!("no docx files found in {}", input_dir.display());
        return Ok(());
    }

    let mut converted = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(stats) => {
                converted += 1;
                println!(
                    "{}: {} question(s), {} row(s)",
                    outcome.input.display(),
                    stats.question_count,
                    stats.row_count
                );
            }
            Err(e) => eprintln!("{}: {e}", outcome.input.display()),
        }
    }
    println!("converted {converted} of {} file(s)", outcomes.len());

    if converted == 0 {
        return Err(MirexError::BatchFailed);
    }
    Ok(())
}

/// Convert every docx in `dir`, one outcome per file. Unreadable directory
/// entries are reported and skipped.
fn convert_dir(dir: &Path) -> Result<Vec<FileOutcome>, MirexError> {
    let entries = std::fs::read_dir(dir)?;

    let mut outcomes = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                eprintln!("failed to read directory entry: {e}");
                continue;
            }
        };
        if !is_quiz_docx(&path) {
            continue;
        }
        let output = path.with_extension("xlsx");
        let result = convert_file(&path, &output);
        outcomes.push(FileOutcome {
            input: path,
            result,
        });
    }
    Ok(outcomes)
}

/// Word lock files ("~$...") are skipped along with non-docx entries.
fn is_quiz_docx(path: &Path) -> bool {
    let is_docx = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("docx"))
        .unwrap_or(false);
    let is_lock = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with("~$"))
        .unwrap_or(false);
    is_docx && !is_lock
}
