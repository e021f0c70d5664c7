use std::path::PathBuf;

use mirex_core::error::MirexError;

use crate::output;

pub fn run(input_file: PathBuf, output_format: &str) -> Result<(), MirexError> {
    let bytes = std::fs::read(&input_file)?;
    let group = input_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let conversion = mirex_core::convert_docx(&bytes, &group)?;

    match output_format {
        "json" => output::json::print(&conversion)?,
        _ => output::table::print(&conversion),
    }

    Ok(())
}
