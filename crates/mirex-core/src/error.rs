#[derive(Debug, thiserror::Error)]
pub enum MirexError {
    #[error("failed to read docx: {0}")]
    Docx(String),

    #[error("docx archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("document contains no tables")]
    NoTables,

    #[error("no documents were converted")]
    BatchFailed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("xlsx write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
