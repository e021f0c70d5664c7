pub mod docx;

/// One table from the document body, rows of cell text in document order.
#[derive(Debug, Clone, Default)]
pub struct TableData {
    pub rows: Vec<Vec<String>>,
}

/// Content extracted from a single docx file.
#[derive(Debug, Clone, Default)]
pub struct DocxContent {
    /// Body-level paragraphs in document order. Paragraphs inside table
    /// cells are part of the cell text, not listed here.
    pub paragraphs: Vec<String>,
    pub tables: Vec<TableData>,
}
