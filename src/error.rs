use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the failure cases that can occur while a workbook is
/// read, a script is built, or the result is persisted.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading prompts or resolving paths.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Raised when a workbook or sheet does not follow the expected shape.
    #[error("invalid workbook structure: {0}")]
    InvalidWorkbook(String),

    /// Raised when a dataset is constructed without any columns.
    #[error("dataset has no columns")]
    EmptyColumns,

    /// Raised when a data row does not line up with the header row. `row` is
    /// the 1-based position of the offending row.
    #[error("row {row} has {found} cells, expected {expected}")]
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// Raised when the generated script cannot be persisted to its
    /// destination.
    #[error("failed to write SQL script to {}: {}", .path.display(), .source)]
    ScriptWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
