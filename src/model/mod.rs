use std::fmt;

use crate::error::{Result, ToolError};

/// Tabular data extracted from a workbook: ordered column names plus ordered
/// rows of cell text, positionally aligned to the columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Creates a dataset after validating its shape: the column list must be
    /// non-empty and every row must carry exactly one cell per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if columns.is_empty() {
            return Err(ToolError::EmptyColumns);
        }
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(ToolError::ColumnCountMismatch {
                    row: index + 1,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Raw column names in sheet order, exactly as they appeared in the
    /// header row.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows in sheet order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Table identifier supplied by the caller. The name is rendered verbatim
/// into the generated statements; no quoting or validation is applied.
/// Temporary tables render with the `#` prefix understood by T-SQL.
#[derive(Debug, Clone, PartialEq)]
pub struct TableName {
    name: String,
    temporary: bool,
}

impl TableName {
    /// Creates a regular table identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            temporary: false,
        }
    }

    /// Creates a session-local temporary table identifier.
    pub fn temporary(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            temporary: true,
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.temporary {
            write!(f, "#{}", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}
