use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};

use crate::error::{Result, ToolError};
use crate::model::Dataset;

/// Reads the tabular contents of a workbook as text, with no numeric or date
/// coercion.
///
/// The first row of the selected sheet supplies the column names and every
/// following row becomes one dataset row. When `sheet` is `None` the first
/// sheet in the workbook is used.
pub fn read_dataset(path: &Path, sheet: Option<&str>) -> Result<Dataset> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ToolError::InvalidWorkbook("workbook has no sheets".into()))?,
    };

    let range = load_sheet(&mut workbook, &sheet_name)?;
    let mut rows = range.rows();

    let columns: Vec<String> = rows
        .next()
        .ok_or_else(|| {
            ToolError::InvalidWorkbook(format!("sheet '{sheet_name}' has no header row"))
        })?
        .iter()
        .map(cell_to_string)
        .collect();

    let data: Vec<Vec<String>> = rows
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Dataset::new(columns, data)
}

fn load_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    name: &str,
) -> Result<calamine::Range<DataType>> {
    let range = workbook
        .worksheet_range(name)
        .ok_or_else(|| ToolError::InvalidWorkbook(format!("missing sheet '{name}'")))?;
    Ok(range?)
}

fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::String(value) => value.clone(),
        DataType::Float(value) => value.to_string(),
        DataType::Int(value) => value.to_string(),
        DataType::Bool(value) => value.to_string(),
        DataType::Empty => String::new(),
        other => other.to_string(),
    }
}
