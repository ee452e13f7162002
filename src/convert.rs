use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::io::excel_read;
use crate::io::sql_write;
use crate::model::TableName;
use crate::script;

/// Converts a workbook into a batched SQL script on disk.
///
/// The whole dataset is read into memory, the script is built in full, and
/// only then is the output file written. Nothing is written when any step
/// fails.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display(), table = %table, ?sheet)
)]
pub fn excel_to_sql(
    input: &Path,
    output: &Path,
    table: &TableName,
    sheet: Option<&str>,
) -> Result<()> {
    let dataset = excel_read::read_dataset(input, sheet)?;
    info!(
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "read dataset from workbook"
    );

    let script = script::build_script(&dataset, table);
    debug!(batches = script.batch_count(), "script built");

    sql_write::write_script(output, &script)?;
    info!(batches = script.batch_count(), "SQL script written");
    Ok(())
}

/// Derives the default output path for a workbook: the input's base name
/// with an `_output.sql` suffix, placed alongside the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let base = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{base}_output.sql"))
}
