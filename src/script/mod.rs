use crate::model::{Dataset, TableName};

/// Maximum number of rows emitted in a single INSERT statement. Batches are
/// capped to stay under the row-per-statement limits of common engines.
pub const MAX_ROWS_PER_INSERT: usize = 999;

/// A fully built SQL script together with the number of INSERT batches it
/// contains. The text is materialized in memory before anything touches the
/// filesystem.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlScript {
    sql: String,
    batches: usize,
}

impl SqlScript {
    /// Full script text.
    pub fn as_sql(&self) -> &str {
        &self.sql
    }

    /// Number of INSERT statements in the script.
    pub fn batch_count(&self) -> usize {
        self.batches
    }
}

/// Builds the full SQL script for a dataset: one CREATE TABLE statement with
/// a `varchar(255)` column per sanitized header, a pair of commented-out
/// convenience statements, and one INSERT statement per batch of up to
/// [`MAX_ROWS_PER_INSERT`] rows, in the original row order.
///
/// A dataset with zero rows produces the CREATE TABLE block alone.
pub fn build_script(dataset: &Dataset, table: &TableName) -> SqlScript {
    let headers: Vec<String> = dataset
        .columns()
        .iter()
        .map(|column| sanitize_identifier(column))
        .collect();

    let mut sql = format!("CREATE TABLE {table} (\n");
    let definitions: Vec<String> = headers
        .iter()
        .map(|header| format!("    [{header}] varchar(255)"))
        .collect();
    sql.push_str(&definitions.join(",\n"));
    sql.push_str("\n);\n");
    sql.push_str(&format!("\n-- SELECT * FROM {table};\n"));
    sql.push_str(&format!("-- DROP TABLE {table};\n"));

    let column_list: Vec<String> = headers
        .iter()
        .map(|header| format!("   [{header}]"))
        .collect();
    let insert_header = format!(
        "INSERT INTO {table} (\n{}\n) VALUES\n",
        column_list.join(",\n")
    );

    let mut batches = 0;
    for batch in dataset.rows().chunks(MAX_ROWS_PER_INSERT) {
        // One blank line separates the CREATE TABLE block from the first
        // INSERT; later batches follow back to back.
        if batches == 0 {
            sql.push('\n');
        }
        let tuples: Vec<String> = batch.iter().map(|row| value_tuple(row)).collect();
        sql.push_str(&insert_header);
        sql.push_str(&tuples.join(",\n"));
        sql.push_str(";\n");
        batches += 1;
    }

    SqlScript { sql, batches }
}

/// Sanitizes a column header for use as a SQL identifier by replacing each
/// space with an underscore. All other characters pass through untouched.
pub fn sanitize_identifier(header: &str) -> String {
    header.replace(' ', "_")
}

/// Renders a cell as a quoted SQL string literal. Single quotes are doubled
/// per SQL literal escaping; backslashes are normalized to forward slashes,
/// which downstream consumers of these scripts rely on. Empty cells render
/// as `''`.
pub fn escape_value(cell: &str) -> String {
    let escaped = cell.replace('\'', "''").replace('\\', "/");
    format!("'{escaped}'")
}

fn value_tuple(row: &[String]) -> String {
    let values: Vec<String> = row.iter().map(|cell| escape_value(cell)).collect();
    format!("({})", values.join(","))
}
