use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, ToolError};
use crate::script::SqlScript;

/// Persists a fully built script to the given path, replacing any existing
/// file.
///
/// The text lands in a temporary file first and is renamed over the
/// destination, so a failure part-way through never leaves a truncated
/// script behind.
pub fn write_script(path: &Path, script: &SqlScript) -> Result<()> {
    // The temporary file lives next to the destination so the final rename
    // stays on one filesystem.
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_error = |source: std::io::Error| ToolError::ScriptWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = NamedTempFile::new_in(directory).map_err(write_error)?;
    file.write_all(script.as_sql().as_bytes())
        .map_err(write_error)?;
    file.flush().map_err(write_error)?;
    file.persist(path).map_err(|error| write_error(error.error))?;
    Ok(())
}
