use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tempfile::NamedTempFile;
use thiserror::Error;

pub const EXPORT_FILENAME: &str = "scrape-result.json";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("could not serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure the export directory exists; create it if missing.
pub fn ensure_export_dir(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| ExportError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(ExportError::OutputDir(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| ExportError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

/// Writes `{ "result": <result> }` as pretty JSON to `{dir}/scrape-result.json`.
///
/// The file is written to a temp file first and renamed into place, so an
/// earlier export is either fully replaced or left untouched.
pub fn export_result(dir: &Path, result: &Value) -> Result<PathBuf, ExportError> {
    ensure_export_dir(dir)?;

    let document = serde_json::to_string_pretty(&json!({ "result": result }))?;
    let target = dir.join(EXPORT_FILENAME);

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(document.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(&target).map_err(|e| ExportError::Io(e.error))?;
    Ok(target)
}
