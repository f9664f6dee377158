// ============================================================
// Layer 4 — Dataset Loader
// ============================================================
// Reads a line-oriented dataset file into memory.
//
// Every trial calls this again instead of reusing a cached
// copy, so each trial shuffles a fresh, independent Dataset.
//
// The file is read as bytes and split on '\n' only, so CRLF
// endings and non-UTF-8 payloads reach the split files as they
// were. Blank lines are skipped; everything else becomes a
// Record holding the untouched line.

use std::{fs, io, path::Path};

use crate::domain::record::{Dataset, Record};
use crate::error::{EvalError, Result};

/// Load every record from `path`.
///
/// Fails with `EvalError::Input` when the file is missing or
/// has no records.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            EvalError::Input(format!("dataset '{}' does not exist", path.display()))
        }
        _ => EvalError::io(path, e),
    })?;

    let records: Dataset = bytes
        .split(|&b| b == b'\n')
        .filter_map(|line| Record::parse(line))
        .collect();

    if records.is_empty() {
        return Err(EvalError::Input(format!(
            "dataset '{}' is empty",
            path.display()
        )));
    }

    tracing::debug!("Loaded {} records from '{}'", records.len(), path.display());
    Ok(records)
}
