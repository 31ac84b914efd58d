//! Seed-file loading: reads a whole-file JSON array of order records and
//! validates it before any insert is attempted.

use crate::document::OrderRecord;
use crate::errors::StoreError;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: u64,
}

/// Reads and parses a seed file.
///
/// # Errors
/// `Validation` when the file is missing or is not a JSON array of order
/// records; `Io` for other read failures. Parsing happens strictly before
/// store access, so nothing is inserted on any error path here.
pub fn read_seed_file(path: &Path) -> Result<Vec<OrderRecord>, StoreError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            StoreError::Validation(format!("seed file does not exist: {}", path.display()))
        } else {
            StoreError::Io(e)
        }
    })?;
    serde_json::from_str::<Vec<OrderRecord>>(&raw).map_err(|e| {
        StoreError::Validation(format!(
            "seed file {} is not a JSON array of order records: {e}",
            path.display()
        ))
    })
}
