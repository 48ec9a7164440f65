//! `setup_matrix.csv` ingestion (§6): `(from_format, to_format) -> minutes`.
//! Missing pairs default to 0 — enforced by [`lineplan_core::SetupMatrix`]
//! itself, not by this loader.

use crate::csv_util::ParsedCsv;
use crate::error::StorageError;
use lineplan_core::SetupMatrix;
use std::path::Path;

pub fn load_setup_matrix(path: &Path) -> Result<SetupMatrix, StorageError> {
    let csv = ParsedCsv::read(path)?;
    let mut matrix = SetupMatrix::new();
    for row in csv.rows() {
        let from = row.get("from_format")?;
        let to = row.get("to_format")?;
        let minutes = row.get("setup_min")?.parse::<u32>().map_err(|_| StorageError::MalformedRow {
            path: row.path.to_string(),
            line: row.line,
            column: "setup_min",
            reason: "not a non-negative integer".to_string(),
        })?;
        matrix.insert(from, to, minutes);
    }
    Ok(matrix)
}

#[cfg(test)]
#[path = "setup_matrix_tests.rs"]
mod tests;
