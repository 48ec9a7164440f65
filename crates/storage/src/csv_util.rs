//! A thin header-indexed wrapper around [`csv::Reader`] for the three
//! flat input files this crate consumes, grounded on the pack's own use
//! of the `csv` crate for delimited-text ingestion (e.g.
//! `knhk-dflss/src/internal/chart.rs`'s `csv::Reader::from_path`).

use crate::error::StorageError;
use std::collections::HashMap;
use std::path::Path;

pub struct ParsedCsv {
    pub path: String,
    header: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

pub struct RowView<'a> {
    pub path: &'a str,
    pub line: usize,
    header: &'a HashMap<String, usize>,
    fields: &'a [String],
}

impl<'a> RowView<'a> {
    pub fn get(&self, column: &'static str) -> Result<&'a str, StorageError> {
        let idx = *self.header.get(column).ok_or_else(|| StorageError::MissingColumn {
            path: self.path.to_string(),
            line: self.line,
            column,
        })?;
        self.fields
            .get(idx)
            .map(String::as_str)
            .ok_or_else(|| StorageError::MissingColumn { path: self.path.to_string(), line: self.line, column })
    }
}

impl ParsedCsv {
    pub fn read(path: &Path) -> Result<Self, StorageError> {
        let path_str = path.display().to_string();
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path).map_err(|err| {
            csv_error_to_storage(&path_str, 0, err)
        })?;

        let header: HashMap<String, usize> = reader
            .headers()
            .map_err(|err| csv_error_to_storage(&path_str, 0, err))?
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), i))
            .collect();
        if header.is_empty() {
            return Err(StorageError::EmptyFile { path: path_str });
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|err| csv_error_to_storage(&path_str, rows.len() + 2, err))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { path: path_str, header, rows })
    }

    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> {
        self.rows.iter().enumerate().map(move |(i, fields)| RowView {
            path: &self.path,
            line: i + 2, // +1 for 1-indexing, +1 for the header row
            header: &self.header,
            fields,
        })
    }
}

fn csv_error_to_storage(path: &str, line: usize, err: csv::Error) -> StorageError {
    match err.into_kind() {
        csv::ErrorKind::Io(source) => StorageError::Io { path: path.to_string(), source },
        other => StorageError::MalformedRow { path: path.to_string(), line, column: "row", reason: other.to_string() },
    }
}
