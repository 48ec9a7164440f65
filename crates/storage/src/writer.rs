//! Write-side counterpart to [`crate::work_orders`] / [`crate::events`] /
//! [`crate::setup_matrix`], used by `lineplan-cli`'s demo-data generator
//! to persist a [`crate::synthetic::generate_day`] output the same way
//! the original `generate_file.py` writes its three CSVs.

use crate::error::StorageError;
use lineplan_core::{Event, SetupMatrix, WorkOrder};
use std::path::Path;

fn write_csv(path: &Path, header: &[&str], rows: impl IntoIterator<Item = Vec<String>>) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|source| StorageError::Io { path: path.display().to_string(), source })?;
    }
    let mut writer = csv::WriterBuilder::new().from_path(path).map_err(csv_write_err(path))?;
    writer.write_record(header).map_err(csv_write_err(path))?;
    for row in rows {
        writer.write_record(&row).map_err(csv_write_err(path))?;
    }
    writer.flush().map_err(|source| StorageError::Io { path: path.display().to_string(), source })
}

fn csv_write_err(path: &Path) -> impl Fn(csv::Error) -> StorageError + '_ {
    move |err| match err.into_kind() {
        csv::ErrorKind::Io(source) => StorageError::Io { path: path.display().to_string(), source },
        other => StorageError::MalformedRow { path: path.display().to_string(), line: 0, column: "row", reason: other.to_string() },
    }
}

pub fn write_work_orders(path: &Path, orders: &[WorkOrder]) -> Result<(), StorageError> {
    write_csv(
        path,
        &["of_id", "created_at", "due_date", "priority", "product", "format", "qty", "nominal_rate_u_per_h", "nominal_duration_min"],
        orders.iter().map(|o| {
            vec![
                o.of_id.to_string(),
                o.created_at.to_string(),
                o.due_date.to_string(),
                o.priority.to_string(),
                o.product.clone(),
                o.format.to_string(),
                o.qty.to_string(),
                o.nominal_rate_u_per_h.to_string(),
                o.nominal_duration_min.to_string(),
            ]
        }),
    )
}

pub fn write_events(path: &Path, events: &[Event]) -> Result<(), StorageError> {
    write_csv(
        path,
        &["timestamp", "type", "value"],
        events.iter().map(|e| vec![e.timestamp.to_string(), e.event_type.to_string(), e.value.clone()]),
    )
}

pub fn write_setup_matrix(path: &Path, formats: &[String], matrix: &SetupMatrix) -> Result<(), StorageError> {
    let mut rows = Vec::new();
    for from in formats {
        for to in formats {
            rows.push(vec![from.clone(), to.clone(), matrix.lookup(Some(from), to).to_string()]);
        }
    }
    write_csv(path, &["from_format", "to_format", "setup_min"], rows)
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
