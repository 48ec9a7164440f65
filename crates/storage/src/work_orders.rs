//! `work_orders.csv` ingestion (§6): one row per [`WorkOrder`]. Column
//! order is irrelevant; all nine columns are required.

use crate::csv_util::ParsedCsv;
use crate::error::StorageError;
use lineplan_core::{SimTime, WorkOrder};
use std::path::Path;

pub fn load_work_orders(path: &Path) -> Result<Vec<WorkOrder>, StorageError> {
    let csv = ParsedCsv::read(path)?;
    csv.rows().map(parse_row).collect()
}

fn parse_row(row: crate::csv_util::RowView<'_>) -> Result<WorkOrder, StorageError> {
    let created_at = parse_timestamp(&row, "created_at")?;
    let due_date = parse_timestamp(&row, "due_date")?;

    Ok(WorkOrder {
        of_id: row.get("of_id")?.into(),
        product: row.get("product")?.to_string(),
        format: row.get("format")?.into(),
        created_at,
        due_date,
        priority: parse_int(&row, "priority")?,
        qty: parse_int(&row, "qty")?,
        nominal_rate_u_per_h: parse_int(&row, "nominal_rate_u_per_h")?,
        nominal_duration_min: parse_int(&row, "nominal_duration_min")?,
    })
}

fn parse_timestamp(row: &crate::csv_util::RowView<'_>, column: &'static str) -> Result<SimTime, StorageError> {
    let value = row.get(column)?;
    SimTime::parse(value).map_err(|_| StorageError::MalformedTimestamp {
        path: row.path.to_string(),
        line: row.line,
        value: value.to_string(),
    })
}

fn parse_int<T: std::str::FromStr>(row: &crate::csv_util::RowView<'_>, column: &'static str) -> Result<T, StorageError> {
    row.get(column)?.parse::<T>().map_err(|_| StorageError::MalformedRow {
        path: row.path.to_string(),
        line: row.line,
        column,
        reason: "not an integer".to_string(),
    })
}

#[cfg(test)]
#[path = "work_orders_tests.rs"]
mod tests;
