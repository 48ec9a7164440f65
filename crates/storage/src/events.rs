//! `events.csv` ingestion (§6): `timestamp, type, value`. A malformed
//! timestamp is rejected at this boundary (§7) — it never reaches
//! `Event`. An unrecognized `type` tag is not rejected here; it is
//! parsed into [`EventType::Unknown`] and handled (tolerated, not
//! mutating state) once it reaches the engine.

use crate::csv_util::ParsedCsv;
use crate::error::StorageError;
use lineplan_core::{Event, EventType, SimTime};
use std::path::Path;

pub fn load_events(path: &Path) -> Result<Vec<Event>, StorageError> {
    let csv = ParsedCsv::read(path)?;
    csv.rows().map(parse_row).collect()
}

fn parse_row(row: crate::csv_util::RowView<'_>) -> Result<Event, StorageError> {
    let timestamp_str = row.get("timestamp")?;
    let timestamp = SimTime::parse(timestamp_str).map_err(|_| StorageError::MalformedTimestamp {
        path: row.path.to_string(),
        line: row.line,
        value: timestamp_str.to_string(),
    })?;
    let event_type = EventType::parse(row.get("type")?);
    let value = row.get("value").unwrap_or_default().to_string();
    Ok(Event::new(timestamp, event_type, value))
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
