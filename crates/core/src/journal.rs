//! The append-only decision journal.

use crate::event::EventType;
use crate::time::SimTime;
use serde::{Deserialize, Serialize};

/// Whether an event mutated engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JournalStatus {
    Ok,
    Ignored,
}

crate::simple_display! {
    JournalStatus {
        Ok => "ok",
        Ignored => "ignored",
    }
}

/// One entry in the engine's append-only decision log, emitted for every
/// call to `handle_event` / `handle_incoming`.
///
/// Two consecutive entries obey `e1.engine_now_after <= e2.engine_now_before`
/// — the journal reflects application order, not receipt order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub received_at: SimTime,
    pub source: String,
    pub engine_now_before: SimTime,
    pub event_timestamp: SimTime,
    pub event_type: EventType,
    pub value: String,
    pub status: JournalStatus,
    pub reason: String,
    pub late_applied: bool,
    pub replanned: bool,
    pub replan_reason: String,
    pub breakdown_duration_min: Option<u32>,
    pub engine_now_after: SimTime,
}

#[cfg(test)]
#[path = "journal_tests.rs"]
mod tests;
