//! Shop-floor disturbance events and their late-arrival policy.

use crate::time::SimTime;
use serde::{Deserialize, Serialize};

/// The six disturbance kinds the engine understands. Unknown values parsed
/// from external input land in [`EventType::Unknown`] rather than being
/// rejected — see `handle_event`'s treatment of unknown types, which
/// intentionally does not mutate state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    ShiftStart,
    ShiftStop,
    BreakdownStart,
    BreakdownEnd,
    SpeedChange,
    UrgentOrder,
    #[serde(other)]
    Unknown,
}

crate::simple_display! {
    EventType {
        ShiftStart => "SHIFT_START",
        ShiftStop => "SHIFT_STOP",
        BreakdownStart => "BREAKDOWN_START",
        BreakdownEnd => "BREAKDOWN_END",
        SpeedChange => "SPEED_CHANGE",
        UrgentOrder => "URGENT_ORDER",
        Unknown => "UNKNOWN",
    }
}

impl EventType {
    /// Parse the wire-format type tag (`"SHIFT_START"`, ...). Anything
    /// unrecognized maps to [`EventType::Unknown`] rather than an error —
    /// the CSV/HTTP boundary tolerates forward-incompatible event types.
    pub fn parse(s: &str) -> Self {
        match s {
            "SHIFT_START" => Self::ShiftStart,
            "SHIFT_STOP" => Self::ShiftStop,
            "BREAKDOWN_START" => Self::BreakdownStart,
            "BREAKDOWN_END" => Self::BreakdownEnd,
            "SPEED_CHANGE" => Self::SpeedChange,
            "URGENT_ORDER" => Self::UrgentOrder,
            _ => Self::Unknown,
        }
    }
}

/// A single disturbance: what happened, when, and a free-form payload
/// whose grammar depends on `event_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub timestamp: SimTime,
    pub event_type: EventType,
    #[serde(default)]
    pub value: String,
}

impl Event {
    pub fn new(timestamp: SimTime, event_type: EventType, value: impl Into<String>) -> Self {
        Self { timestamp, event_type, value: value.into() }
    }
}

/// An [`Event`] as seen by the engine: wraps the event with when the
/// engine actually observed it and where it came from. `receive_time >=
/// event.timestamp` is typical; the reverse ("future-dated" event) is
/// allowed and simply advances time when applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingEvent {
    pub receive_time: SimTime,
    pub event: Event,
    pub source: String,
}

/// What to do with an event whose lateness is nonzero but within
/// `max_event_lateness_min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LatePolicy {
    /// Apply the event at the engine's current `now` (no rewind).
    ApplyNow,
    /// Drop the event; record it as ignored.
    Ignore,
}

crate::simple_display! {
    LatePolicy {
        ApplyNow => "APPLY_NOW",
        Ignore => "IGNORE",
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
