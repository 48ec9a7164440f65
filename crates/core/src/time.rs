//! Minute-resolution simulated time.
//!
//! The engine's `now` is shop-floor simulated time, not the process's
//! wall clock — it advances one minute at a time and can run far ahead
//! of or behind real time (day simulation, compressed realtime). The
//! realtime driver (`lineplan-engine`) keeps its own wall-clock tick
//! loop on `tokio::time`, entirely separate from [`SimTime`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An instant in simulated shop-floor time, truncated to whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimTime(NaiveDateTime);

impl SimTime {
    pub fn new(dt: NaiveDateTime) -> Self {
        Self(dt.with_second_and_nanos_zero())
    }

    /// Parse an ISO-8601 minute-resolution timestamp (`2026-01-05T08:00`).
    pub fn parse(s: &str) -> Result<Self, SimTimeParseError> {
        let s = s.trim();
        let dt = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
            .map_err(|_| SimTimeParseError { input: s.to_string() })?;
        Ok(Self::new(dt))
    }

    pub fn inner(&self) -> NaiveDateTime {
        self.0
    }

    pub fn add_minutes(self, minutes: i64) -> Self {
        Self(self.0 + chrono::Duration::minutes(minutes))
    }

    /// Whole minutes between `self` and `other`, floored at 0 if `other <= self`.
    pub fn minutes_since(self, other: SimTime) -> i64 {
        (self.0 - other.0).num_minutes().max(0)
    }

    /// Signed whole minutes from `self` to `other`.
    pub fn minutes_until(self, other: SimTime) -> i64 {
        (other.0 - self.0).num_minutes()
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M"))
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("malformed timestamp: {input:?}")]
pub struct SimTimeParseError {
    pub input: String,
}

trait WithSecondAndNanosZero {
    fn with_second_and_nanos_zero(self) -> Self;
}

impl WithSecondAndNanosZero for NaiveDateTime {
    fn with_second_and_nanos_zero(self) -> Self {
        use chrono::Timelike;
        self.with_second(0)
            .and_then(|d| d.with_nanosecond(0))
            .unwrap_or(self)
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
