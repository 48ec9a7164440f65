//! The single mutable aggregate the scheduling engine operates on.
//!
//! `EngineState` is pure data — no mutex, no behavior beyond a handful of
//! read-only helpers. The state machine that mutates it lives in
//! `lineplan-engine`, keeping pure state separate from the mutex-guarded
//! runtime that mutates it under a lock.

use crate::config::SchedulerConfig;
use crate::journal::JournalEntry;
use crate::setup_matrix::SetupMatrix;
use crate::time::SimTime;
use crate::work_order::WorkOrder;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// The work order currently occupying the machine, plus the counters
/// that track its progress through setup and work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentJob {
    pub work_order: WorkOrder,
    pub remaining_setup_min: u32,
    pub remaining_work_nominal_min: u32,
    /// Fractional nominal minutes accumulated but not yet floored off
    /// `remaining_work_nominal_min`. See the time engine's work phase.
    pub work_acc: f64,
}

/// A finished work order, as recorded in `EngineState::completed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedOrder {
    pub of_id: SmolStr,
    pub finished_at: SimTime,
}

/// Minutes-elapsed accounting, one bucket per machine state. Exactly one
/// bucket is incremented per simulated minute (§4.1 step 1); their sum
/// always equals minutes elapsed since construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiCounters {
    pub downtime_min: u64,
    pub stopped_min: u64,
    pub idle_min: u64,
    pub producing_min: u64,
}

impl KpiCounters {
    pub fn total(&self) -> u64 {
        self.downtime_min + self.stopped_min + self.idle_min + self.producing_min
    }
}

/// Active-breakdown bookkeeping. `down_start_time` is `Some` exactly when
/// `is_down` is true, except transiently while an event is being applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakdownTracker {
    pub down_start_time: Option<SimTime>,
    pub down_reason: Option<String>,
    pub last_breakdown_duration_min: Option<u32>,
}

/// The scheduling engine's full mutable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineState {
    pub now: SimTime,
    pub is_running: bool,
    pub is_down: bool,
    pub speed_factor: f64,
    pub current_format: Option<SmolStr>,

    pub current_job: Option<CurrentJob>,
    pub queue: Vec<WorkOrder>,
    pub pool: Vec<WorkOrder>,

    pub breakdown: BreakdownTracker,
    pub policy: SchedulerConfig,
    pub kpi: KpiCounters,
    pub completed: Vec<CompletedOrder>,
    pub event_log: Vec<JournalEntry>,

    /// Shared, immutable setup-cost table. Cheap to clone (`Arc` at the
    /// engine-façade level); stored by value here since `EngineState`
    /// itself is the thing that gets deep-copied for day simulation.
    pub setup_matrix: SetupMatrix,
}

impl EngineState {
    pub fn new(now: SimTime, policy: SchedulerConfig, setup_matrix: SetupMatrix) -> Self {
        Self {
            now,
            is_running: false,
            is_down: false,
            speed_factor: 1.0,
            current_format: None,
            current_job: None,
            queue: Vec::new(),
            pool: Vec::new(),
            breakdown: BreakdownTracker::default(),
            policy,
            kpi: KpiCounters::default(),
            completed: Vec::new(),
            event_log: Vec::new(),
            setup_matrix,
        }
    }

    /// Whether `of_id` is already admitted (in queue or running) — used
    /// by pool→queue admission to avoid double-admitting.
    pub fn is_admitted(&self, of_id: &str) -> bool {
        self.queue.iter().any(|w| w.of_id.as_str() == of_id)
            || self.current_job.as_ref().is_some_and(|c| c.work_order.of_id.as_str() == of_id)
    }

    pub fn sort_queue(&mut self) {
        self.queue.sort_by_key(WorkOrder::queue_key);
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
