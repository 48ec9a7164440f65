//! Day simulator: runs a cloned engine minute-by-minute over a window,
//! draining incoming events and taking periodic snapshots, without
//! mutating the live engine.

use crate::{admission, dispatcher, handle_event, time_engine};
use lineplan_core::{EngineState, EventType, IncomingEvent, JournalEntry, JournalStatus, KpiCounters, SimTime};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// How many trailing journal entries `simulate_day` returns in
/// `event_log_tail`; chosen to match a typical event-log page size.
const EVENT_LOG_TAIL_LEN: usize = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimStats {
    pub events_applied: u32,
    pub events_ignored: u32,
    pub late_events_applied: u32,
    pub replans: u32,
    pub breakdown_replans: u32,
}

/// A read-only view of engine state at a given instant, taken every
/// `report_every_min` simulated minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub at: SimTime,
    pub kpi: KpiCounters,
    pub current_format: Option<SmolStr>,
    pub current_job_of_id: Option<SmolStr>,
    pub queue_len: usize,
    pub completed_count: usize,
}

fn snapshot(state: &EngineState) -> Snapshot {
    Snapshot {
        at: state.now,
        kpi: state.kpi,
        current_format: state.current_format.clone(),
        current_job_of_id: state.current_job.as_ref().map(|j| j.work_order.of_id.clone()),
        queue_len: state.queue.len(),
        completed_count: state.completed.len(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimResult {
    pub stats: SimStats,
    pub reports: Vec<Snapshot>,
    pub last_state: EngineState,
    pub event_log_tail: Vec<JournalEntry>,
}

/// Run `incoming` against a clone of `live` from `day_start` to
/// `day_end`, reporting every `report_every_min` minutes. The live
/// engine is never touched.
pub fn simulate_day(
    live: &EngineState,
    day_start: SimTime,
    day_end: SimTime,
    mut incoming: Vec<IncomingEvent>,
    report_every_min: u32,
) -> SimResult {
    let mut state = live.clone();
    incoming.sort_by_key(|ie| ie.receive_time);
    let mut incoming = incoming.into_iter().peekable();

    let mut stats = SimStats::default();
    let mut reports = Vec::new();
    let mut next_report = day_start;
    let mut t = day_start;

    loop {
        while let Some(ie) = incoming.next_if(|ie| ie.receive_time <= t) {
            let entry = handle_event::handle_incoming(&mut state, ie.receive_time, ie.event, ie.source);
            record(&mut stats, &entry);
        }

        // A drained event may have been future-dated (§3: receive_time <= t
        // but event.timestamp > t is allowed), which already advanced `now`
        // ahead of `t`. Only step forward here, never rewind.
        if t > state.now {
            time_engine::advance_to(&mut state, t);
            admission::refresh_queue_from_pool(&mut state);
            dispatcher::start_next_if_possible(&mut state);
        }

        if t >= next_report {
            reports.push(snapshot(&state));
            next_report = next_report.add_minutes(i64::from(report_every_min));
        }

        if t >= day_end {
            break;
        }
        t = t.add_minutes(1);
    }

    let tail_len = state.event_log.len().min(EVENT_LOG_TAIL_LEN);
    let event_log_tail = state.event_log[state.event_log.len() - tail_len..].to_vec();

    SimResult { stats, reports, last_state: state, event_log_tail }
}

fn record(stats: &mut SimStats, entry: &JournalEntry) {
    match entry.status {
        JournalStatus::Ok => {
            stats.events_applied += 1;
            if entry.late_applied {
                stats.late_events_applied += 1;
            }
            if entry.replanned {
                stats.replans += 1;
                if entry.event_type == EventType::BreakdownEnd {
                    stats.breakdown_replans += 1;
                }
            }
        }
        JournalStatus::Ignored => stats.events_ignored += 1,
    }
}

#[cfg(test)]
#[path = "day_simulator_tests.rs"]
mod tests;
