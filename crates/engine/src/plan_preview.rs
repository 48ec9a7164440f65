//! Plan preview: a read-only projection of the current job and queue
//! forward through time, reusing the virtual-simulation mechanics the
//! replan optimizer uses (§4.7) without reordering or mutating anything.

use lineplan_core::EngineState;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// One projected row in a plan preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRow {
    pub of_id: SmolStr,
    pub format: SmolStr,
    pub start: lineplan_core::SimTime,
    pub end: lineplan_core::SimTime,
    pub setup_min: u32,
    pub work_nominal_min: u32,
    pub note: String,
}

/// Project the current job (if any) and the queue, in its existing
/// order, into a sequence of `PlanRow`s, truncated to `limit` rows.
pub fn preview(state: &EngineState, limit: usize) -> Vec<PlanRow> {
    let mut rows = Vec::with_capacity(state.queue.len() + 1);
    let mut sim_now = state.now;
    let mut sim_fmt: Option<SmolStr> = state.current_format.clone();
    let speed = state.speed_factor.max(1e-9);

    if let Some(job) = &state.current_job {
        let real_work = (f64::from(job.remaining_work_nominal_min) / speed).floor() as i64;
        let start = sim_now;
        let end = start.add_minutes(i64::from(job.remaining_setup_min) + real_work);
        rows.push(row(&job.work_order.of_id, &job.work_order.format, start, end, job.remaining_setup_min, job.remaining_work_nominal_min, job.work_order.due_date));
        sim_now = end;
        sim_fmt = Some(job.work_order.format.clone());
    }

    for wo in &state.queue {
        let setup = state.setup_matrix.lookup(sim_fmt.as_deref(), wo.format.as_str());
        let real_work = (f64::from(wo.nominal_duration_min) / speed).floor() as i64;
        let start = sim_now.add_minutes(i64::from(setup));
        let end = start.add_minutes(real_work);
        rows.push(row(&wo.of_id, &wo.format, start, end, setup, wo.nominal_duration_min, wo.due_date));
        sim_now = end;
        sim_fmt = Some(wo.format.clone());
        if rows.len() >= limit {
            break;
        }
    }

    rows.truncate(limit);
    rows
}

fn row(
    of_id: &SmolStr,
    format: &SmolStr,
    start: lineplan_core::SimTime,
    end: lineplan_core::SimTime,
    setup_min: u32,
    work_nominal_min: u32,
    due_date: lineplan_core::SimTime,
) -> PlanRow {
    let note = if end.minutes_since(due_date) > 0 { format!("late by {}min", end.minutes_since(due_date)) } else { String::new() };
    PlanRow { of_id: of_id.clone(), format: format.clone(), start, end, setup_min, work_nominal_min, note }
}

#[cfg(test)]
#[path = "plan_preview_tests.rs"]
mod tests;
