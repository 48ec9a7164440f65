//! Minute-by-minute advance: KPI accounting and job progression (§4.1).

use lineplan_core::state::CompletedOrder;
use lineplan_core::EngineState;

/// Advance `state.now` to `target`, strictly one minute at a time. If
/// `target <= now`, jumps directly without stepping (no KPI accounting,
/// no progress) — per §4.1's contract and §7's clock-regression policy:
/// time moves, work does not un-happen.
pub fn advance_to(state: &mut EngineState, target: lineplan_core::SimTime) {
    while state.now < target {
        step_one_minute(state);
    }
    state.now = target;
}

/// A single one-minute step, in the fixed order from §4.1:
/// KPI accounting, progress gate, setup phase, work phase, completion.
fn step_one_minute(state: &mut EngineState) {
    account_kpi_minute(state);

    if state.is_down || !state.is_running || state.current_job.is_none() {
        state.now = state.now.add_minutes(1);
        return;
    }

    // Setup phase.
    {
        let job = state.current_job.as_mut().unwrap_or_else(|| unreachable!());
        if job.remaining_setup_min > 0 {
            job.remaining_setup_min -= 1;
            state.now = state.now.add_minutes(1);
            return;
        }
    }

    // Work phase: accumulate fractional nominal-minute progress.
    {
        let job = state.current_job.as_mut().unwrap_or_else(|| unreachable!());
        job.work_acc += state.speed_factor;
        let whole = job.work_acc.floor();
        if whole > 0.0 {
            job.work_acc -= whole;
            let consumed = whole as u32;
            job.remaining_work_nominal_min = job.remaining_work_nominal_min.saturating_sub(consumed);
        }
    }
    state.now = state.now.add_minutes(1);

    maybe_complete(state);
}

fn account_kpi_minute(state: &mut EngineState) {
    if state.is_down {
        state.kpi.downtime_min += 1;
    } else if !state.is_running {
        state.kpi.stopped_min += 1;
    } else if state.current_job.is_none() {
        state.kpi.idle_min += 1;
    } else {
        state.kpi.producing_min += 1;
    }
}

fn maybe_complete(state: &mut EngineState) {
    let done = matches!(
        &state.current_job,
        Some(job) if job.remaining_setup_min == 0 && job.remaining_work_nominal_min == 0
    );
    if !done {
        return;
    }
    let Some(job) = state.current_job.take() else { return };
    state.current_format = Some(job.work_order.format.clone());
    state.completed.push(CompletedOrder { of_id: job.work_order.of_id, finished_at: state.now });
}

#[cfg(test)]
#[path = "time_engine_tests.rs"]
mod tests;
