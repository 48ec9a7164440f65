//! Dispatcher (§4.3): moves the head of the queue onto the machine.

use lineplan_core::state::CurrentJob;
use lineplan_core::EngineState;
use tracing::debug;

/// No-op if a job is already running, the machine is down or stopped, or
/// the queue is empty. Otherwise pops the queue head and starts it:
/// setup cost is looked up from `current_format` (the *last completed*
/// job's format, not the one about to start — see §9) to the new job's
/// format.
pub fn start_next_if_possible(state: &mut EngineState) {
    if state.current_job.is_some() || state.is_down || !state.is_running {
        return;
    }
    let Some(wo) = (!state.queue.is_empty()).then(|| state.queue.remove(0)) else {
        return;
    };

    let remaining_setup_min = state.setup_matrix.lookup(state.current_format.as_deref(), wo.format.as_str());
    debug!(of_id = %wo.of_id, format = %wo.format, remaining_setup_min, "dispatching next order");
    state.current_job = Some(CurrentJob {
        remaining_work_nominal_min: wo.nominal_duration_min,
        work_order: wo,
        remaining_setup_min,
        work_acc: 0.0,
    });
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
