//! Pool → queue admission (§4.2). The only path by which a work order
//! becomes eligible for dispatch.

use lineplan_core::EngineState;

/// Move every pool order whose `created_at <= now` into the queue,
/// skipping orders already admitted (in queue or running). Re-sorts the
/// queue by `(due_date asc, priority desc)` when anything moved.
pub fn refresh_queue_from_pool(state: &mut EngineState) {
    let now = state.now;
    let (eligible, remaining): (Vec<_>, Vec<_>) =
        std::mem::take(&mut state.pool).into_iter().partition(|wo| wo.created_at <= now);
    state.pool = remaining;

    let mut admitted_any = false;
    for wo in eligible {
        if state.is_admitted(wo.of_id.as_str()) {
            // Already admitted by some other path; drop it from the pool
            // without re-adding it to the queue.
            continue;
        }
        state.queue.push(wo);
        admitted_any = true;
    }

    if admitted_any {
        state.sort_queue();
    }
}

#[cfg(test)]
#[path = "admission_tests.rs"]
mod tests;
