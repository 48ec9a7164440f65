//! Handle-event orchestration (§4.5): late-event policy, and the fixed
//! pipeline `advance → apply → refresh → replan → dispatch → journal`.

use crate::{admission, applier, dispatcher, replan, time_engine};
use lineplan_core::{Event, EngineState, JournalEntry, JournalStatus, LatePolicy, SimTime};
use tracing::warn;

/// Apply an event directly, as if it just happened at (or after) `now`.
/// Routes through the same core logic as [`handle_incoming`], with
/// `source = "internal"` and no pre-dispatch pass.
pub fn handle_event(state: &mut EngineState, ev: Event) -> JournalEntry {
    let received_at = state.now;
    process(state, received_at, ev, "internal".to_string())
}

/// Apply an event received at `receive_time` from `source`. The engine
/// first advances to `receive_time`, refreshes the queue, and attempts
/// dispatch *before* the event itself is processed (§4.5).
pub fn handle_incoming(state: &mut EngineState, receive_time: SimTime, ev: Event, source: String) -> JournalEntry {
    time_engine::advance_to(state, receive_time);
    admission::refresh_queue_from_pool(state);
    dispatcher::start_next_if_possible(state);
    process(state, receive_time, ev, source)
}

fn process(state: &mut EngineState, received_at: SimTime, ev: Event, source: String) -> JournalEntry {
    let engine_now_before = state.now;

    // Step 1: a future-dated event advances time before anything else.
    if ev.timestamp > state.now {
        time_engine::advance_to(state, ev.timestamp);
        admission::refresh_queue_from_pool(state);
    }

    // Step 2: lateness relative to the (possibly just-advanced) now.
    let lateness = state.now.minutes_since(ev.timestamp);

    // Step 3: too old to apply at all.
    if lateness > i64::from(state.policy.max_event_lateness_min) {
        let reason = format!("late event too old ({lateness}min > {}min)", state.policy.max_event_lateness_min);
        warn!(%reason, event_type = ?ev.event_type, "event ignored");
        return finish(state, received_at, &ev, source, JournalStatus::Ignored, reason, false, false, String::new(), None, engine_now_before);
    }

    // Step 4: within tolerance but policy says drop late events.
    if lateness > 0 && state.policy.late_policy == LatePolicy::Ignore {
        warn!(lateness, event_type = ?ev.event_type, "late event ignored by policy");
        return finish(
            state,
            received_at,
            &ev,
            source,
            JournalStatus::Ignored,
            "late event ignored by policy".to_string(),
            false,
            false,
            String::new(),
            None,
            engine_now_before,
        );
    }

    // Step 5: apply at current `now`, never rewinding.
    let outcome = applier::apply_event(state, &ev);
    let late_applied = outcome.applied && lateness > 0;

    if !outcome.applied {
        warn!(reason = %outcome.reason, event_type = ?ev.event_type, "event rejected");
        return finish(
            state,
            received_at,
            &ev,
            source,
            JournalStatus::Ignored,
            outcome.reason,
            false,
            false,
            String::new(),
            outcome.breakdown_duration_min,
            engine_now_before,
        );
    }

    // Step 6: refresh, replan, dispatch.
    admission::refresh_queue_from_pool(state);
    let replan_outcome = replan::maybe_replan(state, &ev.event_type, outcome.breakdown_duration_min);
    dispatcher::start_next_if_possible(state);

    finish(
        state,
        received_at,
        &ev,
        source,
        JournalStatus::Ok,
        String::new(),
        late_applied,
        replan_outcome.replanned,
        replan_outcome.reason,
        outcome.breakdown_duration_min,
        engine_now_before,
    )
}

#[allow(clippy::too_many_arguments)]
fn finish(
    state: &mut EngineState,
    received_at: SimTime,
    ev: &Event,
    source: String,
    status: JournalStatus,
    reason: String,
    late_applied: bool,
    replanned: bool,
    replan_reason: String,
    breakdown_duration_min: Option<u32>,
    engine_now_before: SimTime,
) -> JournalEntry {
    let entry = JournalEntry {
        received_at,
        source,
        engine_now_before,
        event_timestamp: ev.timestamp,
        event_type: ev.event_type.clone(),
        value: ev.value.clone(),
        status,
        reason,
        late_applied,
        replanned,
        replan_reason,
        breakdown_duration_min,
        engine_now_after: state.now,
    };
    state.event_log.push(entry.clone());
    entry
}

#[cfg(test)]
#[path = "handle_event_tests.rs"]
mod tests;
