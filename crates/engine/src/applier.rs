//! Event applier (§4.4): the state mutation for a single `Event` at `now`.

use lineplan_core::{Event, EventType, SimTime, WorkOrder};
use tracing::debug;

/// Outcome of applying one event's mutation, before lateness/journal
/// bookkeeping is layered on by `handle_event` orchestration.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyOutcome {
    pub applied: bool,
    pub reason: String,
    /// Only meaningful for `BREAKDOWN_END`.
    pub breakdown_duration_min: Option<u32>,
}

impl ApplyOutcome {
    fn applied() -> Self {
        Self { applied: true, reason: String::new(), breakdown_duration_min: None }
    }

    fn rejected(reason: impl Into<String>) -> Self {
        Self { applied: false, reason: reason.into(), breakdown_duration_min: None }
    }
}

pub fn apply_event(state: &mut lineplan_core::EngineState, ev: &Event) -> ApplyOutcome {
    match ev.event_type {
        EventType::ShiftStart => {
            state.is_running = true;
            ApplyOutcome::applied()
        }
        EventType::ShiftStop => {
            state.is_running = false;
            ApplyOutcome::applied()
        }
        EventType::SpeedChange => match ev.value.trim().parse::<f64>() {
            Ok(v) if v > 0.0 => {
                state.speed_factor = v;
                ApplyOutcome::applied()
            }
            _ => ApplyOutcome::rejected("invalid speed_change value"),
        },
        EventType::UrgentOrder => match parse_urgent_order(&ev.value, state.now) {
            Ok(wo) => {
                state.queue.push(wo);
                state.sort_queue();
                ApplyOutcome::applied()
            }
            Err(reason) => ApplyOutcome::rejected(reason),
        },
        EventType::BreakdownStart => {
            state.is_down = true;
            if state.breakdown.down_start_time.is_none() {
                state.breakdown.down_start_time = Some(state.now);
                state.breakdown.down_reason = Some(ev.value.clone());
            }
            ApplyOutcome::applied()
        }
        EventType::BreakdownEnd => {
            state.is_down = false;
            let duration = match state.breakdown.down_start_time.take() {
                Some(start) => state.now.minutes_since(start) as u32,
                None => 0,
            };
            state.breakdown.down_reason = None;
            state.breakdown.last_breakdown_duration_min = Some(duration);
            ApplyOutcome { applied: true, reason: String::new(), breakdown_duration_min: Some(duration) }
        }
        EventType::Unknown => {
            debug!(value = %ev.value, "unrecognized event type");
            ApplyOutcome::rejected("unknown_type")
        }
    }
}

/// Parse the `k=v;k=v;...` URGENT_ORDER payload. Unknown keys are
/// tolerated (ignored), matching the source's observed behavior — see
/// DESIGN.md's note on this open question.
fn parse_urgent_order(payload: &str, now: SimTime) -> Result<WorkOrder, String> {
    let mut of_id = None;
    let mut format = None;
    let mut qty = None;
    let mut nominal_rate = None;
    let mut duration_min = None;
    let mut due = None;
    let mut priority = 5i32;

    for pair in payload.split(';') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        let Some((k, v)) = pair.split_once('=') else {
            return Err(format!("malformed urgent_order payload: bad pair {pair:?}"));
        };
        match k.trim() {
            "of_id" => of_id = Some(v.trim().to_string()),
            "format" => format = Some(v.trim().to_string()),
            "qty" => qty = Some(v.trim().parse::<u64>().map_err(|_| "malformed urgent_order payload: qty".to_string())?),
            "nominal_rate" => {
                nominal_rate =
                    Some(v.trim().parse::<u64>().map_err(|_| "malformed urgent_order payload: nominal_rate".to_string())?)
            }
            "duration_min" => {
                duration_min = Some(
                    v.trim().parse::<u32>().map_err(|_| "malformed urgent_order payload: duration_min".to_string())?,
                )
            }
            "due" => {
                due = Some(SimTime::parse(v.trim()).map_err(|_| "malformed urgent_order payload: due".to_string())?)
            }
            "priority" => {
                priority =
                    v.trim().parse::<i32>().map_err(|_| "malformed urgent_order payload: priority".to_string())?
            }
            _ => {} // unknown keys tolerated
        }
    }

    Ok(WorkOrder {
        of_id: of_id.ok_or("malformed urgent_order payload: missing of_id")?.into(),
        product: "urgent".to_string(),
        format: format.ok_or("malformed urgent_order payload: missing format")?.into(),
        created_at: now,
        due_date: due.ok_or("malformed urgent_order payload: missing due")?,
        priority,
        qty: qty.ok_or("malformed urgent_order payload: missing qty")?,
        nominal_rate_u_per_h: nominal_rate.ok_or("malformed urgent_order payload: missing nominal_rate")?,
        nominal_duration_min: duration_min.ok_or("malformed urgent_order payload: missing duration_min")?,
    })
}

#[cfg(test)]
#[path = "applier_tests.rs"]
mod tests;
