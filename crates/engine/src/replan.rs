//! Replan decider (§4.6) and cost-model queue optimizer (§4.7).

use lineplan_core::{EngineState, EventType, OptimizerWeights, SetupMatrix, SimTime, WorkOrder};
use tracing::info;

/// Outcome of the decider + optimizer + acceptance pipeline, ready to be
/// folded into a journal entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplanOutcome {
    pub replanned: bool,
    pub reason: String,
}

/// Decide whether to attempt a replan for this event, and if so, run the
/// optimizer and apply its output to `state.queue` if accepted.
pub fn maybe_replan(
    state: &mut EngineState,
    event_type: &EventType,
    breakdown_duration_min: Option<u32>,
) -> ReplanOutcome {
    let threshold = state.policy.breakdown_replan_threshold_min;
    if !should_attempt(event_type, breakdown_duration_min, threshold) {
        return ReplanOutcome { replanned: false, reason: attempt_reason(event_type, breakdown_duration_min, threshold) };
    }

    let candidate = optimize_queue(
        &state.queue,
        state.now,
        state.current_format.as_deref(),
        &state.setup_matrix,
        state.speed_factor,
        &state.policy.optimizer,
    );

    if candidate == state.queue {
        return ReplanOutcome { replanned: false, reason: "candidate_equals_current".to_string() };
    }

    let before = total_lateness(&state.queue, state.now, state.current_format.as_deref(), &state.setup_matrix, state.speed_factor);
    let after = total_lateness(&candidate, state.now, state.current_format.as_deref(), &state.setup_matrix, state.speed_factor);

    let (accept, reason) = if after < before {
        (true, format!("total_lateness_improved_{before}_to_{after}"))
    } else if matches!(event_type, EventType::UrgentOrder) {
        (true, "urgent_order_forces_acceptance".to_string())
    } else if (after - before) > i64::from(state.policy.replan_threshold_total_late_min) {
        (true, format!("current_plan_catastrophically_worse_{before}_vs_{after}"))
    } else {
        (false, format!("candidate_not_better_{before}_vs_{after}"))
    };

    if accept {
        state.queue = candidate;
        info!(%reason, queue_len = state.queue.len(), "replan accepted");
    }
    ReplanOutcome { replanned: accept, reason }
}

fn should_attempt(event_type: &EventType, breakdown_duration_min: Option<u32>, threshold: u32) -> bool {
    match event_type {
        EventType::ShiftStart | EventType::ShiftStop | EventType::Unknown => false,
        EventType::BreakdownStart => false,
        EventType::BreakdownEnd => breakdown_duration_min.unwrap_or(0) >= threshold,
        EventType::UrgentOrder | EventType::SpeedChange => true,
    }
}

fn attempt_reason(event_type: &EventType, breakdown_duration_min: Option<u32>, threshold: u32) -> String {
    match event_type {
        EventType::ShiftStart | EventType::ShiftStop => "shift_event_no_replan".to_string(),
        EventType::Unknown => "unknown_type_no_replan".to_string(),
        EventType::BreakdownStart => "breakdown_start_no_duration".to_string(),
        EventType::BreakdownEnd => {
            let d = breakdown_duration_min.unwrap_or(0);
            format!("breakdown_duration_{d}_below_threshold_{threshold}")
        }
        EventType::UrgentOrder | EventType::SpeedChange => unreachable!("these always attempt"),
    }
}

/// Walk `order` sequentially (no reordering), returning per-job lateness
/// and the total, using the virtual simulation from §4.7.
fn simulate_virtual(
    order: &[WorkOrder],
    sim_now: SimTime,
    current_format: Option<&str>,
    setup_matrix: &SetupMatrix,
    speed_factor: f64,
) -> i64 {
    let mut sim_now = sim_now;
    let mut sim_fmt: Option<String> = current_format.map(str::to_string);
    let mut total = 0i64;
    let eps = 1e-9;

    for wo in order {
        let setup = setup_matrix.lookup(sim_fmt.as_deref(), wo.format.as_str());
        let real_work = (f64::from(wo.nominal_duration_min) / speed_factor.max(eps)).floor() as i64;
        let finish = sim_now.add_minutes(i64::from(setup) + real_work);
        total += finish.minutes_since(wo.due_date).max(0);
        sim_now = finish;
        sim_fmt = Some(wo.format.to_string());
    }
    total
}

fn total_lateness(
    order: &[WorkOrder],
    sim_now: SimTime,
    current_format: Option<&str>,
    setup_matrix: &SetupMatrix,
    speed_factor: f64,
) -> i64 {
    simulate_virtual(order, sim_now, current_format, setup_matrix, speed_factor)
}

fn cost_score(
    sim_now: SimTime,
    sim_fmt: Option<&str>,
    wo: &WorkOrder,
    setup_matrix: &SetupMatrix,
    speed_factor: f64,
    weights: &OptimizerWeights,
) -> (f64, u32, i64) {
    let eps = 1e-9;
    let setup = setup_matrix.lookup(sim_fmt, wo.format.as_str());
    let real_work = (f64::from(wo.nominal_duration_min) / speed_factor.max(eps)).floor() as i64;
    let finish = sim_now.add_minutes(i64::from(setup) + real_work);
    let late = finish.minutes_since(wo.due_date).max(0);
    let score = weights.lateness * (late as f64) + weights.setup * f64::from(setup) - weights.priority * f64::from(wo.priority);
    (score, setup, late)
}

/// Greedily build a new ordering: repeatedly pick the remaining order
/// minimizing the cost score, ties broken by original queue order.
pub fn optimize_queue(
    queue: &[WorkOrder],
    sim_now: SimTime,
    current_format: Option<&str>,
    setup_matrix: &SetupMatrix,
    speed_factor: f64,
    weights: &OptimizerWeights,
) -> Vec<WorkOrder> {
    let mut remaining: Vec<WorkOrder> = queue.to_vec();
    let mut result = Vec::with_capacity(queue.len());
    let mut sim_now = sim_now;
    let mut sim_fmt: Option<String> = current_format.map(str::to_string);

    while !remaining.is_empty() {
        let mut best_idx = 0;
        let mut best_score = f64::INFINITY;
        for (i, wo) in remaining.iter().enumerate() {
            let (score, _, _) = cost_score(sim_now, sim_fmt.as_deref(), wo, setup_matrix, speed_factor, weights);
            if score < best_score {
                best_score = score;
                best_idx = i;
            }
        }
        let winner = remaining.remove(best_idx);
        let setup = setup_matrix.lookup(sim_fmt.as_deref(), winner.format.as_str());
        let real_work = (f64::from(winner.nominal_duration_min) / speed_factor.max(1e-9)).floor() as i64;
        sim_now = sim_now.add_minutes(i64::from(setup) + real_work);
        sim_fmt = Some(winner.format.to_string());
        result.push(winner);
    }
    result
}

#[cfg(test)]
#[path = "replan_tests.rs"]
mod tests;
