use super::*;
use lineplan_core::{Event, EventType, SchedulerConfig, SetupMatrix, SimTime, WorkOrder};

fn fresh_state(pool: Vec<WorkOrder>) -> EngineState {
    let mut st = EngineState::new(SimTime::parse("2026-01-05T08:00").unwrap(), SchedulerConfig::default(), SetupMatrix::new());
    st.pool = pool;
    st
}

#[test]
fn empty_day_with_no_shift_start_stays_stopped() {
    let pool = vec![WorkOrder::builder().of_id("A").created_at(SimTime::parse("2026-01-05T08:00").unwrap()).build()];
    let live = fresh_state(pool);
    let result = simulate_day(&live, SimTime::parse("2026-01-05T08:00").unwrap(), SimTime::parse("2026-01-05T16:00").unwrap(), vec![], 60);
    assert_eq!(result.last_state.kpi.producing_min, 0);
    assert_eq!(result.last_state.kpi.stopped_min, 480);
    assert_eq!(result.last_state.completed.len(), 0);
    assert_eq!(result.reports.len(), 9);
}

#[test]
fn simple_day_completes_the_only_order_on_schedule() {
    let pool = vec![WorkOrder::builder()
        .of_id("A")
        .format("F1")
        .nominal_duration_min(60)
        .created_at(SimTime::parse("2026-01-05T08:00").unwrap())
        .due_date(SimTime::parse("2026-01-05T16:00").unwrap())
        .build()];
    let live = fresh_state(pool);
    let incoming = vec![IncomingEvent {
        receive_time: SimTime::parse("2026-01-05T08:00").unwrap(),
        event: Event::new(SimTime::parse("2026-01-05T08:00").unwrap(), EventType::ShiftStart, ""),
        source: "panel".to_string(),
    }];
    let result = simulate_day(&live, SimTime::parse("2026-01-05T08:00").unwrap(), SimTime::parse("2026-01-05T16:00").unwrap(), incoming, 60);
    assert_eq!(result.last_state.completed.len(), 1);
    assert_eq!(result.last_state.completed[0].of_id.as_str(), "A");
    assert_eq!(result.last_state.completed[0].finished_at.to_string(), "2026-01-05T09:00");
    assert_eq!(result.stats.events_applied, 1);
}

#[test]
fn micro_breakdown_does_not_delay_completion() {
    let pool = vec![WorkOrder::builder()
        .of_id("A")
        .format("F1")
        .nominal_duration_min(60)
        .created_at(SimTime::parse("2026-01-05T08:00").unwrap())
        .due_date(SimTime::parse("2026-01-05T16:00").unwrap())
        .build()];
    let live = fresh_state(pool);
    let incoming = vec![
        IncomingEvent {
            receive_time: SimTime::parse("2026-01-05T08:00").unwrap(),
            event: Event::new(SimTime::parse("2026-01-05T08:00").unwrap(), EventType::ShiftStart, ""),
            source: "panel".to_string(),
        },
        IncomingEvent {
            receive_time: SimTime::parse("2026-01-05T08:30").unwrap(),
            event: Event::new(SimTime::parse("2026-01-05T08:30").unwrap(), EventType::BreakdownStart, "jam"),
            source: "sensor".to_string(),
        },
        IncomingEvent {
            receive_time: SimTime::parse("2026-01-05T08:45").unwrap(),
            event: Event::new(SimTime::parse("2026-01-05T08:45").unwrap(), EventType::BreakdownEnd, ""),
            source: "sensor".to_string(),
        },
    ];
    let result = simulate_day(&live, SimTime::parse("2026-01-05T08:00").unwrap(), SimTime::parse("2026-01-05T16:00").unwrap(), incoming, 60);
    assert_eq!(result.stats.breakdown_replans, 0);
    assert_eq!(result.last_state.completed[0].finished_at.to_string(), "2026-01-05T09:15");
}

#[test]
fn major_breakdown_triggers_replan() {
    let pool = vec![
        WorkOrder::builder()
            .of_id("A")
            .format("F1")
            .nominal_duration_min(60)
            .created_at(SimTime::parse("2026-01-05T08:00").unwrap())
            .due_date(SimTime::parse("2026-01-05T16:00").unwrap())
            .build(),
        WorkOrder::builder()
            .of_id("B")
            .format("F1")
            .nominal_duration_min(30)
            .created_at(SimTime::parse("2026-01-05T08:00").unwrap())
            .due_date(SimTime::parse("2026-01-05T16:00").unwrap())
            .build(),
    ];
    let live = fresh_state(pool);
    let incoming = vec![
        IncomingEvent {
            receive_time: SimTime::parse("2026-01-05T08:00").unwrap(),
            event: Event::new(SimTime::parse("2026-01-05T08:00").unwrap(), EventType::ShiftStart, ""),
            source: "panel".to_string(),
        },
        IncomingEvent {
            receive_time: SimTime::parse("2026-01-05T08:30").unwrap(),
            event: Event::new(SimTime::parse("2026-01-05T08:30").unwrap(), EventType::BreakdownStart, "jam"),
            source: "sensor".to_string(),
        },
        IncomingEvent {
            receive_time: SimTime::parse("2026-01-05T09:15").unwrap(),
            event: Event::new(SimTime::parse("2026-01-05T09:15").unwrap(), EventType::BreakdownEnd, ""),
            source: "sensor".to_string(),
        },
    ];
    let result = simulate_day(&live, SimTime::parse("2026-01-05T08:00").unwrap(), SimTime::parse("2026-01-05T16:00").unwrap(), incoming, 60);
    assert_eq!(result.last_state.breakdown.last_breakdown_duration_min, Some(45));
}
