use super::*;
use lineplan_core::{Event, EventType, SchedulerConfig, SetupMatrix, SimTime, WorkOrder};

fn new_engine() -> Engine {
    Engine::new(SimTime::parse("2026-01-05T08:00").unwrap(), SchedulerConfig::default(), SetupMatrix::new())
}

#[test]
fn seed_pool_and_advance_admits_and_dispatches() {
    let engine = new_engine();
    engine.seed_pool(vec![WorkOrder::builder()
        .of_id("A")
        .created_at(SimTime::parse("2026-01-05T08:00").unwrap())
        .build()]);
    engine.handle_event(Event::new(SimTime::parse("2026-01-05T08:00").unwrap(), EventType::ShiftStart, ""));
    assert!(engine.get_state().current_job.is_some());
}

#[test]
fn set_time_jumps_without_kpi_accounting() {
    let engine = new_engine();
    engine.set_time(SimTime::parse("2026-01-05T12:00").unwrap());
    let st = engine.get_state();
    assert_eq!(st.now.to_string(), "2026-01-05T12:00");
    assert_eq!(st.kpi.total(), 0);
}

#[test]
fn event_log_respects_limit() {
    let engine = new_engine();
    for _ in 0..5 {
        engine.handle_event(Event::new(engine.get_state().now, EventType::SpeedChange, "1.0"));
    }
    assert_eq!(engine.get_event_log(2).len(), 2);
    assert_eq!(engine.get_event_log(100).len(), 5);
}

#[test]
fn deep_clone_is_independent_of_the_live_engine() {
    let live = new_engine();
    live.seed_pool(vec![WorkOrder::builder().of_id("A").created_at(SimTime::parse("2026-01-05T08:00").unwrap()).build()]);
    let clone = live.deep_clone();
    clone.handle_event(Event::new(clone.get_state().now, EventType::ShiftStart, ""));
    assert!(clone.get_state().is_running);
    assert!(!live.get_state().is_running);
}

#[test]
fn simulate_day_does_not_mutate_the_live_engine() {
    let live = new_engine();
    live.seed_pool(vec![WorkOrder::builder()
        .of_id("A")
        .nominal_duration_min(60)
        .created_at(SimTime::parse("2026-01-05T08:00").unwrap())
        .build()]);
    let incoming = vec![lineplan_core::IncomingEvent {
        receive_time: SimTime::parse("2026-01-05T08:00").unwrap(),
        event: Event::new(SimTime::parse("2026-01-05T08:00").unwrap(), EventType::ShiftStart, ""),
        source: "panel".to_string(),
    }];
    let result = live.simulate_day(
        SimTime::parse("2026-01-05T08:00").unwrap(),
        SimTime::parse("2026-01-05T16:00").unwrap(),
        incoming,
        60,
    );
    assert_eq!(result.last_state.completed.len(), 1);
    assert!(!live.get_state().is_running);
    assert_eq!(live.get_state().completed.len(), 0);
}

#[test]
fn clone_then_replaying_same_events_yields_identical_kpi_and_completed() {
    let original = new_engine();
    original.seed_pool(vec![WorkOrder::builder()
        .of_id("A")
        .format("F1")
        .nominal_duration_min(45)
        .created_at(SimTime::parse("2026-01-05T08:00").unwrap())
        .build()]);
    let replay = original.deep_clone();

    let events = [
        Event::new(SimTime::parse("2026-01-05T08:00").unwrap(), EventType::ShiftStart, ""),
        Event::new(SimTime::parse("2026-01-05T08:30").unwrap(), EventType::BreakdownStart, ""),
        Event::new(SimTime::parse("2026-01-05T08:40").unwrap(), EventType::BreakdownEnd, ""),
        Event::new(SimTime::parse("2026-01-05T10:00").unwrap(), EventType::ShiftStop, ""),
    ];
    for ev in &events {
        original.handle_event(ev.clone());
        replay.handle_event(ev.clone());
    }

    let a = original.get_state();
    let b = replay.get_state();
    assert_eq!(a.kpi, b.kpi);
    assert_eq!(a.completed, b.completed);
}

#[test]
fn plan_preview_reflects_seeded_queue() {
    let engine = new_engine();
    engine.seed_pool(vec![WorkOrder::builder().of_id("A").nominal_duration_min(30).build()]);
    engine.advance_to(SimTime::parse("2026-01-05T08:00").unwrap());
    let rows = engine.plan_preview(10);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].of_id.as_str(), "A");
}
