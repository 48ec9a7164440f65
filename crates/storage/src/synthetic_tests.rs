use super::*;
use chrono::Datelike;

#[test]
fn deterministic_given_same_seed() {
    let cfg = SyntheticDayConfig { days: 3, ..SyntheticDayConfig::default() };
    let (orders_a, events_a) = generate_day(&cfg, 42);
    let (orders_b, events_b) = generate_day(&cfg, 42);
    assert_eq!(orders_a, orders_b);
    assert_eq!(events_a, events_b);
}

#[test]
fn different_seeds_usually_differ() {
    let cfg = SyntheticDayConfig { days: 5, ..SyntheticDayConfig::default() };
    let (orders_a, _) = generate_day(&cfg, 1);
    let (orders_b, _) = generate_day(&cfg, 2);
    assert_ne!(orders_a, orders_b);
}

#[test]
fn no_orders_created_on_weekends() {
    // 2026-01-05 is a Monday; +5 lands on Saturday.
    let cfg = SyntheticDayConfig { days: 7, ..SyntheticDayConfig::default() };
    let (orders, _) = generate_day(&cfg, 7);
    for o in &orders {
        let weekday = o.created_at.inner().date().weekday();
        assert!(!matches!(weekday, chrono::Weekday::Sat | chrono::Weekday::Sun));
    }
}

#[test]
fn events_are_sorted_by_timestamp() {
    let cfg = SyntheticDayConfig { days: 14, ..SyntheticDayConfig::default() };
    let (_, events) = generate_day(&cfg, 99);
    let mut sorted = events.clone();
    sorted.sort_by_key(|e| e.timestamp);
    assert_eq!(events, sorted);
}

#[test]
fn shift_events_present_for_every_working_day() {
    let cfg = SyntheticDayConfig { days: 5, ..SyntheticDayConfig::default() };
    let (_, events) = generate_day(&cfg, 3);
    let shift_starts = events.iter().filter(|e| e.event_type == EventType::ShiftStart).count();
    // Mon-Fri => 5 working days, 2 SHIFT_START each (morning + after lunch).
    assert_eq!(shift_starts, 10);
}

#[test]
fn setup_matrix_same_format_is_zero() {
    let cfg = SyntheticDayConfig::default();
    let m = generate_setup_matrix(&cfg, 5);
    for f in &cfg.formats {
        assert_eq!(m.lookup(Some(f), f), 0);
    }
}

#[test]
fn urgent_order_payload_round_trips_through_the_applier_grammar() {
    let cfg = SyntheticDayConfig { days: 14, ..SyntheticDayConfig::default() };
    let (_, events) = generate_day(&cfg, 11);
    let urgent = events.iter().find(|e| e.event_type == EventType::UrgentOrder);
    if let Some(ev) = urgent {
        for key in ["of_id", "format", "qty", "nominal_rate", "duration_min", "due"] {
            assert!(ev.value.contains(&format!("{key}=")), "missing {key} in {:?}", ev.value);
        }
    }
}
