use super::*;

#[test]
fn parses_known_event_types() {
    assert_eq!(EventType::parse("SHIFT_START"), EventType::ShiftStart);
    assert_eq!(EventType::parse("BREAKDOWN_END"), EventType::BreakdownEnd);
    assert_eq!(EventType::parse("URGENT_ORDER"), EventType::UrgentOrder);
}

#[test]
fn unrecognized_type_is_unknown_not_an_error() {
    assert_eq!(EventType::parse("TEA_BREAK"), EventType::Unknown);
}

#[test]
fn display_round_trips_through_parse() {
    for ty in [
        EventType::ShiftStart,
        EventType::ShiftStop,
        EventType::BreakdownStart,
        EventType::BreakdownEnd,
        EventType::SpeedChange,
        EventType::UrgentOrder,
    ] {
        assert_eq!(EventType::parse(&ty.to_string()), ty);
    }
}
