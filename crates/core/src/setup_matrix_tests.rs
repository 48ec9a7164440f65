use super::*;

#[test]
fn missing_pair_defaults_to_zero() {
    let m = SetupMatrix::new();
    assert_eq!(m.lookup(Some("F1"), "F2"), 0);
}

#[test]
fn none_from_is_always_zero() {
    let mut m = SetupMatrix::new();
    m.insert("F1", "F2", 15);
    assert_eq!(m.lookup(None, "F2"), 0);
}

#[test]
fn looks_up_inserted_pair() {
    let mut m = SetupMatrix::new();
    m.insert("F1", "F2", 15);
    assert_eq!(m.lookup(Some("F1"), "F2"), 15);
    assert_eq!(m.lookup(Some("F2"), "F1"), 0);
}

#[test]
fn self_transition_is_not_forced_to_zero() {
    let mut m = SetupMatrix::new();
    m.insert("F1", "F1", 3);
    assert_eq!(m.lookup(Some("F1"), "F1"), 3);
}
