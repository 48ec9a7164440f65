use super::*;

#[test]
fn status_displays_as_lowercase_tag() {
    assert_eq!(JournalStatus::Ok.to_string(), "ok");
    assert_eq!(JournalStatus::Ignored.to_string(), "ignored");
}
