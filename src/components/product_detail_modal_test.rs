use super::*;

#[test]
fn escape_dismisses() {
    assert!(is_dismiss_key("Escape"));
}

#[test]
fn other_keys_do_not_dismiss() {
    assert!(!is_dismiss_key("Enter"));
    assert!(!is_dismiss_key("Esc"));
    assert!(!is_dismiss_key("escape"));
}
