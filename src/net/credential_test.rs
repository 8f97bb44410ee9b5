use super::*;

// =============================================================
// Bearer slot
// =============================================================

#[test]
fn starts_empty() {
    assert!(current().is_none());
    assert!(bearer_header().is_none());
}

#[test]
fn install_is_visible_immediately() {
    install("T1");
    assert_eq!(current().as_deref(), Some("T1"));
    assert_eq!(bearer_header().as_deref(), Some("Bearer T1"));
}

#[test]
fn install_overwrites_previous_token() {
    install("old");
    install("new");
    assert_eq!(current().as_deref(), Some("new"));
}

#[test]
fn clear_removes_credential() {
    install("T1");
    clear();
    assert!(current().is_none());
    assert!(bearer_header().is_none());
}

#[test]
fn clear_on_empty_slot_is_a_no_op() {
    clear();
    clear();
    assert!(current().is_none());
}
