use super::*;
use crate::session::Session;

// =============================================================
// AuthState transitions
// =============================================================

#[test]
fn default_is_signed_out() {
    let state = AuthState::default();
    assert!(state.username.is_none());
    assert!(!state.authenticated);
    assert!(!state.expired);
}

#[test]
fn from_session_with_token_is_authenticated() {
    let session = Session {
        token: Some("T1".to_owned()),
        username: Some("bob".to_owned()),
    };
    let state = AuthState::from_session(&session);
    assert!(state.authenticated);
    assert_eq!(state.username.as_deref(), Some("bob"));
}

#[test]
fn from_session_without_token_is_not_authenticated() {
    let session = Session {
        token: None,
        username: Some("bob".to_owned()),
    };
    assert!(!AuthState::from_session(&session).authenticated);
}

#[test]
fn signed_in_sets_username_and_clears_expiry() {
    let state = AuthState::signed_in("bob".to_owned());
    assert!(state.authenticated);
    assert!(!state.expired);
    assert_eq!(state.username.as_deref(), Some("bob"));
}
