use std::sync::Arc;

use super::*;
use super::storage::{MemoryStorage, SessionStorage};

/// Backend where every access fails, for the fail-soft paths.
struct FailingStorage;

impl SessionStorage for FailingStorage {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, _key: &str, _value: &str) -> bool {
        false
    }

    fn remove(&self, _key: &str) {}
}

fn memory_store() -> SessionStore {
    SessionStore::new(Arc::new(MemoryStorage::default()))
}

// =============================================================
// set / clear
// =============================================================

#[test]
fn set_persists_token_and_username() {
    let store = memory_store();
    store.set("T1", Some("bob"));
    assert_eq!(store.token().as_deref(), Some("T1"));
    assert_eq!(store.username().as_deref(), Some("bob"));
}

#[test]
fn set_installs_bearer_credential() {
    let store = memory_store();
    store.set("T1", Some("bob"));
    assert_eq!(credential::current().as_deref(), Some("T1"));
}

#[test]
fn set_without_username_keeps_previous_username() {
    let store = memory_store();
    store.set("T1", Some("bob"));
    store.set("T2", None);
    assert_eq!(store.token().as_deref(), Some("T2"));
    assert_eq!(store.username().as_deref(), Some("bob"));
}

#[test]
fn clear_after_set_removes_everything() {
    let store = memory_store();
    store.set("T1", Some("bob"));
    store.clear();
    assert!(store.token().is_none());
    assert!(store.username().is_none());
    assert!(credential::current().is_none());
}

#[test]
fn clear_on_empty_store_is_safe() {
    let store = memory_store();
    store.clear();
    assert!(store.token().is_none());
    assert!(credential::current().is_none());
}

// =============================================================
// init
// =============================================================

#[test]
fn init_restores_persisted_session_and_installs_credential() {
    let backend = Arc::new(MemoryStorage::default());
    SessionStore::new(backend.clone()).set("T1", Some("bob"));
    credential::clear();

    let session = SessionStore::new(backend).init();
    assert_eq!(session.token.as_deref(), Some("T1"));
    assert_eq!(session.username.as_deref(), Some("bob"));
    assert_eq!(credential::current().as_deref(), Some("T1"));
}

#[test]
fn init_with_empty_storage_returns_no_session() {
    let session = memory_store().init();
    assert_eq!(session, Session::default());
    assert!(credential::current().is_none());
}

#[test]
fn init_is_idempotent() {
    let store = memory_store();
    store.set("T1", Some("bob"));
    let first = store.init();
    let second = store.init();
    assert_eq!(first, second);
    assert_eq!(credential::current().as_deref(), Some("T1"));
}

// =============================================================
// Login flow
// =============================================================

#[test]
fn successful_login_persists_installs_and_authenticates() {
    let store = memory_store();
    // As the login page does with a successful `{token, username}` response.
    store.set("T1njafter", Some("bob"));
    let state = crate::state::auth::AuthState::signed_in("bob".to_owned());

    assert!(state.authenticated);
    assert_eq!(store.token().as_deref(), Some("T1njafter"));
    assert_eq!(
        credential::bearer_header().as_deref(),
        Some("Bearer T1njafter")
    );
}

// =============================================================
// Storage failure paths
// =============================================================

#[test]
fn accessors_return_none_on_storage_failure() {
    let store = SessionStore::new(Arc::new(FailingStorage));
    assert!(store.token().is_none());
    assert!(store.username().is_none());
}

#[test]
fn set_still_installs_credential_when_persistence_fails() {
    let store = SessionStore::new(Arc::new(FailingStorage));
    store.set("T1", Some("bob"));
    assert!(store.token().is_none());
    assert_eq!(credential::current().as_deref(), Some("T1"));
}

#[test]
fn init_on_failing_storage_reads_as_signed_out() {
    let session = SessionStore::new(Arc::new(FailingStorage)).init();
    assert_eq!(session, Session::default());
}
