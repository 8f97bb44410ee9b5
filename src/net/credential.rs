//! Process-wide bearer credential attached to outgoing requests.
//!
//! The slot is written only by [`crate::session::SessionStore`]; every
//! request builder reads it at send time, so an install or clear is visible
//! to the very next call.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use std::cell::RefCell;

thread_local! {
    static BEARER: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Install `token` as the credential for all subsequent requests.
pub(crate) fn install(token: &str) {
    BEARER.with(|slot| *slot.borrow_mut() = Some(token.to_owned()));
}

/// Remove the installed credential. Safe to call when none is installed.
pub(crate) fn clear() {
    BEARER.with(|slot| *slot.borrow_mut() = None);
}

/// The currently installed token, if any.
pub fn current() -> Option<String> {
    BEARER.with(|slot| slot.borrow().clone())
}

/// `Authorization` header value for the installed credential.
pub fn bearer_header() -> Option<String> {
    current().map(|token| format!("Bearer {token}"))
}
