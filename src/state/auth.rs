#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::session::Session;

/// Reactive mirror of the session credential for the UI.
///
/// The [`crate::session::SessionStore`] stays the source of truth for the
/// persisted token; this state exists so the nav bar and the guards can
/// react to sign-in and sign-out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub username: Option<String>,
    pub authenticated: bool,
    /// Raised by any view that sees a 401 on an authorized call; consumed
    /// once by the central expiry watcher, which signs the user out.
    pub expired: bool,
}

impl AuthState {
    /// State restored from a persisted session at startup.
    pub fn from_session(session: &Session) -> Self {
        Self {
            username: session.username.clone(),
            authenticated: session.token.is_some(),
            expired: false,
        }
    }

    /// State right after a successful login or registration.
    pub fn signed_in(username: String) -> Self {
        Self {
            username: Some(username),
            authenticated: true,
            expired: false,
        }
    }
}
