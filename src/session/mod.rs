//! Session credential lifecycle: persist, restore, install, clear.
//!
//! DESIGN
//! ======
//! The store owns two persisted string keys (token and display name) and the
//! process-wide bearer credential in [`crate::net::credential`]. Those two
//! observations never disagree from a caller's point of view: `init`, `set`
//! and `clear` update storage first and the credential slot before
//! returning, on the same call stack.

pub mod storage;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use self::storage::SessionStorage;
use crate::net::credential;

const TOKEN_KEY: &str = "huddle_token";
const USERNAME_KEY: &str = "huddle_username";

/// Credentials restored from storage by [`SessionStore::init`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub username: Option<String>,
}

/// Owns the persisted credential and the installed bearer token.
///
/// Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage + Send + Sync>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage + Send + Sync>) -> Self {
        Self { storage }
    }

    /// Store backed by `localStorage` in the browser, by a fresh in-memory
    /// map on the server (where no session ever persists).
    pub fn browser() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(Arc::new(storage::BrowserStorage))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new(Arc::new(storage::MemoryStorage::default()))
        }
    }

    /// Restore a persisted session and, when a token is present, install it
    /// as the bearer credential. Idempotent; storage failures read as an
    /// absent session.
    pub fn init(&self) -> Session {
        let session = Session {
            token: self.token(),
            username: self.username(),
        };
        if let Some(token) = &session.token {
            credential::install(token);
        }
        session
    }

    /// Persist the credential and install it for outgoing requests.
    ///
    /// Persistence failures are swallowed (with a warning): the in-memory
    /// credential must still be installed so authorized calls keep working
    /// for the rest of this visit.
    pub fn set(&self, token: &str, username: Option<&str>) {
        if !self.storage.write(TOKEN_KEY, token) {
            leptos::logging::warn!("session: failed to persist token");
        }
        if let Some(username) = username {
            if !self.storage.write(USERNAME_KEY, username) {
                leptos::logging::warn!("session: failed to persist username");
            }
        }
        credential::install(token);
    }

    /// Forget the persisted credential and uninstall the bearer token.
    /// Safe to call when nothing is persisted.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USERNAME_KEY);
        credential::clear();
    }

    pub fn token(&self) -> Option<String> {
        self.storage.read(TOKEN_KEY)
    }

    pub fn username(&self) -> Option<String> {
        self.storage.read(USERNAME_KEY)
    }
}
