//! Message feed polling loop.
//!
//! One loop runs per mounted chat view: an immediate fetch, then a fetch
//! every [`POLL_INTERVAL`]. Cycles are serialized: the next fetch is only
//! scheduled after the previous one completes, so results can never be
//! applied out of order. A failed cycle surfaces an error and the loop keeps
//! going; only teardown or an expired credential stops it.
//!
//! Teardown uses a shared liveness flag: the owning view clears it in
//! `on_cleanup`, and the loop re-checks it after every await, so a response
//! that lands after the view is gone is discarded instead of touching
//! disposed state.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
#[cfg(feature = "hydrate")]
use std::sync::atomic::Ordering;
use std::time::Duration;

use leptos::prelude::RwSignal;
#[cfg(feature = "hydrate")]
use leptos::prelude::Update;

use crate::state::auth::AuthState;
use crate::state::chat::ChatState;

/// Fixed delay between poll cycles.
pub const POLL_INTERVAL: Duration = Duration::from_secs(4);

/// Generic message for a failed poll cycle; a server `detail` wins over it.
pub const LOAD_ERROR_TEXT: &str = "Failed to load messages";

/// Start the polling loop for a chat view. `live` is the view's liveness
/// flag; clearing it stops the loop and invalidates in-flight results.
///
/// On the server this is a no-op; the feed only exists in the browser.
pub fn spawn_feed_sync(
    chat: RwSignal<ChatState>,
    auth: RwSignal<AuthState>,
    live: Arc<AtomicBool>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(run_sync_loop(chat, auth, live));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat, auth, live);
    }
}

#[cfg(feature = "hydrate")]
async fn run_sync_loop(
    chat: RwSignal<ChatState>,
    auth: RwSignal<AuthState>,
    live: Arc<AtomicBool>,
) {
    loop {
        if !live.load(Ordering::Relaxed) {
            break;
        }
        let outcome = crate::net::api::fetch_messages().await;
        if !live.load(Ordering::Relaxed) {
            // The view was torn down while the fetch was in flight.
            break;
        }
        match outcome {
            Ok(feed) => chat.update(|state| state.apply_feed(feed)),
            Err(err) if err.is_auth_expired() => {
                auth.update(|state| state.expired = true);
                break;
            }
            Err(err) => {
                leptos::logging::warn!("feed poll failed: {err}");
                chat.update(|state| state.feed_failed(err.user_message(LOAD_ERROR_TEXT)));
            }
        }
        gloo_timers::future::sleep(POLL_INTERVAL).await;
    }
}
