//! Profile page for the authenticated member.

#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Profile;
use crate::session::SessionStore;
use crate::state::auth::AuthState;

/// Generic message for a failed profile fetch.
pub const PROFILE_ERROR_TEXT: &str = "Failed to load profile";

/// Profile page. Gated like the chat; an expired credential raises the
/// central auth-expired flag instead of handling the redirect itself.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Access gate: checked synchronously at mount, before any network call.
    let authorized = session.token().is_some();
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if !authorized {
                navigate("/login", NavigateOptions::default());
            }
        });
    }

    let profile = RwSignal::new(None::<Result<Profile, String>>);

    if authorized {
        #[cfg(feature = "hydrate")]
        {
            let live = Arc::new(AtomicBool::new(true));
            on_cleanup({
                let live = live.clone();
                move || live.store(false, Ordering::Relaxed)
            });
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::fetch_profile().await;
                if !live.load(Ordering::Relaxed) {
                    return;
                }
                match outcome {
                    Ok(member) => profile.set(Some(Ok(member))),
                    Err(err) if err.is_auth_expired() => {
                        auth.update(|state| state.expired = true);
                    }
                    Err(err) => {
                        profile.set(Some(Err(err.user_message(PROFILE_ERROR_TEXT))));
                    }
                }
            });
        }
    }

    let on_logout = {
        let session = session.clone();
        move |_| {
            session.clear();
            auth.set(AuthState::default());
            navigate("/login", NavigateOptions::default());
        }
    };

    view! {
        <div class="page page--profile">
            <h1 class="page__title">"Profile"</h1>
            {move || match profile.get() {
                None => view! { <p class="page__status">"Loading profile..."</p> }.into_any(),
                Some(Ok(member)) => {
                    view! {
                        <dl class="profile-card">
                            <dt>"Username"</dt>
                            <dd>{member.username}</dd>
                            <dt>"Member since"</dt>
                            <dd>{member.created_at.unwrap_or_else(|| "unknown".to_owned())}</dd>
                        </dl>
                    }
                        .into_any()
                }
                Some(Err(message)) => view! { <p class="page__error">{message}</p> }.into_any(),
            }}
            <button class="btn" on:click=on_logout>
                "Sign out"
            </button>
        </div>
    }
}
