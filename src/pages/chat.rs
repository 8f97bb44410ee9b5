//! Chat page: gated message feed with polling and a composer.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::feed_sync;
use crate::session::SessionStore;
use crate::state::auth::AuthState;
use crate::state::chat::{ChatState, normalized_draft};

/// Generic message for a failed send; a server `detail` wins over it.
pub const SEND_ERROR_TEXT: &str = "Failed to send message";

/// Validation message for an empty draft.
pub const EMPTY_DRAFT_TEXT: &str = "Message text cannot be empty";

/// Chat page. Without a credential at mount it only redirects to the login
/// route; with one it starts the poll loop and renders the feed.
#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Access gate: checked synchronously at mount, before any network call.
    let authorized = session.token().is_some();
    Effect::new(move || {
        if !authorized {
            navigate("/login", NavigateOptions::default());
        }
    });

    // Owned by this view instance and disposed with it.
    let chat = RwSignal::new(ChatState::default());

    // Liveness flag shared by the poll loop and in-flight sends; cleared on
    // teardown so late responses are discarded.
    let live = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let live = live.clone();
        move || live.store(false, Ordering::Relaxed)
    });

    if authorized {
        feed_sync::spawn_feed_sync(chat, auth, live.clone());
    }

    let draft = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let send_error = RwSignal::new(None::<String>);

    let do_send = {
        let live = live.clone();
        move || {
            let Some(text) = normalized_draft(&draft.get()).map(ToOwned::to_owned) else {
                send_error.set(Some(EMPTY_DRAFT_TEXT.to_owned()));
                return;
            };
            if sending.get() {
                return;
            }
            sending.set(true);
            #[cfg(feature = "hydrate")]
            {
                let live = live.clone();
                leptos::task::spawn_local(async move {
                    let outcome = crate::net::api::send_message(&text).await;
                    if !live.load(Ordering::Relaxed) {
                        return;
                    }
                    match outcome {
                        Ok(message) => {
                            chat.update(|state| state.push_echo(message));
                            draft.set(String::new());
                            send_error.set(None);
                        }
                        Err(err) if err.is_auth_expired() => {
                            auth.update(|state| state.expired = true);
                        }
                        // Draft stays intact for a manual retry.
                        Err(err) => send_error.set(Some(err.user_message(SEND_ERROR_TEXT))),
                    }
                    sending.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&live, text);
                sending.set(false);
            }
        }
    };

    let on_click = {
        let do_send = do_send.clone();
        move |_| do_send()
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="page page--chat">
            <h1 class="page__title">"Group chat"</h1>

            <Show when=move || chat.get().load_error.is_some()>
                <p class="chat__error">{move || chat.get().load_error.unwrap_or_default()}</p>
            </Show>

            <div class="chat__messages">
                {move || {
                    let state = chat.get();
                    if !state.loaded && state.pending.is_empty() {
                        return view! {
                            <div class="chat__empty">"Loading messages..."</div>
                        }
                            .into_any();
                    }
                    let visible = state.visible();
                    if visible.is_empty() {
                        return view! {
                            <div class="chat__empty">"No messages yet"</div>
                        }
                            .into_any();
                    }
                    visible
                        .into_iter()
                        .map(|message| {
                            view! {
                                <div class="chat__message">
                                    <span class="chat__author">{message.username}</span>
                                    <span class="chat__text">{message.text}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <Show when=move || send_error.get().is_some()>
                <p class="chat__error">{move || send_error.get().unwrap_or_default()}</p>
            </Show>

            <div class="chat__input-row">
                <input
                    class="chat__input"
                    type="text"
                    placeholder="Write a message..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat__send"
                    on:click=on_click
                    disabled=move || sending.get()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
