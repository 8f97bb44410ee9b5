//! Top navigation bar with route links and the signed-in username.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Application header: brand, links to the four routes, and the current
/// username when a session is active.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <header class="nav-bar">
            <div class="nav-bar__brand">"Huddle"</div>
            <nav class="nav-bar__links">
                <a class="nav-bar__link" href="/">"Chat"</a>
                <a class="nav-bar__link" href="/register">"Register"</a>
                <a class="nav-bar__link" href="/login">"Sign in"</a>
                <a class="nav-bar__link" href="/profile">"Profile"</a>
            </nav>
            <Show when=move || auth.get().authenticated>
                <span class="nav-bar__user">
                    {move || auth.get().username.unwrap_or_default()}
                </span>
            </Show>
        </header>
    }
}
