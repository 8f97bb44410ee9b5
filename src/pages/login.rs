//! Login page for existing members.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::credentials_form::{CredentialsForm, validate_credentials};
use crate::session::SessionStore;
use crate::state::auth::AuthState;

/// Login page. Validates locally, exchanges credentials for a token, then
/// persists the session and navigates home.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = Callback::new(move |(username, password): (String, String)| {
        if busy.get() {
            return;
        }
        let (username, password) = match validate_credentials(&username, &password) {
            Ok(fields) => fields,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };

        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&username, &password).await {
                    Ok(resp) => {
                        session.set(&resp.token, Some(&resp.username));
                        auth.set(AuthState::signed_in(resp.username));
                        error.set(None);
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => error.set(Some(err.user_message("Failed to sign in"))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &auth, &navigate, username, password);
            busy.set(false);
        }
    });

    view! {
        <div class="page page--login">
            <h1 class="page__title">"Sign in"</h1>
            <CredentialsForm submit_label="Sign in" busy=busy error=error on_submit=on_submit/>
            <p class="page__hint">
                "No account yet? "
                <a href="/register">"Register"</a>
            </p>
        </div>
    }
}
