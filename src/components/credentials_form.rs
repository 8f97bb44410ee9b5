//! Shared username/password form for the login and register pages.

#[cfg(test)]
#[path = "credentials_form_test.rs"]
mod credentials_form_test;

use leptos::prelude::*;

/// Validation message for missing credentials.
pub const CREDENTIALS_REQUIRED_TEXT: &str = "Username and password are required";

/// Validate a credentials pair before any network call. The username is
/// trimmed; the password is taken as typed.
///
/// # Errors
///
/// A display-ready validation message when either field is empty.
pub fn validate_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(CREDENTIALS_REQUIRED_TEXT);
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Username/password form with an error line and a busy-disabled submit
/// control. Validation and submission live in the owning page.
#[component]
pub fn CredentialsForm(
    submit_label: &'static str,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    on_submit: Callback<(String, String)>,
) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    view! {
        <form
            class="credentials-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run((username.get(), password.get()));
            }
        >
            <label class="credentials-form__label">
                "Username"
                <input
                    class="credentials-form__input"
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label class="credentials-form__label">
                "Password"
                <input
                    class="credentials-form__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="credentials-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {submit_label}
            </button>
        </form>
    }
}
