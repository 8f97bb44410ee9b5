//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{chat::ChatPage, login::LoginPage, profile::ProfilePage, register::RegisterPage};
use crate::session::SessionStore;
use crate::state::auth::AuthState;
use crate::util::ready;

/// Routes served by this application, announced once after initial render.
pub const ROUTES: [&str; 4] = ["/", "/register", "/login", "/profile"];

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores any persisted session, provides the shared contexts, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Restore the persisted session before the first page mounts, so the
    // access gates see the credential.
    let session = SessionStore::browser();
    let restored = session.init();
    let auth = RwSignal::new(AuthState::from_session(&restored));

    provide_context(session);
    provide_context(auth);

    // Application-ready announcement, once after the initial render.
    Effect::new(move || {
        let _ = ready::announce(&ROUTES);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/huddle.css"/>
        <Title text="Huddle"/>

        <Router>
            <NavBar/>
            <SessionExpiryWatcher/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=ChatPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Central reaction to an expired credential. Protected views raise the
/// shared flag; this single watcher signs the user out and redirects, so
/// every view gets the same behavior.
#[component]
fn SessionExpiryWatcher() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = leptos_router::hooks::use_navigate();

    Effect::new(move || {
        if auth.get().expired {
            session.clear();
            auth.set(AuthState::default());
            navigate("/login", NavigateOptions::default());
        }
    });
}
