//! # huddle-client
//!
//! Leptos + WASM browser client for the Huddle group-chat service.
//!
//! The crate centers on the session and message-synchronization subsystem:
//! the persisted credential lifecycle (`session`), bearer injection and REST
//! calls (`net`), the serialized feed polling loop (`net::feed_sync`), and
//! the reactive state the pages render (`state`). Pages and components are
//! thin Leptos wrappers around that core.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: set up panic/log forwarding and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
