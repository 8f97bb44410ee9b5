//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `chat`) so individual components can
//! depend on small focused models. `auth` is app-wide and provided via
//! context; `chat` is owned per chat-view instance.

pub mod auth;
pub mod chat;
