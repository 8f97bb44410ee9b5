//! Network layer: REST calls, wire types, error taxonomy, the installed
//! bearer credential, and the feed polling loop.

pub mod api;
pub mod credential;
pub mod error;
pub mod feed_sync;
pub mod types;
