//! Application pages, one per route.

pub mod chat;
pub mod login;
pub mod profile;
pub mod register;
