//! Small cross-cutting utilities.

pub mod ready;
