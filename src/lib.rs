//! Command-line client for the taskboard issue tracker.
//!
//! The server owns all issue state; this crate is the thin client around
//! it: typed models, input validation, a bearer-token HTTP client, a
//! persisted session, and a keyed response cache with invalidation on
//! mutation.

pub mod api;
pub mod app;
pub mod avatar;
pub mod cache;
pub mod commands;
pub mod models;
pub mod permissions;
pub mod session;
pub mod storage;
pub mod validate;

#[cfg(test)]
pub(crate) mod testing;
