//! One module per server resource; every function is a single HTTP call
//! plus an envelope unwrap.

pub mod admin;
pub mod auth;
pub mod client;
pub mod issues;

pub use client::{ApiError, HttpClient};
