//! Application layer for Taskdeck: REST API (axum) and CLI.
//!
//! Exposed as a library so integration tests can build the router against
//! a scratch data directory; the `tdeck` binary lives in `main.rs`.

pub mod cli;
pub mod http;
pub mod state;
