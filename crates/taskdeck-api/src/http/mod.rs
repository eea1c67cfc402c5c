//! HTTP/REST API layer for Taskdeck.
//!
//! Axum-based REST API exposing task CRUD at `/tasks`, with CORS and
//! request tracing middleware.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
