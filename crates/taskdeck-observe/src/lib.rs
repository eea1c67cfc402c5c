//! Observability setup for Taskdeck.

pub mod tracing_setup;
