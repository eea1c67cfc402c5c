//! Shared domain types for Taskdeck.
//!
//! This crate contains the Task entity, its wire request types, the
//! configuration schema, and the error types shared across the workspace.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod error;
pub mod task;
