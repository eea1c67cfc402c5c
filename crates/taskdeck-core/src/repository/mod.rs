//! Repository trait definitions (ports).
//!
//! These traits define the storage interface that the infrastructure layer
//! (taskdeck-infra) implements. The core crate never depends on any
//! specific storage technology.

pub mod task;

/// Sort order for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        // Lists default to insertion order (created_at ascending).
        SortOrder::Asc
    }
}
