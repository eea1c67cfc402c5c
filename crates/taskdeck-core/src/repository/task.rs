//! Task repository trait definition.

use taskdeck_types::error::RepositoryError;
use taskdeck_types::task::{Task, TaskId};

use super::SortOrder;

/// Filter criteria for listing tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Filter by done flag.
    pub completed: Option<bool>,
    /// Field to sort by (e.g., "created_at", "title"). Unknown fields fall
    /// back to "created_at" in the implementation.
    pub sort_by: Option<String>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
    /// Maximum number of results.
    pub limit: Option<i64>,
    /// Number of results to skip (offset pagination).
    pub offset: Option<i64>,
}

/// Repository trait for task persistence.
///
/// Implementations live in taskdeck-infra (e.g., SqliteTaskRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait TaskRepository: Send + Sync {
    /// Persist a new task. Returns the created task.
    fn create(
        &self,
        task: &Task,
    ) -> impl std::future::Future<Output = Result<Task, RepositoryError>> + Send;

    /// Get a task by its unique ID.
    fn get_by_id(
        &self,
        id: &TaskId,
    ) -> impl std::future::Future<Output = Result<Option<Task>, RepositoryError>> + Send;

    /// List tasks with optional filtering, sorting, and pagination.
    fn list(
        &self,
        filter: Option<TaskFilter>,
    ) -> impl std::future::Future<Output = Result<Vec<Task>, RepositoryError>> + Send;

    /// Overwrite an existing task. Returns `NotFound` when the id is unknown.
    fn update(
        &self,
        task: &Task,
    ) -> impl std::future::Future<Output = Result<Task, RepositoryError>> + Send;

    /// Permanently delete a task by ID. Returns `NotFound` when the id is
    /// unknown.
    fn delete(
        &self,
        id: &TaskId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Total number of stored tasks.
    fn count(&self) -> impl std::future::Future<Output = Result<i64, RepositoryError>> + Send;
}
