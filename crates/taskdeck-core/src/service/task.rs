//! Task management service.
//!
//! Orchestrates the CRUD lifecycle: validates inbound payloads, assigns ids
//! and timestamps, and maps repository errors to domain errors. This is the
//! only place field constraints are enforced.

use taskdeck_types::error::{FieldViolation, RepositoryError, TaskError};
use taskdeck_types::task::{
    CreateTaskRequest, MAX_TITLE_LEN, ReplaceTaskRequest, Task, TaskId, UpdateTaskRequest,
};

use crate::repository::task::{TaskFilter, TaskRepository};

/// Service orchestrating the task lifecycle.
///
/// Generic over the repository trait to keep taskdeck-core free of
/// infrastructure dependencies.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

/// Validate a title value, pushing violations onto `out`.
///
/// The stored value is the trimmed title.
fn validate_title(title: &str, out: &mut Vec<FieldViolation>) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        out.push(FieldViolation::new("title", "must not be empty"));
    } else if trimmed.chars().count() > MAX_TITLE_LEN {
        out.push(FieldViolation::new(
            "title",
            format!("must be at most {MAX_TITLE_LEN} characters"),
        ));
    }
    trimmed.to_string()
}

fn storage_err(e: RepositoryError) -> TaskError {
    TaskError::Storage(e.to_string())
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new task from a wire payload.
    ///
    /// Assigns a fresh [`TaskId`] and both timestamps; `description` defaults
    /// to `""` and `completed` to `false` when omitted.
    pub async fn create_task(&self, request: CreateTaskRequest) -> Result<Task, TaskError> {
        let mut violations = Vec::new();
        let title = validate_title(&request.title, &mut violations);
        if !violations.is_empty() {
            return Err(TaskError::Validation(violations));
        }

        let now = chrono::Utc::now();
        let task = Task {
            id: TaskId::new(),
            title,
            description: request.description.unwrap_or_default(),
            completed: request.completed.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };

        let task = self.repo.create(&task).await.map_err(storage_err)?;
        tracing::debug!(id = %task.id, "task created");
        Ok(task)
    }

    /// Get a task by ID.
    pub async fn get_task(&self, id: &TaskId) -> Result<Task, TaskError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(storage_err)?
            .ok_or(TaskError::NotFound)
    }

    /// List tasks. Default order is insertion order (created_at ascending).
    pub async fn list_tasks(&self, filter: Option<TaskFilter>) -> Result<Vec<Task>, TaskError> {
        self.repo.list(filter).await.map_err(storage_err)
    }

    /// Full update (PUT semantics): every field is overwritten.
    ///
    /// Omitted optional fields revert to their defaults. On validation
    /// failure the stored entity is left untouched.
    pub async fn replace_task(
        &self,
        id: &TaskId,
        request: ReplaceTaskRequest,
    ) -> Result<Task, TaskError> {
        let existing = self.get_task(id).await?;

        let mut violations = Vec::new();
        let title = validate_title(&request.title, &mut violations);
        if !violations.is_empty() {
            return Err(TaskError::Validation(violations));
        }

        let task = Task {
            id: existing.id,
            title,
            description: request.description.unwrap_or_default(),
            completed: request.completed.unwrap_or(false),
            created_at: existing.created_at,
            updated_at: chrono::Utc::now(),
        };

        let task = self.repo.update(&task).await.map_err(|e| match e {
            RepositoryError::NotFound => TaskError::NotFound,
            other => storage_err(other),
        })?;
        tracing::debug!(id = %task.id, "task replaced");
        Ok(task)
    }

    /// Partial update (PATCH semantics): only provided fields are validated
    /// and applied.
    pub async fn patch_task(
        &self,
        id: &TaskId,
        request: UpdateTaskRequest,
    ) -> Result<Task, TaskError> {
        let mut task = self.get_task(id).await?;

        if let Some(title) = &request.title {
            let mut violations = Vec::new();
            let title = validate_title(title, &mut violations);
            if !violations.is_empty() {
                return Err(TaskError::Validation(violations));
            }
            task.title = title;
        }
        if let Some(description) = request.description {
            task.description = description;
        }
        if let Some(completed) = request.completed {
            task.completed = completed;
        }
        task.updated_at = chrono::Utc::now();

        let task = self.repo.update(&task).await.map_err(|e| match e {
            RepositoryError::NotFound => TaskError::NotFound,
            other => storage_err(other),
        })?;
        tracing::debug!(id = %task.id, "task patched");
        Ok(task)
    }

    /// Delete a task permanently.
    pub async fn delete_task(&self, id: &TaskId) -> Result<(), TaskError> {
        self.repo.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => TaskError::NotFound,
            other => storage_err(other),
        })?;
        tracing::debug!(id = %id, "task deleted");
        Ok(())
    }

    /// Total number of stored tasks.
    pub async fn count_tasks(&self) -> Result<i64, TaskError> {
        self.repo.count().await.map_err(storage_err)
    }
}
