//! SQLite task repository implementation.
//!
//! Implements `TaskRepository` from `taskdeck-core` using sqlx with split
//! read/write pools.

use taskdeck_core::repository::SortOrder;
use taskdeck_core::repository::task::{TaskFilter, TaskRepository};
use taskdeck_types::error::RepositoryError;
use taskdeck_types::task::{Task, TaskId};
use chrono::{DateTime, Utc};
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `TaskRepository`.
pub struct SqliteTaskRepository {
    pool: DatabasePool,
}

impl SqliteTaskRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to the domain Task.
struct TaskRow {
    id: String,
    title: String,
    description: String,
    completed: bool,
    created_at: String,
    updated_at: String,
}

impl TaskRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            completed: row.try_get("completed")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_task(self) -> Result<Task, RepositoryError> {
        let id = self
            .id
            .parse::<TaskId>()
            .map_err(|e| RepositoryError::Query(format!("invalid task id: {e}")))?;

        Ok(Task {
            id,
            title: self.title,
            description: self.description,
            completed: self.completed,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

impl TaskRepository for SqliteTaskRepository {
    async fn create(&self, task: &Task) -> Result<Task, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO tasks (id, title, description, completed, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(task.id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.completed)
        .bind(format_datetime(&task.created_at))
        .bind(format_datetime(&task.updated_at))
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(_) => Ok(task.clone()),
            Err(sqlx::Error::Database(db_err)) if db_err.message().contains("UNIQUE") => Err(
                RepositoryError::Conflict(format!("task id '{}' already exists", task.id)),
            ),
            Err(e) => Err(RepositoryError::Query(e.to_string())),
        }
    }

    async fn get_by_id(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM tasks WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let task_row =
                    TaskRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(task_row.into_task()?))
            }
            None => Ok(None),
        }
    }

    async fn list(&self, filter: Option<TaskFilter>) -> Result<Vec<Task>, RepositoryError> {
        let mut sql = String::from("SELECT * FROM tasks");

        let filter = filter.unwrap_or_default();

        if let Some(completed) = filter.completed {
            sql.push_str(if completed {
                " WHERE completed = 1"
            } else {
                " WHERE completed = 0"
            });
        }

        // Whitelist allowed sort fields to prevent SQL injection
        let sort_field = filter.sort_by.as_deref().unwrap_or("created_at");
        let safe_sort = match sort_field {
            "title" | "completed" | "created_at" | "updated_at" => sort_field,
            _ => "created_at",
        };
        let order = match filter.sort_order.unwrap_or_default() {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        };
        // Secondary key keeps the order total when the sort field ties.
        sql.push_str(&format!(" ORDER BY {safe_sort} {order}, id {order}"));

        if let Some(limit) = filter.limit {
            sql.push_str(&format!(" LIMIT {}", limit.max(0)));
            if let Some(offset) = filter.offset {
                sql.push_str(&format!(" OFFSET {}", offset.max(0)));
            }
        } else if let Some(offset) = filter.offset {
            sql.push_str(&format!(" LIMIT -1 OFFSET {}", offset.max(0)));
        }

        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                TaskRow::from_row(row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?
                    .into_task()
            })
            .collect()
    }

    async fn update(&self, task: &Task) -> Result<Task, RepositoryError> {
        let result = sqlx::query(
            "UPDATE tasks SET title = ?, description = ?, completed = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.completed)
        .bind(format_datetime(&task.updated_at))
        .bind(task.id.to_string())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(task.clone())
    }

    async fn delete(&self, id: &TaskId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;
        Ok(row.0)
    }
}
