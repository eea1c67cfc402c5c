use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Maximum allowed length of a task title, in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Unique identifier for a task, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub Uuid);

impl TaskId {
    /// Create a new TaskId using UUID v7 (time-sortable, so id order
    /// tracks insertion order).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create a TaskId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A task in the Taskdeck tracker.
///
/// Field declaration order is the wire key order: serde serializes struct
/// fields in declaration order, which keeps the JSON representation stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Short text, required, at most [`MAX_TITLE_LEN`] characters.
    pub title: String,
    /// Free text, empty when the caller never set one.
    pub description: String,
    /// Done flag.
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new task. Only `title` is required.
///
/// Unknown fields in the payload are ignored (permissive deserialization).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Request for a full update (PUT). `title` is required; omitted optional
/// fields revert to their defaults (`""` / `false`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Request for a partial update (PATCH). Only provided fields are validated
/// and applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        let now = Utc::now();
        Task {
            id: TaskId::new(),
            title: "Write report".to_string(),
            description: String::new(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_task_id_display_roundtrip() {
        let id = TaskId::new();
        let s = id.to_string();
        let parsed: TaskId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_task_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<TaskId>().is_err());
    }

    #[test]
    fn test_task_serde_roundtrip() {
        let task = sample_task();
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_task_json_key_order_is_stable() {
        let task = sample_task();
        let json = serde_json::to_string(&task).unwrap();
        let positions: Vec<usize> = ["id", "title", "description", "completed", "created_at", "updated_at"]
            .iter()
            .map(|key| json.find(&format!("\"{key}\"")).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "keys must appear in declaration order");
    }

    #[test]
    fn test_create_request_ignores_unknown_fields() {
        let body = r#"{"title": "Buy milk", "priority": "high", "owner": 42}"#;
        let req: CreateTaskRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.title, "Buy milk");
        assert!(req.description.is_none());
        assert!(req.completed.is_none());
    }

    #[test]
    fn test_replace_request_requires_title() {
        let body = r#"{"description": "no title here"}"#;
        assert!(serde_json::from_str::<ReplaceTaskRequest>(body).is_err());
    }

    #[test]
    fn test_update_request_all_fields_optional() {
        let req: UpdateTaskRequest = serde_json::from_str("{}").unwrap();
        assert!(req.title.is_none());
        assert!(req.description.is_none());
        assert!(req.completed.is_none());
    }
}
