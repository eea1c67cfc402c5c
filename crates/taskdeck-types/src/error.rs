use serde::Serialize;
use thiserror::Error;

use std::fmt;

/// A single failed field constraint, reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors related to task operations.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task not found")]
    NotFound,

    #[error("validation failed: {}", format_violations(.0))]
    Validation(Vec<FieldViolation>),

    #[error("storage error: {0}")]
    Storage(String),
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(FieldViolation::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors from repository operations (used by trait definitions in taskdeck-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lists_fields() {
        let err = TaskError::Validation(vec![
            FieldViolation::new("title", "must not be empty"),
            FieldViolation::new("title", "too long"),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("title: must not be empty"));
        assert!(msg.contains("title: too long"));
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_field_violation_serializes() {
        let v = FieldViolation::new("title", "must not be empty");
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["field"], "title");
        assert_eq!(json["message"], "must not be empty");
    }
}
