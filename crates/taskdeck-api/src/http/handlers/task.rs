//! Task CRUD handlers for the REST API.
//!
//! Response bodies are the plain Task JSON (no envelope). A malformed id
//! path segment is indistinguishable from an unknown one and yields 404.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use taskdeck_core::repository::SortOrder;
use taskdeck_core::repository::task::TaskFilter;
use taskdeck_types::task::{
    CreateTaskRequest, ReplaceTaskRequest, Task, TaskId, UpdateTaskRequest,
};

use crate::http::error::AppError;
use crate::http::extractors::body::ValidJson;
use crate::http::extractors::query::TaskListQuery;
use crate::state::AppState;

fn parse_id(raw: &str) -> Result<TaskId, AppError> {
    raw.parse()
        .map_err(|_| AppError::Task(taskdeck_types::error::TaskError::NotFound))
}

/// GET /tasks - List tasks with filtering, sorting, and pagination.
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<TaskListQuery>,
) -> Result<Json<Vec<Task>>, AppError> {
    let pagination = &state.config.pagination;
    let limit = query
        .limit
        .unwrap_or(pagination.default_limit)
        .clamp(0, pagination.max_limit);

    let sort_order = match query.order.to_lowercase().as_str() {
        "desc" => Some(SortOrder::Desc),
        _ => Some(SortOrder::Asc),
    };

    let filter = Some(TaskFilter {
        completed: query.completed,
        sort_by: Some(query.sort),
        sort_order,
        limit: Some(limit),
        offset: query.offset,
    });

    let tasks = state.task_service.list_tasks(filter).await?;
    Ok(Json(tasks))
}

/// POST /tasks - Create a new task.
pub async fn create_task(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let task = state.task_service.create_task(body).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks/:id - Get a task by ID.
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, AppError> {
    let id = parse_id(&id)?;
    let task = state.task_service.get_task(&id).await?;
    Ok(Json(task))
}

/// PUT /tasks/:id - Full update; omitted optional fields revert to defaults.
pub async fn replace_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(body): ValidJson<ReplaceTaskRequest>,
) -> Result<Json<Task>, AppError> {
    let id = parse_id(&id)?;
    let task = state.task_service.replace_task(&id, body).await?;
    Ok(Json(task))
}

/// PATCH /tasks/:id - Partial update; only provided fields are applied.
pub async fn patch_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(body): ValidJson<UpdateTaskRequest>,
) -> Result<Json<Task>, AppError> {
    let id = parse_id(&id)?;
    let task = state.task_service.patch_task(&id, body).await?;
    Ok(Json(task))
}

/// DELETE /tasks/:id - Delete a task permanently.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.task_service.delete_task(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
