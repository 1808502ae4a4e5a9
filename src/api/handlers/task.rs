//! Task CRUD and suggestion lifecycle handlers.
//!
//! Every route here requires a valid bearer token; the [`CurrentUser`]
//! extractor rejects the request with 401 before these functions run.

use crate::api::dto::{
    CreateTaskBody, ImproveTaskBody, ImproveTaskResponse, MessageResponse, TaskResponse,
    UpdateTaskBody,
};
use crate::api::error::ApiErrorResponse;
use crate::api::extract::CurrentUser;
use crate::api::state::AppState;
use crate::task::domain::TaskId;
use crate::task::services::{CreateTaskRequest, UpdateTaskRequest};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;
use uuid::Uuid;

/// `GET /tasks` - list the caller's tasks, oldest first.
///
/// # Errors
///
/// Returns 500 when the repository lookup fails.
pub async fn list_tasks(
    State(state): State<AppState>,
    CurrentUser(owner): CurrentUser,
) -> Result<Json<Vec<TaskResponse>>, ApiErrorResponse> {
    let tasks = state.tasks.list(owner).await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// `POST /tasks` - create a task.
///
/// # Errors
///
/// Returns 400 when the title is missing or empty.
pub async fn create_task(
    State(state): State<AppState>,
    CurrentUser(owner): CurrentUser,
    Json(body): Json<CreateTaskBody>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiErrorResponse> {
    let mut request = CreateTaskRequest::new(body.title);
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    if let Some(priority) = body.priority {
        request = request.with_priority(priority);
    }

    let task = state.tasks.create(owner, request).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

/// `PUT /tasks/{id}` - overwrite title and/or description.
///
/// # Errors
///
/// Returns 404 when the task does not exist for the caller and 400 when the
/// new title is empty.
pub async fn update_task(
    State(state): State<AppState>,
    CurrentUser(owner): CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTaskBody>,
) -> Result<Json<TaskResponse>, ApiErrorResponse> {
    let mut request = UpdateTaskRequest::new();
    if let Some(title) = body.title {
        request = request.with_title(title);
    }
    if let Some(description) = body.description {
        request = request.with_description(description);
    }

    let task = state
        .tasks
        .update_fields(owner, TaskId::from_uuid(id), request)
        .await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `DELETE /tasks/{id}` - permanently remove a task.
///
/// # Errors
///
/// Returns 404 when the task does not exist for the caller.
pub async fn delete_task(
    State(state): State<AppState>,
    CurrentUser(owner): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiErrorResponse> {
    state.tasks.delete(owner, TaskId::from_uuid(id)).await?;
    Ok(Json(MessageResponse::new("task deleted")))
}

/// `PATCH /tasks/{id}/completed` (and its `POST` alias) - set the
/// completion flag.
///
/// # Errors
///
/// Returns 400 when the payload's `completed` field is not a boolean and
/// 404 when the task does not exist for the caller.
pub async fn set_completed(
    State(state): State<AppState>,
    CurrentUser(owner): CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Result<Json<TaskResponse>, ApiErrorResponse> {
    let Some(completed) = body.get("completed").and_then(Value::as_bool) else {
        return Err(ApiErrorResponse::bad_request("completed must be a boolean"));
    };

    let task = state
        .tasks
        .set_completed(owner, TaskId::from_uuid(id), completed)
        .await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `POST /tasks/improve` - request a fresh suggestion for a task.
///
/// # Errors
///
/// Returns 404 when the task does not exist for the caller, 429 when the
/// provider's quota is exhausted, and 500 on any other provider failure.
pub async fn improve_task(
    State(state): State<AppState>,
    CurrentUser(owner): CurrentUser,
    Json(body): Json<ImproveTaskBody>,
) -> Result<Json<ImproveTaskResponse>, ApiErrorResponse> {
    let task = state
        .tasks
        .request_suggestion(owner, TaskId::from_uuid(body.task_id))
        .await?;

    let ai_suggestion = task
        .suggestion()
        .as_pending()
        .map(|pending| pending.text.clone())
        .ok_or_else(|| ApiErrorResponse::internal_error("suggestion was not recorded"))?;
    Ok(Json(ImproveTaskResponse { ai_suggestion }))
}

/// `POST /tasks/{id}/accept-ai` - apply the pending suggestion.
///
/// # Errors
///
/// Returns 404 when the task does not exist for the caller or no suggestion
/// is pending.
pub async fn accept_suggestion(
    State(state): State<AppState>,
    CurrentUser(owner): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskResponse>, ApiErrorResponse> {
    let task = state
        .tasks
        .accept_suggestion(owner, TaskId::from_uuid(id))
        .await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `POST /tasks/{id}/undo-ai` - discard the pending suggestion.
///
/// # Errors
///
/// Returns 404 when the task does not exist for the caller or no suggestion
/// is pending.
pub async fn undo_suggestion(
    State(state): State<AppState>,
    CurrentUser(owner): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskResponse>, ApiErrorResponse> {
    let task = state
        .tasks
        .reject_suggestion(owner, TaskId::from_uuid(id))
        .await?;
    Ok(Json(TaskResponse::from(&task)))
}
