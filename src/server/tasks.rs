//! Task endpoints: five REST routes mapped onto the repository operations.
//!
//! Validation at this layer is limited to `title` presence; everything else
//! passes through to storage. Storage failures answer with a generic body
//! while the underlying error is logged server-side and never leaked.

use super::AppState;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskPayload};
use crate::msg_error;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Error responses a task endpoint can produce.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty required input.
    #[error("{0}")]
    Validation(Message),
    /// The id does not resolve to a row.
    #[error("{0}")]
    NotFound(Message),
    /// Any failure talking to the database. Carries only the generic body
    /// text; the detail has already been logged.
    #[error("{0}")]
    Storage(Message),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Logs the storage failure and maps it to the endpoint's generic body.
fn storage_error(body: Message, err: anyhow::Error) -> ApiError {
    msg_error!(Message::StorageError(format!("{err:#}")));
    ApiError::Storage(body)
}

pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.tasks.fetch().await.map_err(|e| storage_error(Message::TasksFetchFailed, e))?;

    Ok(Json(tasks))
}

pub async fn get_task(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Task>, ApiError> {
    let task = state.tasks.get_by_id(id).await.map_err(|e| storage_error(Message::TaskFetchFailed, e))?;

    match task {
        Some(task) => Ok(Json(task)),
        None => Err(ApiError::NotFound(Message::TaskNotFound)),
    }
}

pub async fn create_task(State(state): State<AppState>, Json(payload): Json<TaskPayload>) -> Result<(StatusCode, Json<Task>), ApiError> {
    let title = payload.title().ok_or(ApiError::Validation(Message::TitleRequired))?;

    let task = state
        .tasks
        .insert(title, payload.description.as_deref())
        .await
        .map_err(|e| storage_error(Message::TaskCreateFailed, e))?;

    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<Task>, ApiError> {
    let title = payload.title().ok_or(ApiError::Validation(Message::TitleRequired))?;

    // Update is a full overwrite, so an omitted flag writes the creation
    // default rather than preserving hidden state.
    let completed = payload.completed.unwrap_or(false);

    let task = state
        .tasks
        .update(id, title, payload.description.as_deref(), completed)
        .await
        .map_err(|e| storage_error(Message::TaskUpdateFailed, e))?;

    match task {
        Some(task) => Ok(Json(task)),
        None => Err(ApiError::NotFound(Message::TaskNotFound)),
    }
}

pub async fn delete_task(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let deleted = state.tasks.delete(id).await.map_err(|e| storage_error(Message::TaskDeleteFailed, e))?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(Message::TaskNotFound))
    }
}
