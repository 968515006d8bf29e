use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{patch, post, put},
};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    db::entities::todo::{self, TodoStatus},
    error::AppError,
    response::{ApiResult, OK_BODY},
    routes::extract::JsonPayload,
    services::{
        ServiceContext,
        todo_service::{TodoInput, TodoService},
    },
    state::AppState,
};

/// Body accepted by create and update. Server managed fields sent by clients are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRequest {
    #[serde(default)]
    pub title: String,
    pub note: Option<String>,
    pub due_at: Option<DateTime<FixedOffset>>,
    pub status: Option<TodoStatus>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleCompleteRequest {
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: Uuid,
    pub title: String,
    pub note: Option<String>,
    pub due_at: Option<DateTime<Utc>>,
    pub status: TodoStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/todos", post(create_todo).get(list_todos))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
        .route("/todos/{id}/complete", patch(toggle_complete))
        .with_state(state)
}

async fn create_todo(
    State(state): State<Arc<AppState>>,
    JsonPayload(body): JsonPayload<TodoRequest>,
) -> ApiResult<TodoResponse> {
    let todo = todo_service_from_state(&state).create(body.into()).await?;
    Ok(Json(todo.into()))
}

async fn list_todos(State(state): State<Arc<AppState>>) -> ApiResult<Vec<TodoResponse>> {
    let todos = todo_service_from_state(&state).list().await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonPayload(body): JsonPayload<TodoRequest>,
) -> ApiResult<TodoResponse> {
    let id = require_id(&id)?;
    let todo = todo_service_from_state(&state)
        .update(&id, body.into())
        .await?;
    Ok(Json(todo.into()))
}

async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<&'static str, AppError> {
    // An id that is not a uuid cannot match a row.
    if let Ok(id) = Uuid::parse_str(&id) {
        todo_service_from_state(&state).delete(&id).await?;
    }
    Ok(OK_BODY)
}

async fn toggle_complete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonPayload(body): JsonPayload<ToggleCompleteRequest>,
) -> ApiResult<TodoResponse> {
    let id = require_id(&id)?;
    let todo = todo_service_from_state(&state)
        .toggle_complete(&id, body.completed)
        .await?;
    Ok(Json(todo.into()))
}

fn require_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found("not found"))
}

fn todo_service_from_state(state: &AppState) -> TodoService {
    ServiceContext::from_state(state).todo()
}

impl From<TodoRequest> for TodoInput {
    fn from(request: TodoRequest) -> Self {
        Self {
            title: request.title,
            note: request.note,
            due_at: request.due_at,
            status: request.status,
        }
    }
}

impl From<todo::Model> for TodoResponse {
    fn from(model: todo::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            note: model.note,
            due_at: model.due_at.map(|due_at| due_at.with_timezone(&Utc)),
            status: model.status,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
