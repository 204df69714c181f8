//! Todo endpoints

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use trio_core::http::{ApiError, JsonBody, RowId};
use trio_core::AppState;

use super::Deleted;
use crate::models::{CompletedUpdate, NewTodo, Todo, TodoForm};
use crate::repo::TodoRepo;

/// POST /todos/create
async fn create_todo(
    State(state): State<AppState>,
    JsonBody(form): JsonBody<TodoForm>,
) -> Result<Json<Todo>, ApiError> {
    let new = NewTodo::try_from(form)?;
    Ok(Json(TodoRepo::new(state.pool()).create(&new).await?))
}

/// POST /todos/{id}/set_completed
async fn set_completed(
    State(state): State<AppState>,
    RowId(id): RowId,
    JsonBody(update): JsonBody<CompletedUpdate>,
) -> Result<Json<Todo>, ApiError> {
    let todo = TodoRepo::new(state.pool())
        .set_completed(id, update.completed)
        .await?;
    Ok(Json(todo))
}

/// DELETE /todos/{id}, and GET /todos/{id}/del_todo for link-driven clients
async fn delete_todo(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> Result<Json<Deleted>, ApiError> {
    TodoRepo::new(state.pool()).delete(id).await.map_err(|e| {
        if e.is_not_found() {
            tracing::warn!(id, "Delete of unknown todo");
        }
        e
    })?;
    Ok(Json(Deleted::new(id)))
}

/// Todo routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/todos/create", post(create_todo))
        .route("/todos/{id}", delete(delete_todo))
        .route("/todos/{id}/set_completed", post(set_completed))
        .route("/todos/{id}/del_todo", get(delete_todo))
}
