//! Todo list endpoints

use axum::{
    extract::State,
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use trio_core::http::{ApiError, JsonBody, RowId};
use trio_core::AppState;

use super::Deleted;
use crate::models::{ListForm, Todo, TodoList};
use crate::repo::{ListRepo, TodoRepo};

/// The list shown when none is named
pub const DEFAULT_LIST_ID: i64 = 1;

#[derive(Debug, Serialize)]
pub struct Lists {
    pub lists: Vec<TodoList>,
}

/// One list's todos, alongside every list for navigation
#[derive(Debug, Serialize)]
pub struct ListPage {
    pub lists: Vec<TodoList>,
    pub active_list: TodoList,
    pub todos: Vec<Todo>,
}

/// GET / - redirect to the default list
async fn index() -> Redirect {
    Redirect::to(&format!("/lists/{}", DEFAULT_LIST_ID))
}

/// GET /lists
async fn all_lists(State(state): State<AppState>) -> Result<Json<Lists>, ApiError> {
    let lists = ListRepo::new(state.pool()).list().await?;
    Ok(Json(Lists { lists }))
}

/// GET /lists/{id}
async fn list_page(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> Result<Json<ListPage>, ApiError> {
    let repo = ListRepo::new(state.pool());
    let active_list = repo.get(id).await?;
    let lists = repo.list().await?;
    let todos = TodoRepo::new(state.pool()).for_list(id).await?;

    Ok(Json(ListPage {
        lists,
        active_list,
        todos,
    }))
}

/// POST /lists/create
async fn create_list(
    State(state): State<AppState>,
    JsonBody(form): JsonBody<ListForm>,
) -> Result<Json<TodoList>, ApiError> {
    let name = form.name()?;
    Ok(Json(ListRepo::new(state.pool()).create(&name).await?))
}

/// DELETE /lists/{id}
async fn delete_list(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> Result<Json<Deleted>, ApiError> {
    ListRepo::new(state.pool()).delete(id).await.map_err(|e| {
        if e.is_not_found() {
            tracing::warn!(id, "Delete of unknown list");
        }
        e
    })?;
    Ok(Json(Deleted::new(id)))
}

/// List routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/lists", get(all_lists))
        .route("/lists/create", post(create_list))
        .route("/lists/{id}", get(list_page).delete(delete_list))
}
