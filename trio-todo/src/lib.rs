//! trio-todo: todo-list manager service
//!
//! Todos belong to lists. Lists can be browsed, created and deleted; todos
//! can be added, checked off and removed.

pub mod models;
pub mod repo;
pub mod routes;

use axum::Router;
use sqlx::SqlitePool;
use trio_core::http::health;
use trio_core::AppState;

const SCHEMA: &str = include_str!("schema.sql");

/// Create the todo tables (idempotent).
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running todo migrations...");
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

/// Build the todo router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(routes::lists::router())
        .merge(routes::todos::router())
        .with_state(state)
}
