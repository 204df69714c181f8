//! trio-trivia: trivia quiz JSON API
//!
//! Questions belong to one of a fixed set of categories. Clients page
//! through questions, search them, add and delete them, and play quizzes
//! that never repeat a question.

pub mod models;
pub mod quiz;
pub mod repo;
pub mod routes;

use axum::Router;
use sqlx::SqlitePool;
use trio_core::http::health;
use trio_core::AppState;

const SCHEMA: &str = include_str!("schema.sql");

/// Create tables and seed the default categories (idempotent).
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running trivia migrations...");
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

/// Build the trivia router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(routes::categories::router())
        .merge(routes::questions::router())
        .merge(routes::quizzes::router())
        .with_state(state)
}
