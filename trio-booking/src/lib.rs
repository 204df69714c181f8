//! trio-booking: venue, artist and show booking service
//!
//! Venues and artists are listed, searched, edited and deleted; shows book
//! an artist at a venue for a start time. Pages are JSON documents and
//! every mutation answers with a flash message.

pub mod db;
pub mod flash;
pub mod listing;
pub mod models;
pub mod routes;

use axum::Router;
use sqlx::SqlitePool;
use trio_core::http::health;
use trio_core::AppState;

const SCHEMA: &str = include_str!("schema.sql");

/// Create the booking tables (idempotent).
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running booking migrations...");
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

/// Build the booking router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(routes::home::router())
        .merge(routes::venues::router())
        .merge(routes::artists::router())
        .merge(routes::shows::router())
        .with_state(state)
}
