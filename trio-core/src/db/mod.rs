//! Database layer - connection pool and storage errors
//!
//! # Design Principles
//!
//! - One pool per service, passed explicitly through handler state
//! - List operations use JOINs - no N+1 queries
//! - Every mutation runs inside one transaction; dropping it rolls back

pub mod error;
pub mod pool;

pub use error::DbError;
pub use pool::{create_pool, create_pool_with_options, memory_pool};
pub use sqlx::SqlitePool;
