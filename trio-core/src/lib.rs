//! trio-core: plumbing shared by the booking, todo and trivia services
//!
//! - `models`: validation errors, pagination, search patterns, lenient
//!   request field parsing
//! - `db`: SQLite pool construction and the storage error type
//! - `http`: JSON error envelope, extractors, health route, server runner
//! - `config`: per-service settings loaded from TOML and the environment
//! - `state`: the request context carrying the connection pool

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use config::{ConfigError, ResolvedService, ServiceKind, ServiceSettings, TrioConfig};
pub use db::DbError;
pub use http::{ApiError, ServerConfig};
pub use models::{Pagination, ValidationError};
pub use state::AppState;
