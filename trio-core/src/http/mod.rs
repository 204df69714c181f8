//! HTTP layer shared by the services
//!
//! - JSON error envelope (`ApiError`)
//! - Extractors that reject with the same envelope
//! - Health route
//! - Server runner with CORS, tracing and graceful shutdown

pub mod error;
pub mod extractors;
pub mod health;
pub mod server;

pub use error::ApiError;
pub use extractors::{JsonBody, RowId};
pub use server::{run_server, with_middleware, ServerConfig, ServerError};
