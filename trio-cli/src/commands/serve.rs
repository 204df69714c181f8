//! HTTP server command
//!
//! Resolves the service's settings, migrates its database and serves it
//! until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use trio_core::http::run_server;
use trio_core::{AppState, ServiceKind, ServiceSettings, TrioConfig};

use super::{open_database, Service};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Service to run
    #[arg(value_enum)]
    pub service: Service,

    /// Address to bind to (default: 127.0.0.1:5000/5001/5002)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config and environment)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

impl ServeArgs {
    fn flags(&self) -> ServiceSettings {
        ServiceSettings {
            bind: self.bind,
            database_url: self.database_url.clone(),
            cors_permissive: self.cors_permissive.then_some(true),
        }
    }
}

/// Run one service's HTTP server
pub async fn run_serve(args: ServeArgs, config_path: Option<&Path>) -> Result<()> {
    let config = TrioConfig::load(config_path).context("Failed to load configuration")?;
    let kind = ServiceKind::from(args.service);
    let resolved = config.resolve(kind, &args.flags());

    tracing::info!("Starting {} service on {}", kind, resolved.bind);

    let pool = open_database(&resolved).await?;
    let state = AppState::new(pool);
    let app = match kind {
        ServiceKind::Booking => trio_booking::build_router(state),
        ServiceKind::Todo => trio_todo::build_router(state),
        ServiceKind::Trivia => trio_trivia::build_router(state),
    };

    // Blocks until shutdown
    run_server(app, resolved.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
