//! Schema migration command

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use trio_core::{ServiceKind, ServiceSettings, TrioConfig};

use super::{open_database, Service};

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Service whose database to migrate
    #[arg(value_enum)]
    pub service: Service,

    /// Database URL (overrides config and environment)
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Create the service's tables (and seed data) without starting a server
pub async fn run_migrate(args: MigrateArgs, config_path: Option<&Path>) -> Result<()> {
    let config = TrioConfig::load(config_path).context("Failed to load configuration")?;
    let flags = ServiceSettings {
        database_url: args.database_url,
        ..Default::default()
    };
    let resolved = config.resolve(ServiceKind::from(args.service), &flags);

    let pool = open_database(&resolved).await?;
    pool.close().await;

    println!(
        "Migrated {} database at {}",
        resolved.service, resolved.database_url
    );
    Ok(())
}
