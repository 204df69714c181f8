//! Subcommand implementations

pub mod completions;
pub mod config;
pub mod migrate;
pub mod serve;

pub use completions::{run_completions, CompletionsArgs};
pub use config::{run_config, ConfigArgs};
pub use migrate::{run_migrate, MigrateArgs};
pub use serve::{run_serve, ServeArgs};

use anyhow::{Context, Result};
use clap::ValueEnum;
use trio_core::db::{create_pool, SqlitePool};
use trio_core::{ResolvedService, ServiceKind};

/// Service selector on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Venue, artist and show booking
    Booking,
    /// Todo lists
    Todo,
    /// Trivia quiz API
    Trivia,
}

impl From<Service> for ServiceKind {
    fn from(service: Service) -> Self {
        match service {
            Service::Booking => ServiceKind::Booking,
            Service::Todo => ServiceKind::Todo,
            Service::Trivia => ServiceKind::Trivia,
        }
    }
}

/// Open the service's database and bring its schema up to date.
pub(crate) async fn open_database(resolved: &ResolvedService) -> Result<SqlitePool> {
    let pool = create_pool(&resolved.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", resolved.database_url))?;

    let migrated = match resolved.service {
        ServiceKind::Booking => trio_booking::migrate(&pool).await,
        ServiceKind::Todo => trio_todo::migrate(&pool).await,
        ServiceKind::Trivia => trio_trivia::migrate(&pool).await,
    };
    migrated.with_context(|| format!("Failed to migrate {} database", resolved.service))?;

    Ok(pool)
}
