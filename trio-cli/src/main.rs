//! trio CLI - run and administer the booking, todo and trivia services
//!
//! - `serve <service>`: run a service's HTTP API
//! - `migrate <service>`: create a service's schema
//! - `config show|path`: inspect resolved settings
//! - `completions <shell>`: generate shell completion scripts

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::{CompletionsArgs, ConfigArgs, MigrateArgs, ServeArgs};
use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "trio",
    author,
    version,
    about = "Booking, todo and trivia web services",
    long_about = "Run three small CRUD JSON services backed by SQLite: a venue/artist/show \
                  booking site, a todo-list manager and a trivia quiz API."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.trio/config.toml)
    #[arg(long, global = true, value_name = "PATH", env = "TRIO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a service's HTTP API server
    Serve(ServeArgs),
    /// Create a service's database schema
    Migrate(MigrateArgs),
    /// Inspect configuration (show, path)
    Config(ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, config_path).await?,
        Commands::Migrate(args) => commands::run_migrate(args, config_path).await?,
        Commands::Config(args) => commands::run_config(args, config_path)?,
        Commands::Completions(args) => commands::run_completions(args)?,
    }
    Ok(())
}
