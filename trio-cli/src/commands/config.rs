//! Configuration inspection

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use trio_core::{ResolvedService, ServiceKind, ServiceSettings, TrioConfig};

use super::Service;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the resolved settings (file, environment and defaults combined)
    Show(ShowArgs),
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Only show this service
    #[arg(long, value_enum)]
    pub service: Option<Service>,

    /// Print JSON instead of TOML
    #[arg(long)]
    pub json: bool,
}

pub fn run_config(args: ConfigArgs, config_path: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommands::Show(args) => run_show(args, config_path),
        ConfigCommands::Path => run_path(config_path),
    }
}

fn resolved_services(
    config: &TrioConfig,
    only: Option<Service>,
) -> BTreeMap<&'static str, ResolvedService> {
    ServiceKind::ALL
        .into_iter()
        .filter(|kind| only.map_or(true, |s| ServiceKind::from(s) == *kind))
        .map(|kind| (kind.as_str(), config.resolve(kind, &ServiceSettings::default())))
        .collect()
}

fn run_show(args: ShowArgs, config_path: Option<&Path>) -> Result<()> {
    let config = TrioConfig::load(config_path).context("Failed to load configuration")?;
    let resolved = resolved_services(&config, args.service);

    let rendered = if args.json {
        serde_json::to_string_pretty(&resolved).context("Failed to render configuration")?
    } else {
        toml::to_string(&resolved).context("Failed to render configuration")?
    };
    println!("{}", rendered);
    Ok(())
}

fn run_path(config_path: Option<&Path>) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(TrioConfig::default_path);

    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; defaults are in use)");
    }
    Ok(())
}
