//! rTimesheets library root.
//! Exposes the report engine (models, core, report), the sheet ingestion,
//! the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ingest;
pub mod models;
pub mod report;
pub mod telemetry;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Categories { .. } => cli::commands::categories::handle(&cli.command),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);

    // init writes the file, so an unreadable one must not block it
    let cfg = match &cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(Some(config_path.as_path()))?,
    };

    telemetry::init(&cfg.log_level)?;
    tracing::debug!(config = %config_path.display(), "configuration loaded");

    dispatch(&cli, &cfg, &config_path)
}
