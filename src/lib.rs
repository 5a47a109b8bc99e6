//! rAttendance library root.
//! Exposes the CLI parser, the high-level run() function and the reporting
//! core (loader, join/filter/stats engine, export projector).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod health;
pub mod loader;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Settings { .. } => cli::commands::settings::handle(&cli.command, cfg),
        Commands::Health => {
            cli::commands::health::handle(cfg).await;
            Ok(())
        }
        Commands::Attendance { filters, stats } => {
            cli::commands::attendance::handle(filters, *stats, cfg).await
        }
        Commands::Logs { filters, detail } => {
            cli::commands::logs::handle(filters, detail.as_deref(), cfg).await
        }
        Commands::Departments { id } => cli::commands::departments::handle(id.as_deref(), cfg).await,
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg).await,
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `init` must work before any config exists; everything else loads it once.
    let cfg = match &cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(cli.config.as_deref())?,
    };

    dispatch(&cli, &cfg).await
}
