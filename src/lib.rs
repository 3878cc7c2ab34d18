//! rShipAudit library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (also used directly by the integration tests).

pub mod ai;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Checklist { zone } => commands::checklist::handle(*zone),
        Commands::User { action } => commands::user::handle(action, cfg),
        Commands::Login { email, password } => commands::login::handle(email, password, cfg),
        Commands::Session { action } => commands::session::handle(action, cfg),
        Commands::Status { date } => commands::status::handle(date.as_deref(), cfg),
        Commands::List { ship, zone, date } => {
            commands::list::handle(*ship, *zone, date.as_deref(), cfg)
        }
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Report { .. } => commands::report::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once; --db wins over the configured database
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
