//! rTimeclock library root.
//! Exposes the event store, the hours calculator, exports, the CLI parser
//! and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, config_path: &Path, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(config_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, config_path, cfg),
        Commands::Digest { username, password } => {
            cli::commands::digest::handle(username, password)
        }
        Commands::Session { user, password } => {
            cli::commands::session::handle(user, password, cfg)
        }
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ resolve and load config once (defaults when the file is missing)
    let config_path = Config::resolve_path(cli.config.as_deref());
    let cfg = Config::load(&config_path)?;

    // 3️⃣ dispatch
    dispatch(&cli, &config_path, &cfg)
}
