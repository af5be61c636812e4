mod app;
mod backend;
mod cli;
mod config;
mod enums;
mod exchange;
mod models;
mod ui;
mod utils;

use std::time::Duration;

use anyhow::{ Context, Result };
use clap::Parser;

use cli::{ Cli, Command };
use config::Config;
use utils::{ console, logging };

/// Upper bound for any single backend or exchange interaction
pub const API_TIMEOUT: Duration = Duration::from_secs(5);

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration with helpful error messages
    let config = Config::from_env().context(
        "Failed to load configuration from environment. Make sure you have a .env file with required variables."
    )?;

    // Initialize logging system
    logging
        ::init_logging(config.log_level, config.debug, &config.log_config)
        .context("Failed to initialize logging system")?;

    console::print_app_starting();
    if config.debug {
        console::print_config(&config);
    }

    match cli.command {
        Command::Add { coin_name, coin_symbol, currency } => {
            app::submit::run_submit(config, coin_name, coin_symbol, currency)
        }
        Command::Overview => app::overview::run_overview(config),
        Command::Seed { currency } => app::seed::run_seed(config, &currency),
        Command::Market { symbol, since, output, path } => {
            app::market::run_market(config, &symbol, &since, output, path)
        }
    }
}
