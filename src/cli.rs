//! Command-line interface of the tracker client.
//!
//! One subcommand per flow; see `main` for dispatch.
use std::path::PathBuf;

use clap::{ Parser, Subcommand, ValueEnum };

/// Console client for a Kraken-style symbol tracking service.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a new coin symbol with the tracking service.
    Add {
        /// Human-readable coin name.
        #[clap(long)]
        coin_name: Option<String>,

        /// Ticker of the coin, e.g. BTC.
        #[clap(long)]
        coin_symbol: Option<String>,

        /// Currency code the pair is tracked against, e.g. USD.
        #[clap(long)]
        currency: Option<String>,
    },

    /// Load the tracked symbols and display their OHLC overview table.
    Overview,

    /// Register the well-known starter coins for one currency.
    Seed {
        /// Currency code combined with every starter coin (USD, GBP, EUR or JPY).
        #[clap(long, default_value = "USD")]
        currency: String,
    },

    /// Fetch daily OHLC history for one symbol from the Kraken public API.
    Market {
        /// Symbol to request, e.g. BTCUSD.
        symbol: String,

        /// Start date of the requested history, YYYY-MM-DD.
        #[clap(long, default_value = "2021-08-01")]
        since: String,

        /// Where the fetched bars go.
        #[clap(long, value_enum, default_value = "stdout")]
        output: OutputFormat,

        /// Target file for csv output.
        #[clap(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Stdout,
    Csv,
}
