use std::path::PathBuf;

use anyhow::{ anyhow, Context, Result };
use chrono::{ NaiveDate, NaiveTime };
use tracing::info;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::exchange::extractor::OhlcExtractor;
use crate::exchange::kraken::KrakenClient;
use crate::ui::csv::CsvWriter;
use crate::ui::table;
use crate::utils::console;

pub fn run_market(
    config: Config,
    symbol: &str,
    since: &str,
    output: OutputFormat,
    path: Option<PathBuf>
) -> Result<()> {
    let since_ts = parse_since(since)?;

    let client = KrakenClient::new(&config.kraken_ohlc_url).context(
        "Failed to create Kraken client"
    )?;

    let rt = tokio::runtime::Builder
        ::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    let response = rt
        .block_on(async {
            tokio::time::timeout(crate::API_TIMEOUT, client.fetch_daily_ohlc(symbol, since_ts)).await
        })
        .map_err(|_| anyhow!("Timed out while fetching OHLC data"))?
        .context("Failed to fetch OHLC data from Kraken")?;

    let bars = OhlcExtractor::new(&response, symbol)
        .extract()
        .context("Failed to extract OHLC rows")?;

    info!("✓ Extracted {} daily bars for {}", bars.len(), symbol);

    match output {
        OutputFormat::Stdout => {
            console::print_table(&table::render_ohlc_table(&bars));
        }
        OutputFormat::Csv => {
            let path = path.ok_or_else(|| anyhow!("--path is required for csv output"))?;
            CsvWriter::new(&path)
                .write_bars(symbol, &bars)
                .context("Failed to write csv output")?;
            info!("✓ Wrote {} bars to {}", bars.len(), path.display());
        }
    }

    Ok(())
}

/// Parse a YYYY-MM-DD start date into the unix time of its midnight
fn parse_since(since: &str) -> Result<i64> {
    let date = NaiveDate::parse_from_str(since, "%Y-%m-%d").context(
        "Failed to parse --since date, expected YYYY-MM-DD"
    )?;

    Ok(date.and_time(NaiveTime::MIN).and_utc().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_default_start_date() {
        assert_eq!(parse_since("2021-08-01").unwrap(), 1_627_776_000);
    }

    #[test]
    fn rejects_a_malformed_start_date() {
        assert!(parse_since("01.08.2021").is_err());
        assert!(parse_since("2021-13-01").is_err());
    }
}
