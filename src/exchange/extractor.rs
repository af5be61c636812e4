use chrono::{ DateTime, Utc };
use serde_json::Value;
use tracing::{ debug, info, warn };

use crate::exchange::ExchangeError;
use crate::models::kraken_models::{ row_index, KrakenOhlcResponse, LAST_CURSOR_KEY };
use crate::models::ohlc::OhlcBar;

/// Unix time of 2010-01-01, before the first crypto transaction
pub const UNIX_TIME_2010: i64 = 1_262_304_000;

/// A tradable timestamp is an integer between 2010 and now; no time travel
fn is_valid_unix_time(time_stamp: i64, now: i64) -> bool {
    (UNIX_TIME_2010..=now).contains(&time_stamp)
}

fn round_price(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Turns one Kraken OHLC response into daily bars for a requested symbol.
///
/// Handles the quirks of the public endpoint: the `error` array, the result
/// key that may not match the requested pair, and rows whose columns fail to
/// parse (logged and skipped, never fatal).
pub struct OhlcExtractor<'a> {
    response: &'a KrakenOhlcResponse,
    symbol: &'a str,
}

impl<'a> OhlcExtractor<'a> {
    pub fn new(response: &'a KrakenOhlcResponse, symbol: &'a str) -> Self {
        Self { response, symbol }
    }

    pub fn extract(&self) -> Result<Vec<OhlcBar>, ExchangeError> {
        if !self.response.error.is_empty() {
            return Err(ExchangeError::ErrorResponse(self.response.error.clone()));
        }

        let rows = self.result_rows()?;
        let now = Utc::now().timestamp();

        let mut bars = Vec::with_capacity(rows.len());
        for row in rows {
            match bar_from_row(row, now) {
                Ok(bar) => bars.push(bar),
                Err(reason) => warn!("Skipping OHLC row for {}: {}", self.symbol, reason),
            }
        }

        // When data starts later than requested, Kraken silently answers from
        // the closest date; keep that date visible.
        if let Some(first) = bars.first() {
            info!("First date for {} is {}", self.symbol, first.date);
        }

        Ok(bars)
    }

    /// Rows for the requested symbol, falling back to the single non-cursor
    /// key when Kraken answers under its own spelling of the pair
    /// (e.g. BTCUSD comes back as XXBTZUSD).
    fn result_rows(&self) -> Result<&'a [Value], ExchangeError> {
        if let Some(rows) = self.response.result.get(self.symbol).and_then(Value::as_array) {
            return Ok(rows);
        }

        let mut candidates = self.response.result
            .iter()
            .filter(|(key, _)| key.as_str() != LAST_CURSOR_KEY);

        match (candidates.next(), candidates.next()) {
            (Some((key, value)), None) => {
                debug!("Requested {} answered under {}", self.symbol, key);
                value
                    .as_array()
                    .map(Vec::as_slice)
                    .ok_or_else(|| ExchangeError::UnrelatedResponse(self.symbol.to_string()))
            }
            _ => Err(ExchangeError::UnrelatedResponse(self.symbol.to_string())),
        }
    }
}

fn bar_from_row(row: &Value, now: i64) -> Result<OhlcBar, String> {
    let items = row.as_array().ok_or_else(|| "row is not an array".to_string())?;

    let time_stamp = items
        .get(row_index::DATE)
        .and_then(Value::as_i64)
        .ok_or_else(|| "missing or non-integer timestamp".to_string())?;

    if !is_valid_unix_time(time_stamp, now) {
        return Err(format!("timestamp {} outside the tradable range", time_stamp));
    }

    let date = DateTime::<Utc>::from_timestamp(time_stamp, 0)
        .ok_or_else(|| format!("timestamp {} is not a valid time", time_stamp))?
        .date_naive();

    Ok(OhlcBar {
        date,
        open: price_at(items, row_index::OPEN)?,
        high: price_at(items, row_index::HIGH)?,
        low: price_at(items, row_index::LOW)?,
        close: price_at(items, row_index::CLOSE)?,
    })
}

/// Kraken sends prices as decimal strings; tolerate plain numbers too
fn price_at(items: &[Value], index: usize) -> Result<f64, String> {
    let value = items.get(index).ok_or_else(|| format!("missing column {}", index))?;

    let price = match value {
        Value::String(s) => s.parse::<f64>().map_err(|e| format!("bad price {:?}: {}", s, e))?,
        Value::Number(n) => n.as_f64().ok_or_else(|| format!("bad price {}", n))?,
        other => {
            return Err(format!("unexpected price value {}", other));
        }
    };

    Ok(round_price(price))
}
