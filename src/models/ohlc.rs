use std::fmt;
use chrono::NaiveDate;
use serde::Serialize;

/// One daily OHLC bar for a symbol, as extracted from the Kraken public API.
///
/// Crypto trades around the clock, so `open` is the price at midnight and
/// `close` the price one minute before the next midnight. Prices are rounded
/// to two decimals on extraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OhlcBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl fmt::Display for OhlcBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} O={} H={} L={} C={}",
            self.date, self.open, self.high, self.low, self.close
        )
    }
}
