use std::fs::OpenOptions;
use std::io::{ self, Write };
use std::path::PathBuf;

use crate::models::ohlc::OhlcBar;

pub const CSV_HEADER: &str = "symbol,date,open,high,low,close";

/// Writes fetched market bars as CSV, creating the target file on first use
/// and appending on later runs.
pub struct CsvWriter {
    path: PathBuf,
}

impl CsvWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append the header line and one line per bar
    pub fn write_bars(&self, symbol: &str, bars: &[OhlcBar]) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;

        writeln!(file, "{}", CSV_HEADER)?;
        for bar in bars {
            writeln!(
                file,
                "{},{},{},{},{},{}",
                symbol,
                bar.date.format("%Y-%m-%d"),
                bar.open,
                bar.high,
                bar.low,
                bar.close
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(day: u32, open: f64) -> OhlcBar {
        OhlcBar {
            date: NaiveDate::from_ymd_opt(2021, 8, day).unwrap(),
            open,
            high: 46000.0,
            low: 44000.0,
            close: 45800.95,
        }
    }

    fn temp_target(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("kraken_tracker_{}_{}.csv", name, std::process::id()))
    }

    #[test]
    fn writes_header_then_one_line_per_bar() {
        let path = temp_target("write");
        let _ = std::fs::remove_file(&path);

        CsvWriter::new(&path).write_bars("BTCUSD", &[bar(13, 44500.0), bar(14, 45800.95)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "BTCUSD,2021-08-13,44500,46000,44000,45800.95");
        assert_eq!(lines.len(), 3);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn appends_on_a_second_write() {
        let path = temp_target("append");
        let _ = std::fs::remove_file(&path);

        let writer = CsvWriter::new(&path);
        writer.write_bars("BTCUSD", &[bar(13, 44500.0)]).unwrap();
        writer.write_bars("ETHUSD", &[bar(14, 3100.0)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();

        assert_eq!(content.lines().count(), 4);
        assert!(content.lines().nth(3).unwrap().starts_with("ETHUSD,2021-08-14"));

        let _ = std::fs::remove_file(&path);
    }
}
