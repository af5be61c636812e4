use std::env;
use std::path::PathBuf;

use anyhow::{ Context, Result };
use dotenv::dotenv;
use serde::{ Deserialize, Serialize };
use tracing::Level;

use crate::utils::serde_helpers::{ serialize_level, deserialize_level };

/// Runtime configuration, loaded from the environment with `KST_` prefixes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub debug: bool,

    /// Base URL of the kraken-symbols service
    pub backend_url: String,

    /// Kraken public OHLC endpoint used by the market mode
    pub kraken_ohlc_url: String,

    #[serde(serialize_with = "serialize_level", deserialize_with = "deserialize_level")]
    pub log_level: Level,
    pub log_config: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub directory: PathBuf,
    pub filename_prefix: String,
    pub rotation: LogRotation,
    pub max_files: Option<usize>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load environment variables from a .env file when present
        if let Ok(path) = dotenv() {
            println!("Loaded .env file from: {}", path.display());
        }

        let debug = env
            ::var("KST_DEBUG")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .context("Failed to parse KST_DEBUG environment variable")?;

        let backend_url = env
            ::var("KST_BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:8000/".to_string());

        let kraken_ohlc_url = env
            ::var("KST_KRAKEN_OHLC_URL")
            .unwrap_or_else(|_| "https://api.kraken.com/0/public/OHLC".to_string());

        let log_level_str = env::var("KST_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_level = parse_level(&log_level_str);

        let log_dir = env::var("KST_LOG_DIRECTORY").unwrap_or_else(|_| "logs".to_string());

        let log_prefix = env
            ::var("KST_LOG_FILENAME_PREFIX")
            .unwrap_or_else(|_| "kraken_tracker".to_string());

        let log_rotation_str = env::var("KST_LOG_ROTATION").unwrap_or_else(|_| "daily".to_string());
        let log_rotation = parse_rotation(&log_rotation_str);

        let max_files = env
            ::var("KST_LOG_MAX_FILES")
            .ok()
            .and_then(|s| s.parse::<usize>().ok());

        let log_config = LogConfig {
            directory: PathBuf::from(log_dir),
            filename_prefix: log_prefix,
            rotation: log_rotation,
            max_files,
        };

        Ok(Config {
            debug,
            backend_url,
            kraken_ohlc_url,
            log_level,
            log_config,
        })
    }
}

fn parse_level(s: &str) -> Level {
    match s.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn parse_rotation(s: &str) -> LogRotation {
    match s.to_lowercase().as_str() {
        "hourly" => LogRotation::Hourly,
        "never" => LogRotation::Never,
        _ => LogRotation::Daily,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("verbose"), Level::INFO);
    }

    #[test]
    fn unknown_rotation_falls_back_to_daily() {
        assert!(matches!(parse_rotation("hourly"), LogRotation::Hourly));
        assert!(matches!(parse_rotation("weekly"), LogRotation::Daily));
    }

    #[test]
    fn config_serializes_the_level_as_a_string() {
        let config = Config {
            debug: false,
            backend_url: "http://localhost:8000/".to_string(),
            kraken_ohlc_url: "https://api.kraken.com/0/public/OHLC".to_string(),
            log_level: Level::DEBUG,
            log_config: LogConfig {
                directory: PathBuf::from("logs"),
                filename_prefix: "kraken_tracker".to_string(),
                rotation: LogRotation::Daily,
                max_files: None,
            },
        };

        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["log_level"], "debug");
    }
}
