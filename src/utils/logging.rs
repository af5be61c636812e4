use std::io;
use std::path::Path;

use chrono::Local;
use tracing::Level;
use tracing_appender::rolling::{ RollingFileAppender, Rotation };
use tracing_subscriber::{
    fmt::{ self, format::FmtSpan },
    prelude::*,
    filter::LevelFilter,
    EnvFilter,
};

use crate::config::{ LogConfig, LogRotation };

/// Initialize the logging system with a non-blocking rolling file appender
/// and, in debug mode, a pretty console layer.
pub fn init_logging(level: Level, debug: bool, log_config: &LogConfig) -> io::Result<()> {
    if !log_config.directory.exists() {
        std::fs::create_dir_all(&log_config.directory)?;
    }

    let timestamp = Local::now().format("%Y%m%d");
    let filename = format!("{}_{}.log", log_config.filename_prefix, timestamp);

    let rotation = match log_config.rotation {
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Never => Rotation::NEVER,
    };

    let file_appender = RollingFileAppender::new(rotation, log_config.directory.clone(), filename);
    let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt
        ::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE);

    let level_filter = LevelFilter::from_level(level);
    let filter = EnvFilter::from_default_env().add_directive(level_filter.into());

    if debug {
        let (console_writer, console_guard) = tracing_appender::non_blocking(io::stdout());

        let console_layer = fmt
            ::layer()
            .with_writer(console_writer)
            .with_ansi(true)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .pretty();

        tracing_subscriber::registry().with(filter).with(file_layer).with(console_layer).init();

        // The guards keep the background writer threads alive; dropping them
        // loses logs, so they live until process exit.
        std::mem::forget(console_guard);
    } else {
        tracing_subscriber::registry().with(filter).with(file_layer).init();
    }

    std::mem::forget(file_guard);

    if let Some(max_files) = log_config.max_files {
        if
            let Err(e) = cleanup_old_logs(
                &log_config.directory,
                &log_config.filename_prefix,
                max_files
            )
        {
            // Initialization survives a failed cleanup
            eprintln!("Failed to clean up old log files: {}", e);
        }
    }

    tracing::info!(
        log_dir = %log_config.directory.display(),
        log_prefix = %log_config.filename_prefix,
        "Logging initialized at level: {:?}",
        level
    );

    Ok(())
}

/// Delete the oldest log files with our prefix beyond `max_files`
fn cleanup_old_logs(log_dir: &Path, prefix: &str, max_files: usize) -> io::Result<()> {
    let mut entries = std::fs
        ::read_dir(log_dir)?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();

            if path.is_file() && path.file_name()?.to_string_lossy().starts_with(prefix) {
                let modified = entry.metadata().ok()?.modified().ok()?;
                return Some((path, modified));
            }
            None
        })
        .collect::<Vec<_>>();

    if entries.len() > max_files {
        // Newest first, delete the tail
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        for (path, _) in entries.iter().skip(max_files) {
            std::fs::remove_file(path)?;
        }
    }

    Ok(())
}
