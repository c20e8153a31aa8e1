//! Log output setup
//!
//! The library itself stays silent; the binary routes the `log` facade through
//! `fern` to stderr when logging is enabled in the configuration.

use anyhow::{anyhow, Result};
use log::Record;

use crate::config::LoggingConfig;
use crate::constants::LOG_TIME_FORMAT;

/// Install the global logger described by `config`
///
/// Does nothing when logging is disabled. Fails if a logger is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = config.level_filter()?;

    fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("{}", format_line(record, message))))
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| anyhow!("Failed to install logger: {e}"))?;

    log::debug!("Logging initialized at level {}", level);
    Ok(())
}

/// `[HH:MM:SS.mmm LEVEL target] message`
pub fn format_line(record: &Record, message: &std::fmt::Arguments) -> String {
    let timestamp = chrono::Local::now().format(LOG_TIME_FORMAT);
    format!("[{} {} {}] {}", timestamp, record.level(), record.target(), message)
}
