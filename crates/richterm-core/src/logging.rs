// Rust guideline compliant 2026-10-17

//! Logging setup shared by the richterm binaries.

use crate::{Error, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Environment variable selecting the log level.
pub const LOG_ENV_VAR: &str = "RICHTERM_LOG";

/// Level used when `RICHTERM_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Installs a stderr subscriber at the level named by `RICHTERM_LOG`.
///
/// A subscriber that is already installed is left in place.
///
/// # Errors
///
/// Returns `Error::InvalidConfig` if `RICHTERM_LOG` names an unknown level.
pub fn init_tracing() -> Result<()> {
    let level = match std::env::var(LOG_ENV_VAR) {
        Ok(value) => parse_log_level(&value)?,
        Err(_) => parse_log_level(DEFAULT_LOG_LEVEL)?,
    };

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a log level name.
///
/// # Errors
///
/// Returns `Error::InvalidConfig` for anything other than
/// error, warn, info, debug or trace.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.trim().to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(Error::InvalidConfig(format!("Invalid log level: {}", other))),
    }
}
