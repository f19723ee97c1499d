//! Diagnostic logging setup.
//!
//! Logs go to stderr so that a report printed on stdout stays clean.

use crate::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over `level`.
pub fn init(level: &str) -> AppResult<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|err| {
            AppError::Telemetry(format!("invalid log level/filter '{level}': {err}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|err| AppError::Telemetry(err.to_string()))
}
