//! Tracing subscriber setup

use crate::config::{LogConfig, LogFormat};
use crate::error::{Result, SiteError};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// `RUST_LOG` wins over the configured filter. Logs go to stderr so command
/// output on stdout stays machine-readable.
///
/// # Errors
/// Returns [`SiteError::Telemetry`] if the filter is invalid or a global
/// subscriber is already set.
pub fn init_tracing(config: &LogConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter)
            .map_err(|e| SiteError::Telemetry(format!("bad filter `{}`: {e}", config.filter)))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| SiteError::Telemetry(e.to_string()))
}
