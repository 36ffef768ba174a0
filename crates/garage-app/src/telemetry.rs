//! Tracing subscriber setup

use garage_types::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Build a filter from a directive string such as `warn` or `garage_domain=debug`
pub fn parse_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).map_err(|e| {
        Error::Telemetry(format!(
            "invalid log level/filter '{}': unable to build EnvFilter ({})",
            directive, e
        ))
    })
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `log_level`.
///
/// Logs go to stderr so they never interleave with menu output.
pub fn init(log_level: &str) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::Telemetry(e.to_string()))
}
