//! Structured logging on stderr.
//!
//! Command output goes to stdout, so diagnostics are written to stderr.
//! Records emitted through the `log` facade by the library crates are
//! forwarded to the same subscriber.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise logging at the configured level.
///
/// If a global subscriber is already set the call does nothing; the first
/// subscriber wins.
pub fn init_logging(config: &CliConfig) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(false)
        .finish();

    let _ = subscriber.try_init();
}
