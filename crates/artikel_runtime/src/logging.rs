//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never interleave with the quiz on stdout.

use tracing_subscriber::EnvFilter;

use artikel_foundation::{Error, Result};

/// Environment variable holding a log filter, e.g. `ARTIKEL_LOG=artikel_quiz=trace`.
pub const LOG_ENV: &str = "ARTIKEL_LOG";

/// Picks the filter directive used when [`LOG_ENV`] is unset.
#[must_use]
pub fn default_directive(configured: &str, verbose: bool) -> &str {
    if verbose { "debug" } else { configured }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if a subscriber is already installed.
pub fn init(configured: &str, verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(configured, verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::config(format!("failed to initialize logging: {e}")))
}
