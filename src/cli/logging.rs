//! Diagnostic logging for the CLI.
//!
//! User-facing results go through [`crate::cli::output`]; this module only
//! configures `tracing` events, which are written to stderr.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::core::errors::{PoorboxError, Result};

/// Map the `-v` count and `-q` flag to a maximum level.
///
/// quiet → ERROR, default → WARN, `-v` → INFO, `-vv` → DEBUG, more → TRACE.
pub fn level_for(verbose: u8, quiet: bool) -> Level {
    match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::WARN,
        (false, 1) => Level::INFO,
        (false, 2) => Level::DEBUG,
        (false, _) => Level::TRACE,
    }
}

/// Install the global subscriber. `RUST_LOG` replaces the flag-derived level when set.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet).as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| PoorboxError::InvalidConfig {
            detail: format!("Failed to initialize logging: {e}"),
        })
}
