//! Tracing subscriber setup.
//!
//! Game narration goes to stdout, so logs are written to stderr and default to
//! `warn`. Set `RUST_LOG=pellet_core=debug` to see every scored candidate.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

/// Installs the global subscriber. Fails if one is already installed.
pub fn setup_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_directive))
        .map_err(|e| anyhow!("invalid log filter {:?}: {e}", config.default_directive))?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    tracing::debug!(ansi = config.ansi, "logging initialized");
    Ok(())
}
