//! Log file setup.
//!
//! A TUI owns stdout, so tracing output goes to a file next to the config
//! (`~/.config/pagelab/pagelab.log`). Disabled by default; `RUST_LOG`
//! overrides the configured filter when set.

use crate::config::model::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. No-op when logging is disabled.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = crate::config::log_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(())
}
