//! File-backed tracing setup.
//!
//! The TUI owns the terminal, so diagnostics go to a log file under the data
//! directory instead of stdout. Filtering follows the usual `RUST_LOG`
//! conventions via `ARTSEARCH_LOG`, defaulting to `info`.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_FILE: &str = "artsearch.log";
const FILTER_ENV: &str = "ARTSEARCH_LOG";

/// Install the global tracing subscriber writing to the data directory.
pub fn init() -> Result<()> {
    let dir = app_dirs::get_data_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data directory {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?;

    Ok(())
}
