//! Tracing subscriber setup.
//!
//! The terminal belongs to the user interface while the game runs, so log records go to a file
//! instead of standard output.

use std::{fs::File, sync::Mutex};

use color_eyre::eyre::{eyre, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global tracing subscriber described by `config`.
///
/// Nothing is installed when no log file was requested.
///
/// # Errors
///
/// Returns an error if the log file cannot be created, the filter does not parse, or a global
/// subscriber is already installed.
pub fn init(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter = EnvFilter::try_new(&config.log)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install tracing subscriber: {err}"))
}
