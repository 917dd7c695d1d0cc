//! dsenv CLI library.
//!
//! The binary in `main.rs` is a thin wrapper; everything lives here so the
//! commands can be tested directly.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

use dsenv_config::ConfigStore;
use std::path::PathBuf;
use tracing::debug;

use crate::error::CliResult;

/// Build the store the commands operate on: the process environment first,
/// then each configuration file in the order given.
pub fn load_store(config: &[PathBuf]) -> CliResult<ConfigStore> {
    let mut store = ConfigStore::from_env();
    for path in config {
        store = store.with_file(path)?;
    }
    debug!(sources = ?store.source_names(), "Configuration store ready");
    Ok(store)
}
