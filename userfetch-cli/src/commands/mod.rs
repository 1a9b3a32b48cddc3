//! CLI command implementations

pub mod config;
pub mod fetch;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};
use userfetch_core::config::Config;

/// Initialise stderr logging
///
/// `RUST_LOG` wins when set; otherwise `--verbose` turns on debug output
/// for the core crate.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "userfetch_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. from tests) is harmless
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Get the userfetch directory from environment or default
pub fn get_userfetch_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("USERFETCH_DIR") {
        return Ok(PathBuf::from(dir));
    }

    dirs::home_dir()
        .map(|home| home.join(".userfetch"))
        .context("Could not find home directory; set USERFETCH_DIR")
}

/// Load the resolved configuration
pub fn load_config() -> Result<(PathBuf, Config)> {
    let dir = get_userfetch_dir()?;
    let config = Config::load(&dir)
        .with_context(|| format!("Failed to load configuration from {:?}", dir))?;
    Ok((dir, config))
}
