pub mod generate;
pub mod info;
pub mod query;

use anyhow::{Context, Result};
use std::path::PathBuf;

use terratile::Config;

/// Load the configuration from --config or TERRATILE_CONFIG.
pub fn load_config(config: Option<PathBuf>) -> Result<Config> {
    let path = config.context(
        "No configuration file given. Use --config or set TERRATILE_CONFIG",
    )?;
    Config::from_file(&path).with_context(|| format!("Failed to load {}", path.display()))
}
