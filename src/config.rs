//! Application configuration types.

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::duration::Duration;

/// Application configuration loaded from config file.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// How results are printed.
    pub output: OutputConfig,
    /// Duration fields used when they are not given on the command line.
    pub defaults: Duration,
}

/// Load configuration from disk.
///
/// A missing file is not an error: the default configuration is used instead.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read or parsed.
pub fn load(path: &Path) -> anyhow::Result<Config> {
    log::debug!(
        "Checking if configuration file exists at {}...",
        path.display()
    );
    if !path.exists() {
        log::warn!(
            "Could not find configuration at {}, so using the default configuration...",
            path.display()
        );
        return Ok(Config::default());
    }

    log::debug!("Loading configuration from {}...", path.display());
    let config = parse(&fs::read_to_string(path).context("could not read configuration file")?)?;
    log::trace!("Loaded configuration: {config:#?}");
    Ok(config)
}

/// Parse configuration from TOML text.
///
/// # Errors
///
/// Returns an error if the text is not a valid configuration.
pub fn parse(text: &str) -> anyhow::Result<Config> {
    toml::from_str(text).context("could not deserialize configuration file")
}

/// Output formatting configuration.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// strftime pattern used to print dates.
    pub format: String,
    /// Whether to print the millisecond timestamp next to the date.
    pub timestamp: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "%Y-%m-%dT%H:%M:%S%.3f".to_string(),
            timestamp: false,
        }
    }
}
