//! The optional `brand-assets.toml` file.
//!
//! Every field falls back to the built-in defaults, so a missing or partial file is
//! fine and running without one reproduces the stock assets.

use crate::syllabus::SyllabusConfig;
use crate::wordmark::WordmarkConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "brand-assets.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub wordmark: WordmarkConfig,
    #[serde(default)]
    pub syllabus: SyllabusConfig,
}

impl Configuration {
    /// Load the configuration at `path`, or the defaults if there is no such file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Configuration> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no {} found, using defaults", path.display());
            return Ok(Configuration::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to load {} contents", path.display()))?;
        toml::from_str(&contents).with_context(|| "Failed to parse TOML")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).with_context(|| "Failed to convert configuration to TOML")
    }

    /// Write the default configuration to `path`, refusing to replace an existing
    /// file unless `force` is set.
    pub fn write_default<P: AsRef<Path>>(path: P, force: bool) -> Result<()> {
        let path = path.as_ref();
        if path.exists() && !force {
            return Err(anyhow!(
                "{} already exists, pass --force to overwrite it",
                path.display()
            ));
        }
        let config = Configuration::default().to_toml()?;
        std::fs::write(path, config).with_context(|| "Failed to write configuration file")
    }
}
