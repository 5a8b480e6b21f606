//! Application directories and user settings.
//!
//! Settings live in `config.json` inside the platform config directory. The
//! file is optional and every field has a default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_JSON: &str = "config.json";
const DB_FILE: &str = "expenzor.db";
const LOG_FILE: &str = "expenzor.log";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    /// Prefix used when formatting amounts, e.g. "Rs." or "$".
    pub(crate) currency_symbol: String,
    /// tracing filter used when `RUST_LOG` is not set.
    pub(crate) log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "Rs.".into(),
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    data_dir: PathBuf,
    config_path: PathBuf,
    pub(crate) settings: Settings,
}

impl Config {
    /// Resolves the platform directories for the current user.
    pub(crate) fn load() -> Result<Self> {
        let proj_dirs = directories::ProjectDirs::from("com", "expenzor", "Expenzor")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Self::from_dirs(proj_dirs.data_dir(), proj_dirs.config_dir())
    }

    pub(crate) fn from_dirs(data_dir: &Path, config_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
        let config_path = config_dir.join(CONFIG_JSON);
        let settings = read_settings(&config_path)?;
        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            config_path,
            settings,
        })
    }

    pub(crate) fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }

    pub(crate) fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }

    pub(crate) fn config_path(&self) -> &Path {
        &self.config_path
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Unable to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("Invalid settings in {}", path.display()))
}
