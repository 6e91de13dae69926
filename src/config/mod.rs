// SPDX-License-Identifier: MPL-2.0
//! This module handles the library's host-facing configuration, including loading
//! and saving display preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use ansiversa_ui::config::{self, Config};
//! use ansiversa_ui::ui::theming::ThemeMode;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.theme_mode = ThemeMode::Dark;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::ui::feedback::DEFAULT_TOAST_DISMISS_DELAY;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Ansiversa";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Override for the toast auto-dismiss delay, in milliseconds.
    #[serde(default)]
    pub toast_duration_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::System,
            toast_duration_ms: None,
        }
    }
}

impl Config {
    /// Returns the configured toast dismiss delay, falling back to the default.
    #[must_use]
    pub fn toast_dismiss_delay(&self) -> Duration {
        self.toast_duration_ms
            .map_or(DEFAULT_TOAST_DISMISS_DELAY, Duration::from_millis)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
