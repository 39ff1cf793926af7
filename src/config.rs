//! Persistent settings in `~/.countries-tui/config.json`

use crate::projection::FlagGalleryOptions;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default REST Countries endpoint with every field the dashboard reads
pub const DEFAULT_API_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=name,flags,region,subregion,population,capital,area,languages,currencies,timezones,cca3";

/// Overrides the config directory
pub const HOME_ENV_VAR: &str = "COUNTRIES_TUI_HOME";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_endpoint: String,
    /// Read records from this JSON file instead of the API
    pub data_file: Option<String>,
    pub request_timeout_secs: u64,
    pub tick_rate_ms: u64,
    /// Region the flag gallery opens with (empty = all)
    pub flag_gallery_default_region: String,
    /// Show a prompt instead of flags until a region is picked
    pub flag_gallery_requires_region_selection: bool,
    /// Used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            data_file: None,
            request_timeout_secs: 30,
            tick_rate_ms: 100,
            flag_gallery_default_region: String::new(),
            flag_gallery_requires_region_selection: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        if let Ok(dir) = env::var(HOME_ENV_VAR) {
            if !dir.is_empty() {
                return Some(PathBuf::from(dir));
            }
        }
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".countries-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn log_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("countries-tui.log"))
    }

    /// Load the saved config, or `None` if there is none or it does not parse
    pub fn load() -> Option<Config> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }

        let contents = fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Load the saved config, writing the defaults on first run
    pub fn load_or_init() -> Config {
        if let Some(config) = Self::load() {
            return config;
        }
        let config = Config::default();
        if let Err(e) = config.save() {
            tracing::warn!(error = %e, "could not write default config");
        }
        config
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_dir.join("config.json"))
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    pub fn gallery_options(&self) -> FlagGalleryOptions {
        FlagGalleryOptions {
            default_region: self.flag_gallery_default_region.clone(),
            requires_region_selection: self.flag_gallery_requires_region_selection,
        }
    }
}
