//! Configuration management
//!
//! Settings live in `settings.json` inside the data directory:
//! ```json
//! {
//!   "rosterFile": "roster.json",
//!   "logLevel": "info",
//!   "seedSampleData": true
//! }
//! ```
//! Keys the CLI does not manage are preserved on save.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "settings.json";
pub const DEFAULT_ROSTER_FILE: &str = "roster.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log level
pub const LOG_LEVEL_ENV: &str = "ROLLCALL_LOG";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    roster_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    log_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed_sample_data: Option<bool>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Rollcall configuration (resolved view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    /// Roster file, relative paths resolve against the data directory
    pub roster_file: PathBuf,
    pub log_level: String,
    /// Start from the sample roster when no roster file exists
    pub seed_sample_data: bool,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_file: PathBuf::from(DEFAULT_ROSTER_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            seed_sample_data: true,
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// A missing file gives defaults. An unreadable file is an error; a file
    /// that is not valid JSON is ignored with a warning.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join(SETTINGS_FILE);

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)
                .with_context(|| format!("Failed to read {}", settings_path.display()))?;
            serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("event=settings_ignored module=config error={}", e);
                SettingsFile::default()
            })
        } else {
            SettingsFile::default()
        };

        let defaults = Self::default();
        let log_level = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| raw.log_level.clone())
            .unwrap_or(defaults.log_level);

        Ok(Self {
            roster_file: raw
                .roster_file
                .as_deref()
                .map(PathBuf::from)
                .unwrap_or(defaults.roster_file),
            log_level,
            seed_sample_data: raw.seed_sample_data.unwrap_or(defaults.seed_sample_data),
            _raw_settings: raw,
        })
    }

    /// Save config to the data directory
    /// Preserves other settings that the CLI doesn't manage
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join(SETTINGS_FILE);

        let mut settings = self._raw_settings.clone();
        settings.roster_file = Some(self.roster_file.to_string_lossy().into_owned());
        settings.log_level = Some(self.log_level.clone());
        settings.seed_sample_data = Some(self.seed_sample_data);

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::create_dir_all(data_dir)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Absolute location of the roster file
    pub fn roster_path(&self, data_dir: &Path) -> PathBuf {
        if self.roster_file.is_absolute() {
            self.roster_file.clone()
        } else {
            data_dir.join(&self.roster_file)
        }
    }
}
