//! Configuration management
//!
//! Settings live in `settings.json` inside the userfetch directory:
//! ```json
//! {
//!   "fetch": { "locator": "https://...", "timeoutSecs": 30 },
//!   ...
//! }
//! ```
//!
//! Environment variables take precedence over the file:
//! - `USERFETCH_LOCATOR`
//! - `USERFETCH_TIMEOUT_SECS`

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_USER_LOCATOR;

/// Environment variable overriding the configured locator
pub const LOCATOR_ENV: &str = "USERFETCH_LOCATOR";

/// Environment variable overriding the configured timeout (seconds)
pub const TIMEOUT_SECS_ENV: &str = "USERFETCH_TIMEOUT_SECS";

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    fetch: FetchSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FetchSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    locator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Userfetch configuration (resolved view of settings)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub locator: String,
    /// Request timeout in seconds; `None` leaves the transport default in place
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locator: DEFAULT_USER_LOCATOR.to_string(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Load config from the userfetch directory and process environment
    pub fn load(dir: &Path) -> Result<Self> {
        Self::load_with_env(dir, |key| std::env::var(key).ok())
    }

    /// Load config using `env` to look up overrides
    pub fn load_with_env<F>(dir: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = read_settings(dir)?;

        let locator = env(LOCATOR_ENV)
            .filter(|v| !v.trim().is_empty())
            .or(raw.fetch.locator)
            .unwrap_or_else(|| DEFAULT_USER_LOCATOR.to_string());

        let timeout_secs = match env(TIMEOUT_SECS_ENV).filter(|v| !v.trim().is_empty()) {
            Some(value) => Some(value.trim().parse::<u64>().with_context(|| {
                format!("{} must be a whole number of seconds", TIMEOUT_SECS_ENV)
            })?),
            None => raw.fetch.timeout_secs,
        };

        Ok(Self {
            locator,
            timeout_secs,
        })
    }

    /// Save config to the userfetch directory
    /// Preserves other settings that userfetch doesn't manage
    pub fn save(&self, dir: &Path) -> Result<()> {
        let mut settings = read_settings(dir)?;

        settings.fetch.locator = Some(self.locator.clone());
        settings.fetch.timeout_secs = self.timeout_secs;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(dir.join(SETTINGS_FILE), content)
            .with_context(|| format!("Failed to write settings to {:?}", dir))?;
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn read_settings(dir: &Path) -> Result<SettingsFile> {
    let settings_path = dir.join(SETTINGS_FILE);
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }

    let content = std::fs::read_to_string(&settings_path)
        .with_context(|| format!("Failed to read {:?}", settings_path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid settings file {:?}", settings_path))
}
