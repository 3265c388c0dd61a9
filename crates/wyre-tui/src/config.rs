//! Demo configuration.
//!
//! Loads screen tunables from `${WYRE_HOME}/config.toml` with sensible
//! defaults. A missing file is not an error; a malformed one is.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Screen tunables for the demo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Event loop tick interval in milliseconds.
    pub tick_rate_ms: u64,
    /// How long a toast stays visible, in milliseconds.
    pub toast_duration_ms: u64,
    /// Slider step per Left/Right key press.
    pub slider_step: u16,
    /// Idle interval after which a slider drag gesture is considered
    /// released, in milliseconds.
    pub drag_release_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            toast_duration_ms: 2000,
            slider_step: 5,
            drag_release_ms: 400,
        }
    }
}

impl DemoConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path (missing file = defaults).
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(DemoConfig::default())
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn drag_release(&self) -> Duration {
        Duration::from_millis(self.drag_release_ms)
    }
}

pub mod paths {
    use std::path::PathBuf;

    /// Returns the wyre home directory (`$WYRE_HOME` or `~/.wyre`).
    pub fn wyre_home() -> PathBuf {
        if let Ok(home) = std::env::var("WYRE_HOME") {
            return PathBuf::from(home);
        }
        home_dir().map_or_else(|| PathBuf::from(".wyre"), |home| home.join(".wyre"))
    }

    /// Returns the user's home directory.
    pub fn home_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(PathBuf::from)
    }

    /// Path to the config file.
    pub fn config_path() -> PathBuf {
        wyre_home().join("config.toml")
    }
}
