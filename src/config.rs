//! Configuration file handling.
//!
//! podview reads an optional TOML config from the platform config directory
//! (`~/.config/podview/config.toml` on Linux). A missing file means defaults;
//! CLI flags override config values.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::{TypingTuning, BASE_DELAY_MS, MIN_DELAY_MS};
use crate::transcript::SpeakerId;

/// A speaker id and its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerLabel {
    pub id: SpeakerId,
    pub label: String,
}

/// Typewriter cadence overrides. Presentation tuning only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub base_delay_ms: f64,
    pub min_delay_ms: f64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: BASE_DELAY_MS,
            min_delay_ms: MIN_DELAY_MS,
        }
    }
}

/// Player loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Poll interval of the player loop, in milliseconds
    pub tick_ms: u64,
    /// Initial playback speed multiplier
    pub default_speed: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            tick_ms: 33,
            default_speed: 1.0,
        }
    }
}

/// Complete podview configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub speakers: Vec<SpeakerLabel>,
    pub typing: TypingConfig,
    pub player: PlayerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speakers: vec![
                SpeakerLabel {
                    id: 1,
                    label: "Human".to_string(),
                },
                SpeakerLabel {
                    id: 2,
                    label: "AI".to_string(),
                },
            ],
            typing: TypingConfig::default(),
            player: PlayerConfig::default(),
        }
    }
}

impl Config {
    /// Path of the config file inside the platform config directory.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("podview").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is missing.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Parse a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config TOML")
    }

    /// Serialize to pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Write the config file, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir: {}", parent.display()))?;
        }
        fs::write(&path, self.to_toml()?)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Typing tuning derived from the config.
    pub fn typing_tuning(&self) -> TypingTuning {
        TypingTuning {
            base_delay_ms: self.typing.base_delay_ms,
            min_delay_ms: self.typing.min_delay_ms,
        }
    }
}
