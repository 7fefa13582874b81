use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::controller::ControllerSettings;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "glassdeck";

pub const VALID_KEYS: &[&str] = &[
    "defaults.theme",
    "defaults.transition_ms",
    "defaults.swipe_threshold",
    "defaults.cursor_trail_ms",
];

const TRANSITION_MS_RANGE: RangeInclusive<u64> = 100..=5000;
const CURSOR_TRAIL_MS_RANGE: RangeInclusive<u64> = 0..=5000;

fn valid_swipe_threshold(px: f32) -> bool {
    px.is_finite() && px > 0.0
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Length of a slide change in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_ms: Option<u64>,

    /// Vertical finger travel in points before a touch counts as a swipe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_threshold: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_trail_ms: Option<u64>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `glassdeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: Config =
            serde_yaml::from_str(contents).context("Config file is not valid YAML")?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            debug!("using default config: {e:#}");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# glassdeck configuration\n{yaml}");
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let defaults = self.defaults.get_or_insert_with(DefaultsConfig::default);
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                defaults.theme = Some(value.to_string());
            }
            "defaults.transition_ms" => {
                let ms: u64 = value
                    .parse()
                    .ok()
                    .filter(|ms| TRANSITION_MS_RANGE.contains(ms))
                    .ok_or_else(|| {
                        anyhow::anyhow!(
                            "Invalid transition_ms: {value}. Must be a number from 100 to 5000."
                        )
                    })?;
                defaults.transition_ms = Some(ms);
            }
            "defaults.swipe_threshold" => {
                let px: f32 = value
                    .parse()
                    .ok()
                    .filter(|px: &f32| valid_swipe_threshold(*px))
                    .ok_or_else(|| {
                        anyhow::anyhow!(
                            "Invalid swipe_threshold: {value}. Must be a positive number."
                        )
                    })?;
                defaults.swipe_threshold = Some(px);
            }
            "defaults.cursor_trail_ms" => {
                let ms: u64 = value
                    .parse()
                    .ok()
                    .filter(|ms| CURSOR_TRAIL_MS_RANGE.contains(ms))
                    .ok_or_else(|| {
                        anyhow::anyhow!(
                            "Invalid cursor_trail_ms: {value}. Must be a number from 0 to 5000."
                        )
                    })?;
                defaults.cursor_trail_ms = Some(ms);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: {}",
                VALID_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    pub fn theme(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.theme.as_deref())
    }

    /// Controller timings, with built-in defaults for anything unset.
    ///
    /// Values outside the ranges `set` accepts are logged and replaced by the
    /// default.
    pub fn controller_settings(&self) -> ControllerSettings {
        let mut settings = ControllerSettings::default();
        let Some(defaults) = &self.defaults else {
            return settings;
        };
        if let Some(ms) = defaults.transition_ms {
            if TRANSITION_MS_RANGE.contains(&ms) {
                settings.transition = Duration::from_millis(ms);
            } else {
                warn!(
                    transition_ms = ms,
                    "transition_ms out of range 100..=5000, using default"
                );
            }
        }
        if let Some(px) = defaults.swipe_threshold {
            if valid_swipe_threshold(px) {
                settings.swipe_threshold = px;
            } else {
                warn!(
                    swipe_threshold = px,
                    "swipe_threshold must be positive, using default"
                );
            }
        }
        if let Some(ms) = defaults.cursor_trail_ms {
            if CURSOR_TRAIL_MS_RANGE.contains(&ms) {
                settings.cursor_trail = Duration::from_millis(ms);
            } else {
                warn!(
                    cursor_trail_ms = ms,
                    "cursor_trail_ms out of range 0..=5000, using default"
                );
            }
        }
        settings
    }
}
