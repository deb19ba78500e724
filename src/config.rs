//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving user settings
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::models::ConditionKind;

/// Theme display mode preference for the terminal chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Temperature display unit. All stored data is °C; conversion happens at
/// display time only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    #[default]
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl TemperatureUnit {
    /// Display suffix, e.g. "°C".
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    /// The other unit.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }
}

/// Clock display format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TimeFormat {
    /// 12-hour clock with am/pm.
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// 24-hour clock.
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl TimeFormat {
    /// The other format.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::TwelveHour => Self::TwentyFourHour,
            Self::TwentyFourHour => Self::TwelveHour,
        }
    }
}

/// Unit preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UnitsConfig {
    /// Temperature display unit.
    #[serde(default)]
    pub temperature: TemperatureUnit,
    /// Clock display format.
    #[serde(default)]
    pub time_format: TimeFormat,
}

/// Weather theme preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Chrome mode (Auto, Dark, Light).
    #[serde(default)]
    pub mode: ThemeMode,
    /// Whether condition-driven palettes are applied at all.
    #[serde(default = "default_true")]
    pub weather_themes: bool,
    /// Derive the palette from the current location's condition.
    #[serde(default = "default_true")]
    pub auto_theme: bool,
    /// Palette pinned when `auto_theme` is off.
    #[serde(default = "default_manual_theme")]
    pub manual_theme: ConditionKind,
}

const fn default_true() -> bool {
    true
}

const fn default_manual_theme() -> ConditionKind {
    ConditionKind::PartlyCloudy
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::default(),
            weather_themes: true,
            auto_theme: true,
            manual_theme: default_manual_theme(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/SkyBulletin/config.toml`
/// - macOS: `~/Library/Application Support/SkyBulletin/config.toml`
/// - Windows: `%APPDATA%\SkyBulletin\config.toml`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Unit preferences
    #[serde(default)]
    pub units: UnitsConfig,
    /// Theme preferences
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Resolves the application directory, honoring an explicit override
/// (the `--config-dir` flag).
pub fn app_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    let base = dirs::config_dir().context("Failed to determine config directory")?;
    Ok(base.join(APP_DIR_NAME))
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Full path of the settings file inside `dir`.
    #[must_use]
    pub fn file_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }

    /// Loads settings from `dir`.
    ///
    /// A missing file yields defaults; an unreadable or unparsable file is
    /// an error, which callers typically downgrade to defaults with a
    /// warning.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = Self::file_path(dir);
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Saves settings to `dir` using atomic write (temp file + rename).
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let path = Self::file_path(dir);
        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp config file: {}", temp_path.display()))?;
        fs::rename(&temp_path, &path).with_context(|| {
            format!("Failed to rename temp config file to: {}", path.display())
        })?;

        Ok(())
    }

    /// Flips between Celsius and Fahrenheit.
    pub fn toggle_temperature_unit(&mut self) {
        self.units.temperature = self.units.temperature.toggled();
    }

    /// Flips between 12-hour and 24-hour clock display.
    pub fn toggle_time_format(&mut self) {
        self.units.time_format = self.units.time_format.toggled();
    }

    /// Cycles the chrome theme mode Auto -> Dark -> Light -> Auto.
    pub fn cycle_theme_mode(&mut self) {
        self.theme.mode = match self.theme.mode {
            ThemeMode::Auto => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Auto,
        };
    }

    /// Turns condition-driven palettes on or off.
    pub fn toggle_weather_themes(&mut self) {
        self.theme.weather_themes = !self.theme.weather_themes;
    }

    /// Turns automatic palette selection on or off.
    pub fn toggle_auto_theme(&mut self) {
        self.theme.auto_theme = !self.theme.auto_theme;
    }

    /// Pins a palette. Picking one by hand switches auto selection off.
    pub fn set_manual_theme(&mut self, kind: ConditionKind) {
        self.theme.manual_theme = kind;
        self.theme.auto_theme = false;
    }
}
