//! Configuration settings for fitshift.
//!
//! Settings are loaded from `~/.fitshift/config.yaml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::FitshiftError;
use crate::workout::{Catalog, Difficulty, Focus, Language, RestRange};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Default workout choices.
    pub workout: WorkoutConfig,
    /// Rest between exercises.
    pub rest: RestConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// Language of the built-in exercise catalog.
    #[serde(default)]
    pub language: Language,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to `colored` output.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Default workout choices, used when flags are omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkoutConfig {
    pub focus: Focus,
    pub difficulty: Difficulty,
    /// Workout length in minutes (5, 10, 15 or 20).
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: u32,
    /// Custom catalog file used instead of the built-in one.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

/// Rest interval bounds in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RestConfig {
    #[serde(default = "default_rest_min")]
    pub min_seconds: u32,
    #[serde(default = "default_rest_max")]
    pub max_seconds: u32,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_duration_minutes() -> u32 {
    10
}

const fn default_rest_min() -> u32 {
    20
}

const fn default_rest_max() -> u32 {
    30
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
            language: Language::default(),
        }
    }
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            focus: Focus::default(),
            difficulty: Difficulty::default(),
            duration_minutes: default_duration_minutes(),
            catalog: None,
        }
    }
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            min_seconds: default_rest_min(),
            max_seconds: default_rest_max(),
        }
    }
}

impl RestConfig {
    /// Validated rest range.
    ///
    /// # Errors
    ///
    /// Returns an error if the minimum exceeds the maximum.
    pub fn range(&self) -> Result<RestRange, FitshiftError> {
        RestRange::new(self.min_seconds, self.max_seconds)
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, FitshiftError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, FitshiftError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            FitshiftError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            FitshiftError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;
        config.rest.range()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), FitshiftError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| FitshiftError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            FitshiftError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// The active catalog: the configured file, or the built-in one for
    /// `language`.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured catalog file cannot be loaded.
    pub fn catalog(&self, paths: &Paths, language: Language) -> Result<Catalog, FitshiftError> {
        match &self.workout.catalog {
            Some(path) => Catalog::load_from_path(&paths.resolve_catalog(path)),
            None => Catalog::builtin(language),
        }
    }
}
