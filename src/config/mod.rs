//! Configuration management for fitshift.
//!
//! This module handles loading and saving configuration from `~/.fitshift/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, RestConfig, WorkoutConfig};
