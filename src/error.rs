//! Error types for fitshift.

use thiserror::Error;

/// Errors produced by fitshift.
#[derive(Debug, Error)]
pub enum FitshiftError {
    /// Configuration could not be read, parsed, or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An exercise catalog is malformed.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A workout with no exercises was handed to the sequencer.
    #[error("Workout has no exercises; choose a different focus or difficulty")]
    EmptyWorkout,

    /// The terminal could not be set up or drawn to.
    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
