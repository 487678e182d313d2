//! Command implementations for fitshift.
//!
//! Each command returns the text to print; an empty string prints nothing.

mod catalog;
mod config;
mod workout;

pub use catalog::catalog;
pub use config::config;
pub use workout::{generate, load_catalog, start, tui, WorkoutRequest};

use crate::cli::args::OutputFormat;
use crate::cli::completions::{completion_install_instructions, generate_completions};
use crate::error::FitshiftError;

/// Execute completions command
///
/// # Errors
///
/// Returns an error if the completion script cannot be generated.
pub fn completions(
    shell: clap_complete::Shell,
    install: bool,
    _format: OutputFormat,
) -> Result<String, FitshiftError> {
    if install {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}
