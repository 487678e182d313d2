//! Output formatting for fitshift.
//!
//! This module provides formatters for displaying workouts, exercises and
//! summaries in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::FitshiftError;
use crate::workout::{Exercise, WorkoutSession, WorkoutSummary};

pub use json::*;
pub use pretty::*;

/// Format a generated workout based on output format
///
/// # Errors
///
/// Returns `FitshiftError::Json` if JSON serialization fails.
pub fn format_session(
    session: &WorkoutSession,
    format: OutputFormat,
) -> Result<String, FitshiftError> {
    match format {
        OutputFormat::Pretty => Ok(format_session_pretty(session)),
        OutputFormat::Json => format_session_json(session),
    }
}

/// Format a list of catalog exercises based on output format
///
/// # Errors
///
/// Returns `FitshiftError::Json` if JSON serialization fails.
pub fn format_exercises(
    exercises: &[&Exercise],
    title: &str,
    format: OutputFormat,
) -> Result<String, FitshiftError> {
    match format {
        OutputFormat::Pretty => Ok(format_exercises_pretty(exercises, title)),
        OutputFormat::Json => format_exercises_json(exercises, title),
    }
}

/// Format a single exercise based on output format
///
/// # Errors
///
/// Returns `FitshiftError::Json` if JSON serialization fails.
pub fn format_exercise(exercise: &Exercise, format: OutputFormat) -> Result<String, FitshiftError> {
    match format {
        OutputFormat::Pretty => Ok(format_exercise_pretty(exercise)),
        OutputFormat::Json => to_json(exercise),
    }
}

/// Format a workout summary based on output format
///
/// # Errors
///
/// Returns `FitshiftError::Json` if JSON serialization fails.
pub fn format_summary(
    summary: &WorkoutSummary,
    format: OutputFormat,
) -> Result<String, FitshiftError> {
    match format {
        OutputFormat::Pretty => Ok(format_summary_pretty(summary)),
        OutputFormat::Json => to_json(summary),
    }
}
