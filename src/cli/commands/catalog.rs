//! Catalog browsing commands.

use crate::cli::args::{CatalogCommands, OutputFormat};
use crate::error::FitshiftError;
use crate::output::{format_exercise, format_exercises};
use crate::workout::{Catalog, Difficulty, Exercise, Focus};

/// Execute catalog subcommands
///
/// # Errors
///
/// Returns an error if the exercise does not exist or output formatting fails.
pub fn catalog(
    catalog: &Catalog,
    cmd: CatalogCommands,
    format: OutputFormat,
) -> Result<String, FitshiftError> {
    match cmd {
        CatalogCommands::List { focus, difficulty } => {
            let (exercises, title) = list(catalog, focus, difficulty);
            format_exercises(&exercises, &title, format)
        }
        CatalogCommands::Show { id } => {
            let exercise = catalog
                .get(&id)
                .ok_or_else(|| FitshiftError::NotFound(format!("Exercise with ID: {id}")))?;
            format_exercise(exercise, format)
        }
    }
}

/// Everything, or only what a workout with these settings could pick.
fn list(
    catalog: &Catalog,
    focus: Option<Focus>,
    difficulty: Option<Difficulty>,
) -> (Vec<&Exercise>, String) {
    if focus.is_none() && difficulty.is_none() {
        return (catalog.exercises().iter().collect(), "Exercises".to_string());
    }

    let focus = focus.unwrap_or_default();
    let difficulty = difficulty.unwrap_or(Difficulty::Advanced);
    (
        catalog.filter(focus, difficulty),
        format!("{} - {}", focus.display_name(), difficulty.display_name()),
    )
}
