//! Workout commands: generate, start, tui.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::args::{OutputFormat, WorkoutArgs};
use crate::config::{Config, Paths};
use crate::error::FitshiftError;
use crate::output::{format_session, format_summary};
use crate::tui::{self, App, SetupChoice};
use crate::workout::{
    generate_workout, generate_workout_with_rng, Catalog, Difficulty, Focus, WorkoutSession,
    WorkoutSummary,
};

/// Workout choices after applying config defaults to the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutRequest {
    pub focus: Focus,
    pub difficulty: Difficulty,
    pub minutes: u32,
    pub seed: Option<u64>,
}

impl WorkoutRequest {
    /// Flags win over config values.
    #[must_use]
    pub fn resolve(args: &WorkoutArgs, config: &Config) -> Self {
        Self {
            focus: args.focus.unwrap_or(config.workout.focus),
            difficulty: args.difficulty.unwrap_or(config.workout.difficulty),
            minutes: args.minutes.unwrap_or(config.workout.duration_minutes),
            seed: args.seed,
        }
    }

    /// Generate the session, seeded if a seed was given.
    #[must_use]
    pub fn generate(&self, catalog: &Catalog) -> WorkoutSession {
        match self.seed {
            Some(seed) => generate_workout_with_rng(
                catalog,
                self.focus,
                self.difficulty,
                self.minutes,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => generate_workout(catalog, self.focus, self.difficulty, self.minutes),
        }
    }
}

/// Load the catalog named by the flags, else the configured one.
///
/// # Errors
///
/// Returns an error if a catalog file cannot be loaded.
pub fn load_catalog(
    args: &WorkoutArgs,
    config: &Config,
    paths: &Paths,
) -> Result<Catalog, FitshiftError> {
    if let Some(path) = &args.catalog {
        return Catalog::load_from_path(&paths.resolve_catalog(path));
    }
    config.catalog(paths, args.language.unwrap_or(config.general.language))
}

/// Execute generate command
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or output formatting fails.
pub fn generate(
    args: &WorkoutArgs,
    config: &Config,
    paths: &Paths,
    format: OutputFormat,
) -> Result<String, FitshiftError> {
    let catalog = load_catalog(args, config, paths)?;
    let session = WorkoutRequest::resolve(args, config).generate(&catalog);
    format_session(&session, format)
}

/// Execute start command
///
/// Prints the summary only if the workout was completed.
///
/// # Errors
///
/// Returns an error if the workout is empty, the config is invalid, or the
/// terminal fails.
pub fn start(
    args: &WorkoutArgs,
    config: &Config,
    paths: &Paths,
    format: OutputFormat,
) -> Result<String, FitshiftError> {
    let catalog = load_catalog(args, config, paths)?;
    let session = WorkoutRequest::resolve(args, config).generate(&catalog);
    let app = App::workout(session, config.rest.range()?)?;

    finish(tui::run(app)?, format)
}

/// Execute tui command
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the terminal fails.
pub fn tui(config: &Config, paths: &Paths, format: OutputFormat) -> Result<String, FitshiftError> {
    let catalog = config.catalog(paths, config.general.language)?;
    let choice = SetupChoice {
        focus: config.workout.focus,
        difficulty: config.workout.difficulty,
        minutes: config.workout.duration_minutes,
    };
    let app = App::setup(catalog, choice, config.rest.range()?);

    finish(tui::run(app)?, format)
}

fn finish(summary: Option<WorkoutSummary>, format: OutputFormat) -> Result<String, FitshiftError> {
    summary.map_or_else(|| Ok(String::new()), |s| format_summary(&s, format))
}
