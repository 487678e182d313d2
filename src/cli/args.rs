use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::workout::{Difficulty, Focus, Language, DURATION_OPTIONS};

#[derive(Parser)]
#[command(name = "fitshift")]
#[command(about = "Short bodyweight workouts for your work breaks")]
#[command(long_about = "fitshift - Active break workouts in the terminal

Generates short bodyweight workouts for a chosen body focus, difficulty
and length, then runs them with countdowns, exercise timers and rests.

QUICK START:
  fitshift generate                     Preview a workout with your defaults
  fitshift start -f upper -m 5          Run a 5-minute upper body workout
  fitshift tui                          Pick focus, level and length interactively
  fitshift catalog list -f lower        Browse lower body exercises

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  fitshift <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Log filter, e.g. "debug" or "fitshift=trace"
    ///
    /// Takes precedence over RUST_LOG. Logs are written to stderr.
    #[arg(long, global = true, env = "FITSHIFT_LOG")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a workout and print it
    ///
    /// Picks exercises matching the focus and difficulty, alternating
    /// active movements with holds. Nothing is run.
    ///
    /// # Examples
    ///
    ///   fitshift generate                       Use configured defaults
    ///   fitshift generate -f lower -d advanced  Hard leg workout
    ///   fitshift generate -m 20 --seed 42       Reproducible 20-minute workout
    ///   fitshift generate -o json               Output as JSON
    #[command(alias = "g")]
    Generate(WorkoutArgs),

    /// Generate a workout and run it in the terminal
    ///
    /// Runs each exercise with a 3-second countdown, then either a timer
    /// (holds) or a rep target you confirm with Enter, followed by a
    /// short rest. The summary is printed when the workout completes.
    ///
    /// # Keys
    ///
    ///   space   Pause or resume a timed exercise
    ///   enter   Finish a rep exercise
    ///   s       Skip the current exercise (asks y/n)
    ///   n       Skip the rest
    ///   q       Leave the workout
    #[command(alias = "s")]
    Start(WorkoutArgs),

    /// Open the interactive setup screen
    ///
    /// Choose focus, difficulty and length with the arrow keys, then
    /// press Enter to start.
    Tui,

    /// Browse the exercise catalog
    Catalog(CatalogArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Example: fitshift completions bash > ~/.bash_completion.d/fitshift
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}

/// Workout choices shared by `generate` and `start`.
///
/// Omitted options fall back to the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct WorkoutArgs {
    /// Body region to train
    #[arg(short, long, value_enum)]
    pub focus: Option<Focus>,

    /// Difficulty level; easier exercises are included too
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Workout length in minutes (5, 10, 15 or 20)
    #[arg(short, long, value_parser = parse_minutes)]
    pub minutes: Option<u32>,

    /// Seed for a reproducible selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Language of the built-in catalog
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Use this catalog file instead of the configured one
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Arguments for the exercise catalog.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

/// Catalog subcommands.
#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List exercises
    ///
    /// With --focus and/or --difficulty only the exercises a workout
    /// with those settings could pick are shown.
    ///
    /// Example: fitshift catalog list --focus upper --difficulty beginner
    List {
        /// Only exercises eligible for this focus
        #[arg(short, long, value_enum)]
        focus: Option<Focus>,

        /// Only exercises at or below this difficulty
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,
    },

    /// Show one exercise with instructions and tips
    ///
    /// Example: fitshift catalog show wall-sit
    Show {
        /// Exercise id
        id: String,
    },
}

/// Arguments for configuration management.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing config file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the config file location
    Path,
}

/// Parse a workout length, accepting only the offered durations.
///
/// # Errors
///
/// Returns a message listing the valid choices.
pub fn parse_minutes(s: &str) -> Result<u32, String> {
    let choices = DURATION_OPTIONS
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    match s.trim().parse::<u32>() {
        Ok(minutes) if DURATION_OPTIONS.contains(&minutes) => Ok(minutes),
        _ => Err(format!("expected one of {choices}")),
    }
}
