//! Workout generation and execution.
//!
//! - Exercise catalogs (built-in and user supplied)
//! - Generating a session for a focus, difficulty and length
//! - Sequencing the session with countdowns, timers and rests
//! - Summarizing the result

pub mod catalog;
pub mod clock;
pub mod exercise;
pub mod generator;
pub mod sequencer;
pub mod session;
pub mod summary;
pub mod timer;

pub use catalog::{Catalog, Language};
pub use clock::{Clock, ManualClock, SystemClock};
pub use exercise::{Category, Difficulty, Execution, Exercise, ExerciseType, Focus};
pub use generator::{
    generate_workout, generate_workout_with_rng, workout_name, DurationBucket, DURATION_OPTIONS,
};
pub use sequencer::{Phase, RestRange, Sequencer, SequencerEvent};
pub use session::{WorkoutProgress, WorkoutSession};
pub use summary::{SummaryRow, WorkoutSummary};
pub use timer::{format_length, render_progress_bar, Timer};
