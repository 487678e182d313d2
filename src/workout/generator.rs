//! Workout generation.
//!
//! Picks a subset of a catalog matching a focus and difficulty, alternates
//! active and isometric exercises, and scales each pick to the requested
//! workout length.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::workout::catalog::Catalog;
use crate::workout::exercise::{Difficulty, Execution, Exercise, ExerciseType, Focus};
use crate::workout::session::WorkoutSession;

/// Workout lengths offered to the user, in minutes.
pub const DURATION_OPTIONS: [u32; 4] = [5, 10, 15, 20];

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

/// Length class of a workout, which decides exercise count and intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationBucket {
    /// 5 minutes.
    Quick,
    /// 10 minutes, and the fallback for unlisted lengths.
    Standard,
    /// 15 minutes.
    Thorough,
    /// 20 minutes.
    Complete,
}

impl DurationBucket {
    /// Classify a length in minutes.
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        match minutes {
            5 => Self::Quick,
            15 => Self::Thorough,
            20 => Self::Complete,
            _ => Self::Standard,
        }
    }

    /// Number of exercises to aim for.
    #[must_use]
    pub const fn target_count(&self) -> usize {
        match self {
            Self::Quick => 3,
            Self::Standard => 4,
            Self::Thorough => 5,
            Self::Complete => 6,
        }
    }

    /// Scale an exercise's duration or reps/sets for this bucket.
    #[must_use]
    pub fn adjust(&self, execution: Execution) -> Execution {
        match (self, execution) {
            (Self::Quick, Execution::Timer { duration }) => Execution::Timer {
                duration: duration.saturating_sub(10).max(20),
            },
            (Self::Quick, Execution::Reps { reps, .. }) => Execution::Reps {
                reps: reps.saturating_sub(3).max(5),
                sets: 1,
            },
            (Self::Standard, execution) => execution,
            (Self::Thorough, Execution::Timer { duration }) => Execution::Timer {
                duration: duration.saturating_add(10),
            },
            (Self::Thorough, Execution::Reps { reps, sets }) => Execution::Reps {
                reps: reps.saturating_add(2),
                sets,
            },
            (Self::Complete, Execution::Timer { duration }) => Execution::Timer {
                duration: duration.saturating_add(15),
            },
            (Self::Complete, Execution::Reps { reps, sets }) => Execution::Reps {
                reps: reps.saturating_add(3),
                sets: sets.max(2),
            },
        }
    }
}

/// Generate a workout using the thread-local random source.
#[must_use]
pub fn generate_workout(
    catalog: &Catalog,
    focus: Focus,
    difficulty: Difficulty,
    duration_minutes: u32,
) -> WorkoutSession {
    generate_workout_with_rng(
        catalog,
        focus,
        difficulty,
        duration_minutes,
        &mut rand::thread_rng(),
    )
}

/// Generate a workout with an explicit random source.
///
/// The same seeded generator always yields the same session. An empty
/// eligible set produces a session without exercises.
pub fn generate_workout_with_rng<R: Rng + ?Sized>(
    catalog: &Catalog,
    focus: Focus,
    difficulty: Difficulty,
    duration_minutes: u32,
    rng: &mut R,
) -> WorkoutSession {
    let bucket = DurationBucket::from_minutes(duration_minutes);
    let eligible = catalog.filter(focus, difficulty);
    let exercises = select_exercises(eligible, bucket, rng);

    tracing::debug!(
        %focus,
        %difficulty,
        duration_minutes,
        ?bucket,
        selected = exercises.len(),
        "generated workout"
    );

    WorkoutSession {
        id: generate_id(rng),
        name: workout_name(focus, difficulty),
        exercises,
        total_duration: duration_minutes * 60,
        difficulty,
        focus,
    }
}

/// Shuffle, split by type, then alternate active/isometric up to the target.
fn select_exercises<R: Rng + ?Sized>(
    mut eligible: Vec<&Exercise>,
    bucket: DurationBucket,
    rng: &mut R,
) -> Vec<Exercise> {
    eligible.shuffle(rng);

    let (active, isometric): (Vec<&Exercise>, Vec<&Exercise>) = eligible
        .into_iter()
        .partition(|e| e.exercise_type == ExerciseType::Active);

    let mut active = active.into_iter();
    let mut isometric = isometric.into_iter();
    let mut selected = Vec::with_capacity(bucket.target_count());
    let mut want_active = true;

    while selected.len() < bucket.target_count() {
        let next = if want_active {
            active.next().or_else(|| isometric.next())
        } else {
            isometric.next().or_else(|| active.next())
        };

        let Some(exercise) = next else {
            break;
        };

        let mut exercise = exercise.clone();
        exercise.execution = bucket.adjust(exercise.execution);
        selected.push(exercise);
        want_active = !want_active;
    }

    selected
}

/// Display name such as "Upper Body Power Break".
#[must_use]
pub fn workout_name(focus: Focus, difficulty: Difficulty) -> String {
    format!(
        "{} {} Break",
        focus.display_name(),
        difficulty.workout_label()
    )
}

fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
        .collect()
}
