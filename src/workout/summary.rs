//! Post-workout summary.

use serde::Serialize;

use crate::workout::session::{WorkoutProgress, WorkoutSession};

/// One line of the summary's exercise list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub exercise_id: String,
    pub name: String,
    /// e.g. "30s hold" or "10 reps × 3 sets"
    pub detail: String,
    pub completed: bool,
}

/// What the user accomplished in a finished workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSummary {
    pub session_id: String,
    pub session_name: String,
    pub completed_exercises: usize,
    pub total_exercises: usize,
    /// Percentage from 0 to 100.
    pub completion_rate: f64,
    /// Whole minutes from the first start to the last finish.
    pub duration_minutes: i64,
    pub message: String,
    pub exercises: Vec<SummaryRow>,
}

impl WorkoutSummary {
    /// Build a summary from a session and its progress log.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(session: &WorkoutSession, progress: &[WorkoutProgress]) -> Self {
        let completed_exercises = progress.iter().filter(|p| p.completed).count();
        let total_exercises = session.len();
        let completion_rate = if total_exercises == 0 {
            0.0
        } else {
            (completed_exercises as f64 / total_exercises as f64 * 100.0).min(100.0)
        };

        let exercises = session
            .exercises
            .iter()
            .map(|exercise| SummaryRow {
                exercise_id: exercise.id.clone(),
                name: exercise.name.clone(),
                detail: exercise.execution.describe(),
                completed: progress
                    .iter()
                    .any(|p| p.exercise_id == exercise.id && p.completed),
            })
            .collect();

        Self {
            session_id: session.id.clone(),
            session_name: session.name.clone(),
            completed_exercises,
            total_exercises,
            completion_rate,
            duration_minutes: workout_minutes(progress),
            message: motivational_message(completion_rate).to_string(),
            exercises,
        }
    }
}

/// Rounded minutes between the first recorded start and the last recorded end.
fn workout_minutes(progress: &[WorkoutProgress]) -> i64 {
    let first = progress.first().map(|p| p.start_time);
    let last = progress.iter().rev().find_map(|p| p.end_time);

    match (first, last) {
        (Some(start), Some(end)) => {
            let seconds = end.signed_duration_since(start).num_seconds().max(0);
            (seconds + 30) / 60
        }
        _ => 0,
    }
}

fn motivational_message(completion_rate: f64) -> &'static str {
    if completion_rate >= 100.0 {
        "Outstanding work! You completed your entire break workout!"
    } else if completion_rate >= 75.0 {
        "Great job! You powered through most of your workout!"
    } else if completion_rate >= 50.0 {
        "Good effort! Every bit of movement counts!"
    } else {
        "Nice start! Remember, consistency is key!"
    }
}
