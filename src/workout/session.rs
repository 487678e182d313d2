//! Generated workout sessions and per-exercise progress records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workout::exercise::{Difficulty, Exercise, Focus};

/// One generated workout, ready to be executed.
///
/// Sessions are never modified after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Random token identifying this session.
    pub id: String,
    /// Display name, e.g. "Full Body Starter Break".
    pub name: String,
    /// Exercises in execution order, already adjusted for the duration.
    pub exercises: Vec<Exercise>,
    /// Requested length in seconds.
    pub total_duration: u32,
    pub difficulty: Difficulty,
    pub focus: Focus,
}

impl WorkoutSession {
    /// Check if the session has nothing to execute.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Number of exercises.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Sum of per-exercise time estimates, in seconds.
    ///
    /// Informational only; `total_duration` is what was requested.
    #[must_use]
    pub fn estimated_seconds(&self) -> u32 {
        self.exercises
            .iter()
            .map(Exercise::estimated_seconds)
            .fold(0, u32::saturating_add)
    }
}

/// Outcome of one exercise attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutProgress {
    /// Id of the exercise in the session.
    pub exercise_id: String,
    /// Set when the exercise finished or was skipped.
    pub completed: bool,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

impl WorkoutProgress {
    /// Start a new attempt.
    #[must_use]
    pub fn start(exercise_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            completed: false,
            start_time: now,
            end_time: None,
        }
    }

    /// Mark the attempt as finished.
    pub fn finish(&mut self, now: DateTime<Utc>) {
        self.completed = true;
        self.end_time = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_progress_start_and_finish() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let mut progress = WorkoutProgress::start("plank", start);

        assert!(!progress.completed);
        assert!(progress.end_time.is_none());

        let end = start + chrono::Duration::seconds(45);
        progress.finish(end);
        assert!(progress.completed);
        assert_eq!(progress.start_time, start);
        assert_eq!(progress.end_time, Some(end));
    }

    #[test]
    fn test_empty_session() {
        let session = WorkoutSession {
            id: "abc".to_string(),
            name: "Full Body Starter Break".to_string(),
            exercises: vec![],
            total_duration: 300,
            difficulty: Difficulty::Beginner,
            focus: Focus::Full,
        };
        assert!(session.is_empty());
        assert_eq!(session.len(), 0);
        assert_eq!(session.estimated_seconds(), 0);
    }
}
