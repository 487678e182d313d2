//! JSON output formatting for fitshift.

use serde::Serialize;
use serde_json::json;

use crate::error::FitshiftError;
use crate::workout::{Exercise, WorkoutSession};

/// Format a workout session as JSON
///
/// Adds the estimated length next to the requested one.
///
/// # Errors
///
/// Returns `FitshiftError::Json` if JSON serialization fails.
pub fn format_session_json(session: &WorkoutSession) -> Result<String, FitshiftError> {
    let output = json!({
        "id": session.id,
        "name": session.name,
        "focus": session.focus,
        "difficulty": session.difficulty,
        "total_duration": session.total_duration,
        "estimated_seconds": session.estimated_seconds(),
        "count": session.len(),
        "exercises": session.exercises,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format catalog exercises as JSON
///
/// # Errors
///
/// Returns `FitshiftError::Json` if JSON serialization fails.
pub fn format_exercises_json(exercises: &[&Exercise], title: &str) -> Result<String, FitshiftError> {
    let output = json!({
        "list": title,
        "count": exercises.len(),
        "items": exercises
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `FitshiftError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, FitshiftError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::{generate_workout_with_rng, Catalog, Difficulty, Focus, Language};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_session_json_fields() {
        let catalog = Catalog::builtin(Language::En).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let session =
            generate_workout_with_rng(&catalog, Focus::Full, Difficulty::Beginner, 10, &mut rng);

        let output = format_session_json(&session).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["total_duration"], 600);
        assert_eq!(value["focus"], "full");
        assert_eq!(value["difficulty"], "beginner");
        assert_eq!(value["count"], 4);
        assert_eq!(value["exercises"].as_array().unwrap().len(), 4);
        assert!(value["exercises"][0]["execution_type"].is_string());
    }

    #[test]
    fn test_exercises_json_list() {
        let catalog = Catalog::builtin(Language::En).unwrap();
        let exercises = catalog.filter(Focus::Upper, Difficulty::Beginner);

        let output = format_exercises_json(&exercises, "Upper Body").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["list"], "Upper Body");
        assert_eq!(value["count"], exercises.len());
    }
}
