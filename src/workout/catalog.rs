//! Exercise catalogs.
//!
//! A catalog is a YAML list of [`Exercise`] records. Two catalogs ship with
//! the binary (English and Danish, sharing the same ids); users can point
//! `workout.catalog` in `config.yaml` at their own file.

use std::collections::HashSet;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::FitshiftError;
use crate::workout::exercise::{Difficulty, Execution, Exercise, Focus};

const CATALOG_EN: &str = include_str!("../../data/catalog_en.yaml");
const CATALOG_DA: &str = include_str!("../../data/catalog_da.yaml");

/// Display language, which selects the built-in catalog.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Danish.
    Da,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::En => write!(f, "English"),
            Self::Da => write!(f, "Dansk"),
        }
    }
}

/// An immutable, validated list of exercises.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    exercises: Vec<Exercise>,
}

impl Catalog {
    /// Build a catalog from exercise records.
    ///
    /// # Errors
    ///
    /// Returns `FitshiftError::Catalog` if ids repeat, a name is empty, or a
    /// timer/rep count is zero.
    pub fn new(exercises: Vec<Exercise>) -> Result<Self, FitshiftError> {
        validate(&exercises)?;
        Ok(Self { exercises })
    }

    /// Parse a catalog from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or fails validation.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, FitshiftError> {
        let exercises: Vec<Exercise> = serde_yaml::from_str(yaml)
            .map_err(|e| FitshiftError::Catalog(format!("invalid catalog: {e}")))?;
        Self::new(exercises)
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, FitshiftError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FitshiftError::Catalog(format!("failed to read {}: {e}", path.display()))
        })?;
        let catalog = Self::from_yaml_str(&contents).map_err(|e| match e {
            FitshiftError::Catalog(msg) => {
                FitshiftError::Catalog(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;
        tracing::debug!(path = %path.display(), count = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// The catalog bundled for a language.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled data is corrupt.
    pub fn builtin(language: Language) -> Result<Self, FitshiftError> {
        match language {
            Language::En => Self::from_yaml_str(CATALOG_EN),
            Language::Da => Self::from_yaml_str(CATALOG_DA),
        }
    }

    /// All exercises in catalog order.
    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Look up an exercise by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Exercises eligible for a focus and difficulty, in catalog order.
    #[must_use]
    pub fn filter(&self, focus: Focus, difficulty: Difficulty) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| focus.admits(e.category) && e.difficulty.suits(difficulty))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

fn validate(exercises: &[Exercise]) -> Result<(), FitshiftError> {
    let mut seen = HashSet::new();

    for exercise in exercises {
        if !seen.insert(exercise.id.as_str()) {
            return Err(FitshiftError::Catalog(format!(
                "duplicate exercise id '{}'",
                exercise.id
            )));
        }
        if exercise.name.trim().is_empty() {
            return Err(FitshiftError::Catalog(format!(
                "exercise '{}' has an empty name",
                exercise.id
            )));
        }
        match exercise.execution {
            Execution::Timer { duration: 0 } => {
                return Err(FitshiftError::Catalog(format!(
                    "exercise '{}' has a zero duration",
                    exercise.id
                )));
            }
            Execution::Reps { reps, sets } if reps == 0 || sets == 0 => {
                return Err(FitshiftError::Catalog(format!(
                    "exercise '{}' needs at least one rep and one set",
                    exercise.id
                )));
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::exercise::{Category, ExerciseType};
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalogs_load() {
        let en = Catalog::builtin(Language::En).unwrap();
        let da = Catalog::builtin(Language::Da).unwrap();

        assert!(en.len() >= 15);
        assert_eq!(en.len(), da.len());
    }

    #[test]
    fn test_builtin_catalogs_share_ids() {
        let en = Catalog::builtin(Language::En).unwrap();
        let da = Catalog::builtin(Language::Da).unwrap();

        for exercise in en.exercises() {
            let other = da.get(&exercise.id).unwrap();
            assert_eq!(other.category, exercise.category);
            assert_eq!(other.difficulty, exercise.difficulty);
            assert_eq!(other.exercise_type, exercise.exercise_type);
        }
    }

    #[test]
    fn test_get() {
        let catalog = Catalog::builtin(Language::En).unwrap();
        assert_eq!(catalog.get("plank").unwrap().name, "Plank Hold");
        assert!(catalog.get("does-not-exist").is_none());
    }

    #[test]
    fn test_filter_beginner_only_admits_beginner() {
        let catalog = Catalog::builtin(Language::En).unwrap();
        let eligible = catalog.filter(Focus::Full, Difficulty::Beginner);

        assert!(!eligible.is_empty());
        assert!(eligible.iter().all(|e| e.difficulty == Difficulty::Beginner));
    }

    #[test]
    fn test_filter_advanced_admits_intermediate_and_advanced() {
        let catalog = Catalog::builtin(Language::En).unwrap();
        let eligible = catalog.filter(Focus::Full, Difficulty::Advanced);

        assert!(eligible.iter().any(|e| e.difficulty == Difficulty::Advanced));
        assert!(eligible.iter().any(|e| e.difficulty == Difficulty::Intermediate));
        assert!(eligible.iter().all(|e| e.difficulty != Difficulty::Beginner));
    }

    #[test]
    fn test_filter_focus_includes_full_body() {
        let catalog = Catalog::builtin(Language::En).unwrap();
        let eligible = catalog.filter(Focus::Upper, Difficulty::Beginner);

        assert!(eligible.iter().any(|e| e.category == Category::Full));
        assert!(eligible.iter().all(|e| e.category != Category::Lower));
    }

    #[test]
    fn test_filter_is_stable() {
        let catalog = Catalog::builtin(Language::En).unwrap();
        for focus in Focus::ALL {
            for difficulty in Difficulty::ALL {
                let first: Vec<&str> = catalog
                    .filter(focus, difficulty)
                    .iter()
                    .map(|e| e.id.as_str())
                    .collect();
                let second: Vec<&str> = catalog
                    .filter(focus, difficulty)
                    .iter()
                    .map(|e| e.id.as_str())
                    .collect();
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let exercise = crate::workout::exercise::tests::make_exercise(
            "plank",
            ExerciseType::Isometric,
            Category::Full,
            Difficulty::Beginner,
            Execution::Timer { duration: 30 },
        );
        let err = Catalog::new(vec![exercise.clone(), exercise]).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let exercise = crate::workout::exercise::tests::make_exercise(
            "plank",
            ExerciseType::Isometric,
            Category::Full,
            Difficulty::Beginner,
            Execution::Timer { duration: 0 },
        );
        assert!(Catalog::new(vec![exercise]).is_err());
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.yaml");
        std::fs::write(
            &path,
            r"
- id: wall-sit
  name: Wall Sit
  type: isometric
  category: lower
  execution_type: timer
  duration: 40
  difficulty: beginner
",
        )
        .unwrap();

        let catalog = Catalog::load_from_path(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get("wall-sit").unwrap().execution,
            Execution::Timer { duration: 40 }
        );
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Catalog::load_from_path(&temp_dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, FitshiftError::Catalog(_)));
    }
}
