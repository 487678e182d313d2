//! Exercise records and the enums that classify them.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Body region a workout targets.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    /// Whole body.
    #[default]
    Full,
    /// Arms, chest and shoulders.
    Upper,
    /// Legs and glutes.
    Lower,
}

impl Focus {
    /// All focus options in display order.
    pub const ALL: [Self; 3] = [Self::Full, Self::Upper, Self::Lower];

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Full => "Full Body",
            Self::Upper => "Upper Body",
            Self::Lower => "Lower Body",
        }
    }

    /// Check whether an exercise of the given category trains this focus.
    ///
    /// Full-body exercises count toward every focus.
    #[must_use]
    pub const fn admits(&self, category: Category) -> bool {
        matches!(
            (self, category),
            (Self::Full, _)
                | (_, Category::Full)
                | (Self::Upper, Category::Upper)
                | (Self::Lower, Category::Lower)
        )
    }
}

impl std::fmt::Display for Focus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Body region an exercise belongs to in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Upper,
    Lower,
    Full,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upper => write!(f, "upper"),
            Self::Lower => write!(f, "lower"),
            Self::Full => write!(f, "full"),
        }
    }
}

/// Difficulty ranking, used both to tag exercises and to filter them.
#[derive(
    ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All difficulties in ascending order.
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Numeric rank: beginner=1, intermediate=2, advanced=3.
    #[must_use]
    pub const fn level(&self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }

    /// Check whether an exercise at this difficulty suits a `target` request.
    ///
    /// Admits the target level and the level directly below it.
    #[must_use]
    pub fn suits(&self, target: Self) -> bool {
        let level = self.level();
        let target = target.level();
        level <= target && level >= target.saturating_sub(1).max(1)
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Word used in generated workout names.
    #[must_use]
    pub const fn workout_label(&self) -> &'static str {
        match self {
            Self::Beginner => "Starter",
            Self::Intermediate => "Power",
            Self::Advanced => "Elite",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Movement style of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    /// Repetition-style movement.
    Active,
    /// Hold-style exercise.
    Isometric,
}

impl std::fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Isometric => write!(f, "Hold"),
        }
    }
}

/// How an exercise is performed and measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "execution_type", rename_all = "lowercase")]
pub enum Execution {
    /// Runs against a countdown.
    Timer {
        /// Length in seconds.
        duration: u32,
    },
    /// Counted in repetitions and finished by the user.
    Reps {
        reps: u32,
        #[serde(default = "default_sets")]
        sets: u32,
    },
}

const fn default_sets() -> u32 {
    1
}

impl Execution {
    /// Short description, e.g. "45s hold" or "10 reps × 3 sets".
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Timer { duration } => format!("{duration}s hold"),
            Self::Reps { reps, sets } => format!("{reps} reps × {sets} sets"),
        }
    }
}

/// A catalog exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    pub category: Category,
    #[serde(default)]
    pub muscle_groups: Vec<String>,
    #[serde(flatten)]
    pub execution: Execution,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    pub difficulty: Difficulty,
}

impl Exercise {
    /// Rough time needed to perform the exercise, in seconds.
    ///
    /// Timed exercises add a 10 second transition. Rep exercises assume
    /// 3 seconds per rep and 30 seconds between sets.
    #[must_use]
    pub const fn estimated_seconds(&self) -> u32 {
        match self.execution {
            Execution::Timer { duration } => duration.saturating_add(10),
            Execution::Reps { reps, sets } => reps
                .saturating_mul(3)
                .saturating_mul(sets)
                .saturating_add(30u32.saturating_mul(sets.saturating_sub(1)))
                .saturating_add(10),
        }
    }
}
