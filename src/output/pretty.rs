use colored::Colorize;

use crate::workout::{format_length, Exercise, ExerciseType, WorkoutSession, WorkoutSummary};

fn type_badge(exercise_type: ExerciseType) -> colored::ColoredString {
    match exercise_type {
        ExerciseType::Active => "[Active]".yellow(),
        ExerciseType::Isometric => "[Hold]  ".cyan(),
    }
}

/// Format a generated workout as pretty output
pub fn format_session_pretty(session: &WorkoutSession) -> String {
    let mut output = format!("{}\n", session.name.bold());
    output.push_str(&format!(
        "  {}: {}  {}: {}  {}: {}\n",
        "Focus".dimmed(),
        session.focus,
        "Level".dimmed(),
        session.difficulty,
        "ID".dimmed(),
        session.id
    ));
    output.push_str(&format!(
        "  {}: {} {}\n",
        "Length".dimmed(),
        format_length(session.total_duration),
        format!(
            "(~{} estimated)",
            format_length(session.estimated_seconds())
        )
        .dimmed()
    ));

    if session.is_empty() {
        output.push_str("  No exercises match this focus and difficulty\n");
        return output;
    }

    output.push_str(&"─".repeat(60));
    output.push('\n');

    for (i, exercise) in session.exercises.iter().enumerate() {
        output.push_str(&format!(
            "{:>2}. {} {}  {}\n",
            i + 1,
            type_badge(exercise.exercise_type),
            exercise.name.bold(),
            exercise.execution.describe().green()
        ));
    }

    output
}

/// Format a list of exercises as pretty output
pub fn format_exercises_pretty(exercises: &[&Exercise], title: &str) -> String {
    if exercises.is_empty() {
        return format!("{title} (0 exercises)\n  No exercises");
    }

    let mut output = format!("{} ({} exercises)\n", title, exercises.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for exercise in exercises {
        output.push_str(&format!(
            "{} {}  {}  {}\n",
            type_badge(exercise.exercise_type),
            exercise.name.bold(),
            exercise.id.dimmed(),
            exercise.difficulty.to_string().magenta()
        ));
    }

    output
}

/// Format a single exercise as pretty output
pub fn format_exercise_pretty(exercise: &Exercise) -> String {
    let mut output = format!(
        "{} {}\n",
        type_badge(exercise.exercise_type),
        exercise.name.bold()
    );
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), exercise.id));
    output.push_str(&format!("  {}: {}\n", "Category".dimmed(), exercise.category));
    output.push_str(&format!(
        "  {}: {}\n",
        "Difficulty".dimmed(),
        exercise.difficulty
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Execution".dimmed(),
        exercise.execution.describe()
    ));

    if !exercise.description.is_empty() {
        output.push_str(&format!(
            "  {}: {}\n",
            "Description".dimmed(),
            exercise.description
        ));
    }

    if !exercise.muscle_groups.is_empty() {
        output.push_str(&format!(
            "  {}: {}\n",
            "Muscles".dimmed(),
            exercise.muscle_groups.join(", ")
        ));
    }

    if !exercise.instructions.is_empty() {
        output.push_str(&format!("  {}:\n", "Instructions".dimmed()));
        for (i, step) in exercise.instructions.iter().enumerate() {
            output.push_str(&format!("    {}. {step}\n", i + 1));
        }
    }

    if !exercise.tips.is_empty() {
        output.push_str(&format!("  {}:\n", "Tips".dimmed()));
        for tip in &exercise.tips {
            output.push_str(&format!("    - {tip}\n"));
        }
    }

    output
}

/// Format a finished workout's summary as pretty output
pub fn format_summary_pretty(summary: &WorkoutSummary) -> String {
    let mut output = format!("{}\n", "Workout Complete!".green().bold());
    output.push_str(&format!("{}\n", summary.session_name.bold()));
    output.push_str(&"─".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "  {}: {}/{}\n",
        "Exercises".dimmed(),
        summary.completed_exercises,
        summary.total_exercises
    ));
    output.push_str(&format!(
        "  {}: {:.0}%\n",
        "Completion".dimmed(),
        summary.completion_rate
    ));
    output.push_str(&format!(
        "  {}: {} min\n",
        "Duration".dimmed(),
        summary.duration_minutes
    ));
    output.push('\n');

    for row in &summary.exercises {
        let icon = if row.completed {
            "✓".green()
        } else {
            "✗".red()
        };
        output.push_str(&format!("  {icon} {}  {}\n", row.name, row.detail.dimmed()));
    }

    output.push('\n');
    output.push_str(&format!("{}\n", summary.message.italic()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::exercise::tests::make_exercise;
    use crate::workout::{Category, Difficulty, Execution, Focus, WorkoutProgress};
    use chrono::{Duration, TimeZone, Utc};

    fn session() -> WorkoutSession {
        WorkoutSession {
            id: "k3j9x0a1b".to_string(),
            name: "Lower Body Power Break".to_string(),
            exercises: vec![
                make_exercise(
                    "squat",
                    ExerciseType::Active,
                    Category::Lower,
                    Difficulty::Beginner,
                    Execution::Reps { reps: 15, sets: 2 },
                ),
                make_exercise(
                    "wall-sit",
                    ExerciseType::Isometric,
                    Category::Lower,
                    Difficulty::Beginner,
                    Execution::Timer { duration: 45 },
                ),
            ],
            total_duration: 300,
            difficulty: Difficulty::Intermediate,
            focus: Focus::Lower,
        }
    }

    #[test]
    fn test_session_pretty_lists_exercises() {
        colored::control::set_override(false);
        let output = format_session_pretty(&session());

        assert!(output.starts_with("Lower Body Power Break"));
        assert!(output.contains("5 minutes"));
        assert!(output.contains(" 1. [Active] squat  15 reps × 2 sets"));
        assert!(output.contains(" 2. [Hold]   wall sit  45s hold"));
    }

    #[test]
    fn test_empty_session_pretty() {
        colored::control::set_override(false);
        let mut empty = session();
        empty.exercises.clear();

        let output = format_session_pretty(&empty);
        assert!(output.contains("No exercises match"));
    }

    #[test]
    fn test_exercises_pretty_empty() {
        let output = format_exercises_pretty(&[], "Upper Body");
        assert_eq!(output, "Upper Body (0 exercises)\n  No exercises");
    }

    #[test]
    fn test_summary_pretty() {
        colored::control::set_override(false);
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let mut squat = WorkoutProgress::start("squat", start);
        squat.finish(start + Duration::seconds(60));

        let summary = WorkoutSummary::new(&session(), &[squat]);
        let output = format_summary_pretty(&summary);

        assert!(output.contains("Exercises: 1/2"));
        assert!(output.contains("Completion: 50%"));
        assert!(output.contains("Duration: 1 min"));
        assert!(output.contains("✓ squat"));
        assert!(output.contains("✗ wall sit"));
    }
}
