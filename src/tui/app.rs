//! Application state for the TUI.

use crate::error::FitshiftError;
use crate::workout::{
    generate_workout, Catalog, Difficulty, Focus, Phase, RestRange, Sequencer, SequencerEvent,
    WorkoutSession, WorkoutSummary, DURATION_OPTIONS,
};

/// User intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    Left,
    Right,
    /// Start the workout, or finish a rep exercise.
    Confirm,
    /// Pause or resume a timed exercise.
    TogglePause,
    /// Ask to skip the current exercise.
    Skip,
    Yes,
    /// Declines a skip, or skips the rest.
    No,
}

/// Row of the setup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    Focus,
    Difficulty,
    Duration,
}

impl SetupField {
    pub const ALL: [Self; 3] = [Self::Focus, Self::Difficulty, Self::Duration];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::Difficulty => "Difficulty",
            Self::Duration => "Duration",
        }
    }
}

/// Choices on the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupChoice {
    pub focus: Focus,
    pub difficulty: Difficulty,
    pub minutes: u32,
}

impl SetupChoice {
    /// Move one option forward or back within a field, wrapping around.
    fn cycle(&mut self, field: SetupField, forward: bool) {
        match field {
            SetupField::Focus => self.focus = step(&Focus::ALL, self.focus, forward),
            SetupField::Difficulty => {
                self.difficulty = step(&Difficulty::ALL, self.difficulty, forward);
            }
            SetupField::Duration => {
                self.minutes = step(&DURATION_OPTIONS, self.minutes, forward);
            }
        }
    }

    /// Display value for a field.
    #[must_use]
    pub fn value(&self, field: SetupField) -> String {
        match field {
            SetupField::Focus => self.focus.display_name().to_string(),
            SetupField::Difficulty => self.difficulty.display_name().to_string(),
            SetupField::Duration => format!("{} min", self.minutes),
        }
    }
}

fn step<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    let len = options.len();
    let index = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    options[next]
}

/// The setup form and the catalog it draws from.
pub struct SetupState {
    pub catalog: Catalog,
    pub choice: SetupChoice,
    pub field: SetupField,
}

impl SetupState {
    /// How many catalog exercises the current choice can draw from.
    #[must_use]
    pub fn eligible_count(&self) -> usize {
        self.catalog
            .filter(self.choice.focus, self.choice.difficulty)
            .len()
    }
}

/// A workout in progress.
pub struct WorkoutState {
    pub sequencer: Sequencer,
    /// Waiting for y/n after the user asked to skip.
    pub confirm_skip: bool,
}

/// Which screen is showing.
pub enum Screen {
    Setup(SetupState),
    Workout(WorkoutState),
    Summary(WorkoutSummary),
}

/// Application state.
pub struct App {
    pub screen: Screen,
    /// Setup form set aside while a workout or its summary is showing.
    home: Option<SetupState>,
    rest: RestRange,
    /// Summary of the most recently finished workout.
    last_summary: Option<WorkoutSummary>,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Open at the setup screen.
    #[must_use]
    pub const fn setup(catalog: Catalog, choice: SetupChoice, rest: RestRange) -> Self {
        Self {
            screen: Screen::Setup(SetupState {
                catalog,
                choice,
                field: SetupField::Focus,
            }),
            home: None,
            rest,
            last_summary: None,
            status: None,
            should_quit: false,
        }
    }

    /// Open directly in a workout. Leaving it closes the app.
    ///
    /// # Errors
    ///
    /// Returns `FitshiftError::EmptyWorkout` if the session has no exercises.
    pub fn workout(session: WorkoutSession, rest: RestRange) -> Result<Self, FitshiftError> {
        let sequencer = Sequencer::new(session, rest)?;
        Ok(Self {
            screen: Screen::Workout(WorkoutState {
                sequencer,
                confirm_skip: false,
            }),
            home: None,
            rest,
            last_summary: None,
            status: None,
            should_quit: false,
        })
    }

    /// The summary of the last workout the user finished, if any.
    #[must_use]
    pub fn into_outcome(self) -> Option<WorkoutSummary> {
        self.last_summary
    }

    /// Whether leaving a workout returns to the setup screen.
    #[must_use]
    pub const fn has_setup(&self) -> bool {
        self.home.is_some()
    }

    /// Advance the running workout by one second.
    pub fn on_tick(&mut self) {
        if let Screen::Workout(state) = &mut self.screen {
            let events = state.sequencer.tick();
            self.handle_sequencer_events(events);
        }
    }

    /// Apply a user action to the current screen.
    pub fn apply(&mut self, action: Action) {
        match &mut self.screen {
            Screen::Setup(setup) => match action {
                Action::Quit => self.should_quit = true,
                Action::Up => setup.field = step(&SetupField::ALL, setup.field, false),
                Action::Down => setup.field = step(&SetupField::ALL, setup.field, true),
                Action::Left => setup.choice.cycle(setup.field, false),
                Action::Right => setup.choice.cycle(setup.field, true),
                Action::Confirm => self.start_workout(),
                _ => {}
            },
            Screen::Workout(state) if state.confirm_skip => {
                state.confirm_skip = false;
                self.status = None;
                if action == Action::Yes {
                    let events = state.sequencer.skip();
                    self.handle_sequencer_events(events);
                }
            }
            Screen::Workout(state) => {
                let events = match action {
                    Action::Quit => state.sequencer.exit(),
                    Action::Confirm => state.sequencer.complete(),
                    Action::No => state.sequencer.skip_rest(),
                    Action::TogglePause => {
                        let paused = state.sequencer.toggle_pause();
                        self.status = paused.then(|| "Paused - press space to resume".to_string());
                        Vec::new()
                    }
                    Action::Skip => {
                        if matches!(
                            state.sequencer.phase(),
                            Phase::Ready { .. } | Phase::Active { .. } | Phase::AwaitingCompletion
                        ) {
                            state.confirm_skip = true;
                            self.status = Some("Skip this exercise? (y/n)".to_string());
                        }
                        Vec::new()
                    }
                    _ => Vec::new(),
                };
                self.handle_sequencer_events(events);
            }
            Screen::Summary(_) => match action {
                Action::Confirm => self.leave_workout(None),
                Action::Quit => self.should_quit = true,
                _ => {}
            },
        }
    }

    fn start_workout(&mut self) {
        let Screen::Setup(setup) = &self.screen else {
            return;
        };
        let choice = setup.choice;
        let session = generate_workout(
            &setup.catalog,
            choice.focus,
            choice.difficulty,
            choice.minutes,
        );

        match Sequencer::new(session, self.rest) {
            Ok(sequencer) => {
                self.status = None;
                let workout = Screen::Workout(WorkoutState {
                    sequencer,
                    confirm_skip: false,
                });
                if let Screen::Setup(setup) = std::mem::replace(&mut self.screen, workout) {
                    self.home = Some(setup);
                }
            }
            Err(e) => self.status = Some(format!("Cannot start: {e}")),
        }
    }

    /// Back to the setup form with its last choices, or quit without one.
    fn leave_workout(&mut self, status: Option<&str>) {
        match self.home.take() {
            Some(setup) => {
                self.screen = Screen::Setup(setup);
                self.status = status.map(str::to_string);
            }
            None => self.should_quit = true,
        }
    }

    fn handle_sequencer_events(&mut self, events: Vec<SequencerEvent>) {
        for event in events {
            match event {
                SequencerEvent::WorkoutComplete(progress) => {
                    if let Screen::Workout(state) = &self.screen {
                        let summary = WorkoutSummary::new(state.sequencer.session(), &progress);
                        self.last_summary = Some(summary.clone());
                        self.screen = Screen::Summary(summary);
                        self.status = None;
                    }
                }
                SequencerEvent::Aborted => self.leave_workout(Some("Workout abandoned")),
                SequencerEvent::ExerciseCompleted { skipped: true, .. } => {
                    self.status = Some("Exercise skipped".to_string());
                }
                SequencerEvent::NextExercise { .. } => self.status = None,
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::exercise::tests::make_exercise;
    use crate::workout::{Category, Execution, ExerciseType, Language};

    fn choice() -> SetupChoice {
        SetupChoice {
            focus: Focus::Full,
            difficulty: Difficulty::Beginner,
            minutes: 5,
        }
    }

    fn single_timer_session() -> WorkoutSession {
        WorkoutSession {
            id: "tuitest01".to_string(),
            name: "Full Body Starter Break".to_string(),
            exercises: vec![make_exercise(
                "plank",
                ExerciseType::Isometric,
                Category::Full,
                Difficulty::Beginner,
                Execution::Timer { duration: 2 },
            )],
            total_duration: 300,
            difficulty: Difficulty::Beginner,
            focus: Focus::Full,
        }
    }

    #[test]
    fn test_setup_navigation_wraps() {
        let catalog = Catalog::builtin(Language::En).unwrap();
        let mut app = App::setup(catalog, choice(), RestRange::default());

        app.apply(Action::Left);
        app.apply(Action::Down);
        app.apply(Action::Right);
        app.apply(Action::Right);
        app.apply(Action::Up);
        app.apply(Action::Up);
        app.apply(Action::Right);

        let Screen::Setup(setup) = &app.screen else {
            panic!("Expected setup screen");
        };
        assert_eq!(setup.choice.focus, Focus::Lower);
        assert_eq!(setup.choice.difficulty, Difficulty::Advanced);
        assert_eq!(setup.choice.minutes, 10);
        assert_eq!(setup.field, SetupField::Duration);
    }

    #[test]
    fn test_setup_refuses_empty_workout() {
        let mut app = App::setup(Catalog::default(), choice(), RestRange::default());

        app.apply(Action::Confirm);

        assert!(matches!(app.screen, Screen::Setup(_)));
        assert!(app.status.as_deref().unwrap().contains("no exercises"));
    }

    #[test]
    fn test_setup_starts_workout() {
        let catalog = Catalog::builtin(Language::En).unwrap();
        let mut app = App::setup(catalog, choice(), RestRange::default());

        app.apply(Action::Confirm);

        let Screen::Workout(state) = &app.screen else {
            panic!("Expected workout screen");
        };
        assert_eq!(state.sequencer.session().len(), 3);
    }

    #[test]
    fn test_workout_runs_to_summary() {
        let mut app = App::workout(single_timer_session(), RestRange::default()).unwrap();

        // 3 countdown ticks, 2 timer ticks, 1 completion delay tick
        for _ in 0..6 {
            app.on_tick();
        }

        let Screen::Summary(summary) = &app.screen else {
            panic!("Expected summary screen");
        };
        assert_eq!(summary.completed_exercises, 1);

        app.apply(Action::Confirm);
        assert!(app.should_quit);
        assert!(app.into_outcome().is_some());
    }

    #[test]
    fn test_exit_returns_to_setup() {
        let catalog = Catalog::builtin(Language::En).unwrap();
        let mut app = App::setup(catalog, choice(), RestRange::default());
        app.apply(Action::Right);
        app.apply(Action::Confirm);
        assert!(app.has_setup());

        app.on_tick();
        app.apply(Action::Quit);

        assert!(!app.should_quit);
        let Screen::Setup(setup) = &app.screen else {
            panic!("Expected setup screen");
        };
        assert_eq!(setup.choice.focus, Focus::Upper);
        assert_eq!(app.status.as_deref(), Some("Workout abandoned"));
        assert!(!app.has_setup());

        // The form works as before and can start another workout.
        app.apply(Action::Confirm);
        assert!(matches!(app.screen, Screen::Workout(_)));
    }

    #[test]
    fn test_summary_offers_new_workout() {
        let catalog = Catalog::builtin(Language::En).unwrap();
        let mut app = App::setup(catalog, choice(), RestRange::default());
        app.apply(Action::Confirm);

        // Skip through every exercise and rest until the summary shows.
        for _ in 0..10 {
            app.apply(Action::Skip);
            app.apply(Action::Yes);
            app.apply(Action::No);
            app.on_tick();
        }
        assert!(matches!(app.screen, Screen::Summary(_)));

        app.apply(Action::Confirm);
        assert!(!app.should_quit);
        assert!(matches!(app.screen, Screen::Setup(_)));

        app.apply(Action::Quit);
        assert!(app.should_quit);
        let summary = app.into_outcome().unwrap();
        assert_eq!(summary.completed_exercises, 3);
    }

    #[test]
    fn test_skip_requires_confirmation() {
        let mut app = App::workout(single_timer_session(), RestRange::default()).unwrap();

        app.apply(Action::Skip);
        assert!(app.status.as_deref().unwrap().contains("(y/n)"));
        app.apply(Action::No);
        let Screen::Workout(state) = &app.screen else {
            panic!("Expected workout screen");
        };
        assert!(state.sequencer.progress().is_empty());

        app.apply(Action::Skip);
        app.apply(Action::Yes);
        let Screen::Workout(state) = &app.screen else {
            panic!("Expected workout screen");
        };
        assert!(matches!(state.sequencer.phase(), Phase::Done { .. }));
        assert_eq!(app.status.as_deref(), Some("Exercise skipped"));
    }

    #[test]
    fn test_quit_mid_workout_has_no_outcome() {
        let mut app = App::workout(single_timer_session(), RestRange::default()).unwrap();
        app.on_tick();

        app.apply(Action::Quit);

        assert!(app.should_quit);
        assert!(app.into_outcome().is_none());
    }

    #[test]
    fn test_empty_session_rejected() {
        let mut session = single_timer_session();
        session.exercises.clear();
        assert!(matches!(
            App::workout(session, RestRange::default()),
            Err(FitshiftError::EmptyWorkout)
        ));
    }
}
