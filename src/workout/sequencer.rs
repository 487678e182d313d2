//! Walks a user through a generated workout.
//!
//! The [`Sequencer`] is a tick-driven state machine. The host calls
//! [`Sequencer::tick`] once per second and forwards user actions
//! (complete, skip, skip rest, pause, exit). Every call returns the
//! [`SequencerEvent`]s it produced.
//!
//! Per exercise the phases are:
//!
//! ```text
//! Ready (3..2..1) -> Active (timer) ---------> Rest -> Ready (next)
//!                 \-> AwaitingCompletion (reps) /  \-> Done -> Finished
//! ```
//!
//! Each phase owns its timer, so leaving a phase drops the old timer before
//! the next one exists. Only one countdown is ever live.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::FitshiftError;
use crate::workout::clock::{Clock, SystemClock};
use crate::workout::exercise::{Execution, Exercise};
use crate::workout::session::{WorkoutProgress, WorkoutSession};
use crate::workout::timer::Timer;

/// Steps of the "get ready" countdown shown before every exercise.
pub const READY_COUNTDOWN_SECONDS: u32 = 3;

/// Pause after the final exercise before the workout is reported complete.
pub const COMPLETION_DELAY_SECONDS: u32 = 1;

/// Inclusive bounds for the random rest between exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestRange {
    min_seconds: u32,
    max_seconds: u32,
}

impl RestRange {
    /// Create a rest range.
    ///
    /// # Errors
    ///
    /// Returns `FitshiftError::Config` if `min_seconds > max_seconds`.
    pub fn new(min_seconds: u32, max_seconds: u32) -> Result<Self, FitshiftError> {
        if min_seconds > max_seconds {
            return Err(FitshiftError::Config(format!(
                "rest minimum ({min_seconds}s) is greater than maximum ({max_seconds}s)"
            )));
        }
        Ok(Self {
            min_seconds,
            max_seconds,
        })
    }

    #[must_use]
    pub const fn min_seconds(&self) -> u32 {
        self.min_seconds
    }

    #[must_use]
    pub const fn max_seconds(&self) -> u32 {
        self.max_seconds
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min_seconds..=self.max_seconds)
    }
}

impl Default for RestRange {
    fn default() -> Self {
        Self {
            min_seconds: 20,
            max_seconds: 30,
        }
    }
}

/// Where the sequencer is within the current exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Counting down before the exercise starts.
    Ready { countdown: Timer },
    /// A timed exercise is running.
    Active { timer: Timer },
    /// A rep exercise is underway; waits for the user to finish it.
    AwaitingCompletion,
    /// Resting before the next exercise.
    Rest { timer: Timer },
    /// The final exercise is done; the completion delay is running.
    Done { delay: Timer },
    /// The workout finished and the progress log was emitted.
    Finished,
    /// The user left the workout; progress was discarded.
    Aborted,
}

impl Phase {
    /// Short label for logs and status lines.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ready { .. } => "ready",
            Self::Active { .. } => "active",
            Self::AwaitingCompletion => "awaiting completion",
            Self::Rest { .. } => "rest",
            Self::Done { .. } => "done",
            Self::Finished => "finished",
            Self::Aborted => "aborted",
        }
    }

    /// Check if the workout has ended one way or the other.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Aborted)
    }
}

/// Something that happened in response to a tick or action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequencerEvent {
    /// The ready countdown moved; zero means "go".
    Countdown { remaining: u32 },
    /// An exercise began and a progress entry was recorded.
    ExerciseStarted { index: usize, exercise_id: String },
    /// An exercise ended, either naturally or by skipping.
    ExerciseCompleted {
        index: usize,
        exercise_id: String,
        skipped: bool,
    },
    /// A rest interval began.
    RestStarted { seconds: u32 },
    /// The next exercise is up and its countdown started.
    NextExercise { index: usize },
    /// Every exercise is done. Emitted once, carrying the progress log.
    WorkoutComplete(Vec<WorkoutProgress>),
    /// The user exited; nothing is reported.
    Aborted,
}

/// Drives one workout session from the first countdown to the summary.
#[derive(Debug)]
pub struct Sequencer<C: Clock = SystemClock> {
    session: WorkoutSession,
    index: usize,
    phase: Phase,
    progress: Vec<WorkoutProgress>,
    rest: RestRange,
    clock: C,
    rng: StdRng,
}

impl Sequencer<SystemClock> {
    /// Create a sequencer using wall-clock time and an entropy-seeded RNG.
    ///
    /// # Errors
    ///
    /// Returns `FitshiftError::EmptyWorkout` if the session has no exercises.
    pub fn new(session: WorkoutSession, rest: RestRange) -> Result<Self, FitshiftError> {
        Self::with_parts(session, rest, SystemClock, StdRng::from_entropy())
    }
}

impl<C: Clock> Sequencer<C> {
    /// Create a sequencer with an explicit clock and random source.
    ///
    /// # Errors
    ///
    /// Returns `FitshiftError::EmptyWorkout` if the session has no exercises.
    pub fn with_parts(
        session: WorkoutSession,
        rest: RestRange,
        clock: C,
        rng: StdRng,
    ) -> Result<Self, FitshiftError> {
        if session.is_empty() {
            tracing::debug!(session = %session.id, "refusing to start an empty workout");
            return Err(FitshiftError::EmptyWorkout);
        }

        tracing::info!(
            session = %session.id,
            exercises = session.len(),
            "starting workout"
        );

        Ok(Self {
            session,
            index: 0,
            phase: ready_phase(),
            progress: Vec::new(),
            rest,
            clock,
            rng,
        })
    }

    /// Advance the live timer by one second.
    pub fn tick(&mut self) -> Vec<SequencerEvent> {
        let mut events = Vec::new();

        match &mut self.phase {
            Phase::Ready { countdown } => {
                let expired = countdown.tick();
                events.push(SequencerEvent::Countdown {
                    remaining: countdown.remaining_seconds(),
                });
                if expired {
                    self.begin_exercise(&mut events);
                }
            }
            Phase::Active { timer } => {
                if timer.tick() {
                    self.finish_exercise(false, &mut events);
                }
            }
            Phase::Rest { timer } => {
                if timer.tick() {
                    self.next_exercise(&mut events);
                }
            }
            Phase::Done { delay } => {
                if delay.tick() {
                    self.set_phase(Phase::Finished);
                    tracing::info!(session = %self.session.id, "workout complete");
                    events.push(SequencerEvent::WorkoutComplete(self.progress.clone()));
                }
            }
            Phase::AwaitingCompletion | Phase::Finished | Phase::Aborted => {}
        }

        events
    }

    /// Finish the current rep exercise.
    ///
    /// Ignored unless a rep exercise is awaiting completion; timed exercises
    /// end when their timer runs out.
    pub fn complete(&mut self) -> Vec<SequencerEvent> {
        let mut events = Vec::new();
        if self.phase == Phase::AwaitingCompletion {
            self.finish_exercise(false, &mut events);
        } else {
            tracing::debug!(phase = self.phase.label(), "complete ignored");
        }
        events
    }

    /// Skip the current exercise after the user confirmed it.
    ///
    /// A skipped exercise is recorded exactly like a completed one.
    pub fn skip(&mut self) -> Vec<SequencerEvent> {
        let mut events = Vec::new();
        match self.phase {
            Phase::Ready { .. } => {
                self.begin_exercise(&mut events);
                self.finish_exercise(true, &mut events);
            }
            Phase::Active { .. } | Phase::AwaitingCompletion => {
                self.finish_exercise(true, &mut events);
            }
            _ => tracing::debug!(phase = self.phase.label(), "skip ignored"),
        }
        events
    }

    /// Cut the rest short and move to the next exercise.
    pub fn skip_rest(&mut self) -> Vec<SequencerEvent> {
        let mut events = Vec::new();
        if matches!(self.phase, Phase::Rest { .. }) {
            self.next_exercise(&mut events);
        } else {
            tracing::debug!(phase = self.phase.label(), "skip rest ignored");
        }
        events
    }

    /// Pause or resume a running timed exercise.
    ///
    /// Returns whether the exercise is paused afterwards.
    pub fn toggle_pause(&mut self) -> bool {
        if let Phase::Active { timer } = &mut self.phase {
            if timer.is_running() {
                timer.pause();
            } else {
                timer.resume();
            }
        }
        self.is_paused()
    }

    /// Abandon the workout and discard its progress.
    pub fn exit(&mut self) -> Vec<SequencerEvent> {
        if self.phase.is_terminal() {
            return Vec::new();
        }
        tracing::info!(
            session = %self.session.id,
            index = self.index,
            "workout abandoned"
        );
        self.progress.clear();
        self.set_phase(Phase::Aborted);
        vec![SequencerEvent::Aborted]
    }

    /// The session being executed.
    #[must_use]
    pub const fn session(&self) -> &WorkoutSession {
        &self.session
    }

    /// Give back the session, e.g. to build a summary.
    #[must_use]
    pub fn into_session(self) -> WorkoutSession {
        self.session
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Zero-based position of the current exercise.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.index
    }

    /// The exercise currently up.
    #[must_use]
    pub fn current_exercise(&self) -> Option<&Exercise> {
        self.session.exercises.get(self.index)
    }

    /// Check if the current exercise is the final one.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.session.len()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        matches!(&self.phase, Phase::Active { timer } if !timer.is_running())
    }

    /// Progress entries recorded so far.
    #[must_use]
    pub fn progress(&self) -> &[WorkoutProgress] {
        &self.progress
    }

    /// Share of the workout reached, from 0.0 to 1.0.
    ///
    /// An exercise counts once it has started.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn overall_progress(&self) -> f64 {
        let started = usize::from(self.progress.len() > self.index);
        ((self.index + started) as f64 / self.session.len() as f64).min(1.0)
    }

    /// Record a new attempt and run or await the current exercise.
    fn begin_exercise(&mut self, events: &mut Vec<SequencerEvent>) {
        let Some(exercise) = self.session.exercises.get(self.index) else {
            return;
        };

        self.progress
            .push(WorkoutProgress::start(exercise.id.clone(), self.clock.now()));
        events.push(SequencerEvent::ExerciseStarted {
            index: self.index,
            exercise_id: exercise.id.clone(),
        });

        let phase = match exercise.execution {
            Execution::Timer { duration } => Phase::Active {
                timer: Timer::started(duration),
            },
            Execution::Reps { .. } => Phase::AwaitingCompletion,
        };
        self.set_phase(phase);
    }

    /// Close the latest attempt, then rest or wrap up.
    fn finish_exercise(&mut self, skipped: bool, events: &mut Vec<SequencerEvent>) {
        let now = self.clock.now();
        if let Some(entry) = self.progress.last_mut() {
            entry.finish(now);
        }

        let exercise_id = self
            .current_exercise()
            .map(|e| e.id.clone())
            .unwrap_or_default();
        events.push(SequencerEvent::ExerciseCompleted {
            index: self.index,
            exercise_id,
            skipped,
        });

        if self.is_last() {
            self.set_phase(Phase::Done {
                delay: Timer::started(COMPLETION_DELAY_SECONDS),
            });
        } else {
            let seconds = self.rest.sample(&mut self.rng);
            if seconds == 0 {
                self.next_exercise(events);
                return;
            }
            self.set_phase(Phase::Rest {
                timer: Timer::started(seconds),
            });
            events.push(SequencerEvent::RestStarted { seconds });
        }
    }

    fn next_exercise(&mut self, events: &mut Vec<SequencerEvent>) {
        self.index += 1;
        self.set_phase(ready_phase());
        events.push(SequencerEvent::NextExercise { index: self.index });
    }

    fn set_phase(&mut self, phase: Phase) {
        tracing::debug!(
            index = self.index,
            from = self.phase.label(),
            to = phase.label(),
            "phase change"
        );
        self.phase = phase;
    }
}

fn ready_phase() -> Phase {
    Phase::Ready {
        countdown: Timer::started(READY_COUNTDOWN_SECONDS),
    }
}
