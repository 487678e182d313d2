//! Phase timers for the workout sequencer.
//!
//! The ready countdown, a timed exercise, a rest and the completion delay
//! each run on a [`Timer`] that the sequencer advances one second at a time.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Running,
    Paused,
    Completed,
}

/// Whole-second countdown for one sequencer phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    total: u32,
    remaining: u32,
    state: TimerState,
}

impl Timer {
    /// A running timer of `seconds` length.
    ///
    /// A zero-length timer completes on its first tick.
    #[must_use]
    pub const fn started(seconds: u32) -> Self {
        Self {
            total: seconds,
            remaining: seconds,
            state: TimerState::Running,
        }
    }

    /// Hold the countdown until `resume`.
    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == TimerState::Paused {
            self.state = TimerState::Running;
        }
    }

    /// Advance by one second.
    ///
    /// Returns true only on the tick that runs the timer out. Paused and
    /// finished timers ignore ticks.
    pub fn tick(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.state = TimerState::Completed;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    /// Share of the phase already behind us, from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        1.0 - f64::from(self.remaining) / f64::from(self.total)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Remaining time as shown on the workout screen, e.g. "00:45".
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_clock(self.remaining)
    }
}

/// `MM:SS` clock face for a number of seconds.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

fn plural(n: u32) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Workout length in words, e.g. "10 minutes" or "1 minute, 35 seconds".
#[must_use]
pub fn format_length(seconds: u32) -> String {
    let minutes = seconds / 60;
    let rest = seconds % 60;

    match (minutes, rest) {
        (0, s) => format!("{s} second{}", plural(s)),
        (m, 0) => format!("{m} minute{}", plural(m)),
        (m, s) => format!("{m} minute{}, {s} second{}", plural(m), plural(s)),
    }
}

/// Text gauge, e.g. `[█████░░░░░]` at 0.5.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
