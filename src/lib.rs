//! fitshift - Active break workouts in the terminal
//!
//! This crate generates short bodyweight workouts for a chosen focus,
//! difficulty and length, and sequences them through countdowns, timed
//! exercises, rep exercises and rests.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod tui;
pub mod workout;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::FitshiftError;
