//! Solver error type

use crate::core::{Pattern, Word};
use thiserror::Error;

/// Illegal-state conditions raised while driving a solve
///
/// Running out of steps is not an error; it shows up in
/// [`SolveOutcome`](super::SolveOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("feedback {pattern} for guess '{guess}' leaves no possible words")]
    EmptyPossibilitySet { guess: Word, pattern: Pattern },

    #[error("no guess available at step {step}")]
    NoGuessAvailable { step: usize },

    #[error("'{0}' is not in the dictionary")]
    UnknownWord(String),

    #[error("the session has already finished")]
    SessionFinished,

    #[error("step {step} is never played by this plan")]
    StepNotPlayed { step: usize },
}
