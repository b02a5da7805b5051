//! Core domain types for Wordle
//!
//! Packed words and feedback patterns. Everything here is pure value code with no
//! dictionary or cache state.

mod pattern;
mod word;

pub use pattern::{BITS_PER_MATCH, COMPUTED_MARKER, Match, PATTERN_SPACE, Pattern};
pub use word::{BITS_PER_LETTER, WORD_LENGTH, Word, WordError};
