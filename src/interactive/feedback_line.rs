//! Feedback entry line
//!
//! Key-by-key editor for the five-digit feedback an operator types after each
//! guess: `0` miss, `1` partial, `2` hit. Other characters are ignored, the line
//! holds at most five digits and Enter only submits a full line.

use crate::core::{Pattern, WORD_LENGTH};

/// A key press, reduced to what the editor cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Backspace,
    Enter,
    Quit,
}

/// What the caller should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    /// Show this digit
    Echo(char),
    /// Remove the last shown digit
    Erase,
    /// A complete pattern was entered; the line is now empty
    Submit(Pattern),
    Ignored,
    Quit,
}

#[derive(Debug, Default)]
pub struct FeedbackLine {
    digits: String,
}

impl FeedbackLine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Digits typed so far
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.digits
    }

    pub fn handle(&mut self, key: KeyInput) -> LineEvent {
        match key {
            KeyInput::Char(c @ ('0' | '1' | '2')) if self.digits.len() < WORD_LENGTH => {
                self.digits.push(c);
                LineEvent::Echo(c)
            }
            KeyInput::Char('q') | KeyInput::Quit => LineEvent::Quit,
            KeyInput::Backspace if self.digits.pop().is_some() => LineEvent::Erase,
            KeyInput::Enter if self.digits.len() == WORD_LENGTH => {
                let digits = std::mem::take(&mut self.digits);
                Pattern::from_digits(&digits).map_or(LineEvent::Ignored, LineEvent::Submit)
            }
            _ => LineEvent::Ignored,
        }
    }

    /// Run a whole typed line through the editor
    ///
    /// Any character the editor would ignore makes the line invalid.
    pub fn feed_line(&mut self, line: &str) -> LineInput {
        self.digits.clear();
        for c in line.trim().chars() {
            match self.handle(KeyInput::Char(c)) {
                LineEvent::Quit => return LineInput::Quit,
                LineEvent::Echo(_) => {}
                _ => {
                    self.digits.clear();
                    return LineInput::Invalid;
                }
            }
        }
        match self.handle(KeyInput::Enter) {
            LineEvent::Submit(pattern) => LineInput::Pattern(pattern),
            _ => {
                self.digits.clear();
                LineInput::Invalid
            }
        }
    }
}

/// A whole line of operator input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineInput {
    Pattern(Pattern),
    Invalid,
    Quit,
}
